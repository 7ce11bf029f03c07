use axum::{
    extract::{Json, Path, Query, State},
    routing::get,
    Router,
};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    errors::ServiceError,
    filters::ListParams,
    models::{ClientRecord, MaterialPreview, CARD_MATERIAL_PREVIEW},
    services::analytics::{ClientMetrics, MaterialDemand},
    ApiResponse, ApiResult, AppState,
};

/// A client card: the record plus its derived figures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientCard {
    #[serde(flatten)]
    pub client: ClientRecord,
    #[schema(value_type = Option<String>)]
    pub average_order_value: Option<Decimal>,
    pub material_preview: MaterialPreview,
}

impl From<ClientRecord> for ClientCard {
    fn from(client: ClientRecord) -> Self {
        Self {
            average_order_value: client.average_order_value(),
            material_preview: client.material_preview(CARD_MATERIAL_PREVIEW),
            client,
        }
    }
}

pub fn clients_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients))
        .route("/summary", get(clients_summary))
        .route("/demand", get(material_demand))
        .route("/:id", get(get_client))
}

/// List clients matching the search text and status
#[utoipa::path(
    get,
    path = "/api/v1/clients",
    params(ListParams),
    responses(
        (status = 200, description = "Matching clients in directory order", body = [ClientCard]),
        (status = 400, description = "Unknown status or a category selector", body = crate::errors::ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn list_clients(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<ClientCard>> {
    let filter = params.client_filter()?;
    let cards = state
        .clients
        .list(&filter)
        .into_iter()
        .map(ClientCard::from)
        .collect();
    Ok(Json(ApiResponse::list(cards)))
}

/// Directory-wide client counts and order value
#[utoipa::path(
    get,
    path = "/api/v1/clients/summary",
    responses(
        (status = 200, description = "Client summary", body = ClientMetrics)
    ),
    tag = "clients"
)]
pub async fn clients_summary(State(state): State<AppState>) -> ApiResult<ClientMetrics> {
    Ok(Json(ApiResponse::success(state.clients.summary())))
}

/// Material names ranked by how many clients order them
#[utoipa::path(
    get,
    path = "/api/v1/clients/demand",
    responses(
        (status = 200, description = "Material demand, most requested first", body = [MaterialDemand])
    ),
    tag = "clients"
)]
pub async fn material_demand(State(state): State<AppState>) -> ApiResult<Vec<MaterialDemand>> {
    Ok(Json(ApiResponse::list(state.clients.material_demand())))
}

/// Get a client by id
#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client returned", body = ClientCard),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ClientCard> {
    let client = state
        .clients
        .get(&id)
        .ok_or_else(|| ServiceError::NotFound(format!("Client {} not found", id)))?;
    Ok(Json(ApiResponse::success(ClientCard::from(client))))
}
