use axum::{
    extract::{Json, Path, Query, State},
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    errors::ServiceError,
    filters::ListParams,
    models::MaterialCategory,
    services::{
        analytics::InventoryMetrics,
        materials::{parse_price, parse_quantity, MaterialView, MutationOutcome},
    },
    ApiResponse, ApiResult, AppState,
};

/// A number as sent by a grid cell: either a JSON number or its text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumericInput {
    fn as_text(&self) -> String {
        match self {
            NumericInput::Number(n) => n.to_string(),
            NumericInput::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePriceRequest {
    #[schema(value_type = String, example = "9.25")]
    pub price: NumericInput,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    #[schema(value_type = i64, example = 40)]
    pub quantity: NumericInput,
}

/// Updated row plus the catalog totals after the edit.
#[derive(Debug, Serialize, ToSchema)]
pub struct MaterialUpdateResponse {
    pub material: MaterialView,
    pub summary: InventoryMetrics,
}

pub fn materials_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_materials))
        .route("/categories", get(list_categories))
        .route("/summary", get(materials_summary))
        .route("/:id", get(get_material))
        .route("/:id/price", put(update_price))
        .route("/:id/quantity", put(update_quantity))
}

/// List catalog materials matching the search text and category
#[utoipa::path(
    get,
    path = "/api/v1/materials",
    params(ListParams),
    responses(
        (status = 200, description = "Matching materials in catalog order", body = [MaterialView],
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Unknown category", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn list_materials(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<MaterialView>> {
    let filter = params.material_filter()?;
    let materials = state.materials.read().await.list(&filter);
    Ok(Json(ApiResponse::list(materials)))
}

/// Categories available to the category selector
#[utoipa::path(
    get,
    path = "/api/v1/materials/categories",
    responses(
        (status = 200, description = "All categories in declaration order", body = [MaterialCategory])
    ),
    tag = "materials"
)]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<MaterialCategory>> {
    let categories = state.materials.read().await.categories();
    Ok(Json(ApiResponse::list(categories)))
}

/// Catalog-wide stock counts and value
#[utoipa::path(
    get,
    path = "/api/v1/materials/summary",
    responses(
        (status = 200, description = "Catalog summary", body = InventoryMetrics)
    ),
    tag = "materials"
)]
pub async fn materials_summary(State(state): State<AppState>) -> ApiResult<InventoryMetrics> {
    let summary = state.materials.read().await.summary();
    Ok(Json(ApiResponse::success(summary)))
}

/// Get a material by id
#[utoipa::path(
    get,
    path = "/api/v1/materials/{id}",
    params(("id" = String, Path, description = "Material ID")),
    responses(
        (status = 200, description = "Material returned", body = MaterialView),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn get_material(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MaterialView> {
    let material = state
        .materials
        .read()
        .await
        .get(&id)
        .ok_or_else(|| ServiceError::NotFound(format!("Material {} not found", id)))?;
    Ok(Json(ApiResponse::success(material)))
}

/// Replace a material's unit price
#[utoipa::path(
    put,
    path = "/api/v1/materials/{id}/price",
    params(("id" = String, Path, description = "Material ID")),
    request_body = UpdatePriceRequest,
    responses(
        (status = 200, description = "Price updated", body = MaterialUpdateResponse),
        (status = 400, description = "Negative or non-numeric price", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePriceRequest>,
) -> ApiResult<MaterialUpdateResponse> {
    let price = parse_price(&request.price.as_text())?;

    let mut materials = state.materials.write().await;
    let outcome = materials.update_price(&id, price)?;
    let material = apply_outcome(&state, outcome, &id).await?;
    let summary = materials.summary();
    drop(materials);

    info!(material_id = %id, %price, "price update applied");
    Ok(Json(
        ApiResponse::success(MaterialUpdateResponse { material, summary })
        .with_message("Price updated"),
    ))
}

/// Replace a material's on-hand quantity
#[utoipa::path(
    put,
    path = "/api/v1/materials/{id}/quantity",
    params(("id" = String, Path, description = "Material ID")),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity updated", body = MaterialUpdateResponse),
        (status = 400, description = "Negative or non-numeric quantity", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "materials"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateQuantityRequest>,
) -> ApiResult<MaterialUpdateResponse> {
    let quantity = parse_quantity(&request.quantity.as_text())?;

    let mut materials = state.materials.write().await;
    let outcome = materials.update_quantity(&id, quantity)?;
    let material = apply_outcome(&state, outcome, &id).await?;
    let summary = materials.summary();
    drop(materials);

    info!(material_id = %id, quantity, "quantity update applied");
    Ok(Json(
        ApiResponse::success(MaterialUpdateResponse { material, summary })
        .with_message("Inventory updated"),
    ))
}

/// Records the edit in the activity log, or maps a miss to 404.
async fn apply_outcome(
    state: &AppState,
    outcome: MutationOutcome,
    id: &str,
) -> Result<MaterialView, ServiceError> {
    match outcome {
        MutationOutcome::Updated { view, event } => {
            state.activity.write().await.record(&event);
            Ok(view)
        }
        MutationOutcome::Unmatched => {
            Err(ServiceError::NotFound(format!("Material {} not found", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_input_accepts_numbers_and_text() {
        let body: UpdatePriceRequest = serde_json::from_str(r#"{"price": 9.25}"#).unwrap();
        assert_eq!(body.price.as_text(), "9.25");

        let body: UpdatePriceRequest = serde_json::from_str(r#"{"price": "abc"}"#).unwrap();
        assert_eq!(body.price.as_text(), "abc");

        let body: UpdateQuantityRequest = serde_json::from_str(r#"{"quantity": -3}"#).unwrap();
        assert_eq!(parse_quantity(&body.quantity.as_text()).unwrap(), -3);
    }

    #[test]
    fn exponent_form_numbers_parse() {
        let body: UpdatePriceRequest = serde_json::from_str(r#"{"price": 1e21}"#).unwrap();
        let price = parse_price(&body.price.as_text()).unwrap();
        assert_eq!(price.to_string(), "1000000000000000000000");
    }
}
