use axum::{
    extract::{Json, Path, Query, State},
    routing::get,
    Router,
};

use crate::{
    errors::ServiceError,
    filters::ListParams,
    services::{analytics::InventoryMetrics, inventory::InventoryView},
    ApiResponse, ApiResult, AppState,
};

pub fn inventory_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/summary", get(inventory_summary))
        .route("/:id", get(get_inventory))
}

/// List inventory items with optional filtering
#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    params(ListParams),
    responses(
        (status = 200, description = "Inventory list returned", body = [InventoryView],
            headers(("X-Request-Id" = String, description = "Unique request id for tracing"))
        ),
        (status = 400, description = "Unknown category or status", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn list_inventory(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<InventoryView>> {
    let filter = params.inventory_filter()?;
    Ok(Json(ApiResponse::list(state.inventory.list(&filter))))
}

/// Stock counts and value over every tracked item
#[utoipa::path(
    get,
    path = "/api/v1/inventory/summary",
    responses(
        (status = 200, description = "Inventory summary", body = InventoryMetrics)
    ),
    tag = "inventory"
)]
pub async fn inventory_summary(State(state): State<AppState>) -> ApiResult<InventoryMetrics> {
    let summary = state.inventory.summary();
    let response = match state.inventory.alert() {
        Some(alert) => ApiResponse::success(summary).with_message(alert.message),
        None => ApiResponse::success(summary),
    };
    Ok(Json(response))
}

/// Get an inventory item by id
#[utoipa::path(
    get,
    path = "/api/v1/inventory/{id}",
    params(("id" = String, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Inventory item returned", body = InventoryView),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<InventoryView> {
    let item = state
        .inventory
        .get(&id)
        .ok_or_else(|| ServiceError::NotFound(format!("Inventory item {} not found", id)))?;
    Ok(Json(ApiResponse::success(item)))
}
