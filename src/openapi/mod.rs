use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Materials Dashboard API",
        version = "1.0.0",
        description = r#"
# Materials Dashboard API

Read and edit a building-materials catalog, browse tracked inventory and the
client directory, and fetch the dashboard overview.

## Filtering

List endpoints accept `search` (case-insensitive substring) plus `category`
and/or `status` selectors. `All` or an empty value disables a selector.
Results keep the collection's order.

## Error Handling

Failures return an `ErrorResponse` body with an HTTP status:

```json
{
  "error": "Bad Request",
  "message": "Validation error: price must not be negative (got -1)",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "materials", description = "Materials catalog"),
        (name = "inventory", description = "Tracked stock positions"),
        (name = "clients", description = "Client directory"),
        (name = "dashboard", description = "Overview and activity"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::materials::list_materials,
        crate::handlers::materials::list_categories,
        crate::handlers::materials::materials_summary,
        crate::handlers::materials::get_material,
        crate::handlers::materials::update_price,
        crate::handlers::materials::update_quantity,

        crate::handlers::inventory::list_inventory,
        crate::handlers::inventory::inventory_summary,
        crate::handlers::inventory::get_inventory,

        crate::handlers::clients::list_clients,
        crate::handlers::clients::clients_summary,
        crate::handlers::clients::material_demand,
        crate::handlers::clients::get_client,

        crate::handlers::dashboard::overview,
        crate::handlers::dashboard::recent_activity,

        crate::handlers::health::liveness_check,
        crate::handlers::health::readiness_check,
    ),
    components(
        schemas(
            crate::models::MaterialRecord,
            crate::models::InventoryItem,
            crate::models::ClientRecord,
            crate::models::MaterialCategory,
            crate::models::StockStatus,
            crate::models::ClientStatus,
            crate::models::Trend,
            crate::models::StockFillBand,
            crate::models::MaterialPreview,
            crate::services::materials::MaterialView,
            crate::services::inventory::InventoryView,
            crate::services::analytics::InventoryMetrics,
            crate::services::analytics::InventoryAlert,
            crate::services::analytics::ClientMetrics,
            crate::services::analytics::MaterialDemand,
            crate::services::dashboard::DashboardOverview,
            crate::services::dashboard::OverviewStats,
            crate::events::ActivityEntry,
            crate::events::ActivityKind,
            crate::handlers::materials::UpdatePriceRequest,
            crate::handlers::materials::UpdateQuantityRequest,
            crate::handlers::materials::MaterialUpdateResponse,
            crate::handlers::clients::ClientCard,
            crate::handlers::health::HealthResponse,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;
