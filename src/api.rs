use axum::{routing::get, Json, Router};
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;
use utoipa::OpenApi;

use crate::{
    config::AppConfig, handlers, middleware_helpers::request_id_middleware, openapi::ApiDocV1,
    tracing::configure_http_tracing, AppState,
};

/// Routes mounted under `/api/v1`.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/materials", handlers::materials::materials_router())
        .nest("/inventory", handlers::inventory::inventory_router())
        .nest("/clients", handlers::clients::clients_router())
        .nest("/dashboard", handlers::dashboard::dashboard_router())
}

/// Full application: API, health probes, OpenAPI document and middleware.
pub fn app_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);

    Router::new()
        .nest("/api/v1", api_v1_routes())
        .nest("/health", handlers::health::health_routes())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDocV1::openapi()) }),
        )
        .layer(cors)
        .layer(configure_http_tracing())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// CORS from config: permissive in development or when opted in,
/// otherwise restricted to the configured origins.
pub fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static(crate::tracing::REQUEST_ID_HEADER),
        ]);

    if config.should_allow_permissive_cors() {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
