use axum::{
    extract::{Json, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    events::ActivityEntry, services::DashboardOverview, ApiResponse, ApiResult, AppState,
};

/// Upper bound on the activity page size.
const MAX_ACTIVITY_LIMIT: usize = 100;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ActivityParams {
    /// Number of entries, newest first
    pub limit: Option<usize>,
}

pub fn dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(overview))
        .route("/activity", get(recent_activity))
}

/// Stat cards, inventory alert and recent activity in one payload
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/overview",
    responses(
        (status = 200, description = "Dashboard overview", body = DashboardOverview)
    ),
    tag = "dashboard"
)]
pub async fn overview(State(state): State<AppState>) -> ApiResult<DashboardOverview> {
    let materials = state.materials.read().await;
    let activity = state.activity.read().await;
    let overview = DashboardOverview::compute(
        &materials,
        &state.inventory,
        &state.clients,
        &activity,
        state.config.recent_activity_limit,
    );
    Ok(Json(ApiResponse::success(overview)))
}

/// Recorded catalog edits, newest first
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/activity",
    params(ActivityParams),
    responses(
        (status = 200, description = "Recent activity", body = [ActivityEntry])
    ),
    tag = "dashboard"
)]
pub async fn recent_activity(
    State(state): State<AppState>,
    Query(params): Query<ActivityParams>,
) -> ApiResult<Vec<ActivityEntry>> {
    let limit = params
        .limit
        .unwrap_or(state.config.recent_activity_limit)
        .min(MAX_ACTIVITY_LIMIT);
    let entries = state.activity.read().await.recent(limit);
    Ok(Json(ApiResponse::list(entries)))
}
