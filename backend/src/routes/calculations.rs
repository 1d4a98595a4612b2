//! Metric calculation API routes

use crate::error::ApiResult;
use crate::services::CalculationService;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use dietwise_shared::types::{ActivityLevelInfo, MacroTargetsRequest, MetricsResponse};
use dietwise_shared::{MacroTargets, UserProfile};

/// Create calculation routes
pub fn calculation_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(calculate_metrics))
        .route("/macros", post(calculate_macros))
        .route("/activity-levels", get(list_activity_levels))
}

/// POST /api/v1/metrics - Derive all metrics for a profile
///
/// Missing profile fields are not an error; the dependent metrics come back as null.
async fn calculate_metrics(
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> ApiResult<Json<MetricsResponse>> {
    let Json(profile) = payload?;
    Ok(Json(CalculationService::metrics_for(&profile)))
}

/// POST /api/v1/metrics/macros - Macro targets for a calorie goal
async fn calculate_macros(
    payload: Result<Json<MacroTargetsRequest>, JsonRejection>,
) -> ApiResult<Json<MacroTargets>> {
    let Json(req) = payload?;
    Ok(Json(CalculationService::macros_for(req.target_calories)))
}

/// GET /api/v1/metrics/activity-levels - Activity levels offered on the profile form
async fn list_activity_levels() -> Json<Vec<ActivityLevelInfo>> {
    Json(CalculationService::activity_levels())
}
