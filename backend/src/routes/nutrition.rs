//! Nutrition API routes

use crate::error::ApiResult;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use dietwise_shared::types::{NutritionSummaryRequest, NutritionSummaryResponse};

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new().route("/summary", post(summarize_food_log))
}

/// POST /api/v1/nutrition/summary - Totals, remaining calories and progress for a day
async fn summarize_food_log(
    payload: Result<Json<NutritionSummaryRequest>, JsonRejection>,
) -> ApiResult<Json<NutritionSummaryResponse>> {
    let Json(req) = payload?;
    Ok(Json(NutritionService::summarize(&req)?))
}
