//! Profile validation API routes

use crate::error::ApiResult;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use dietwise_shared::types::ProfileValidationResponse;
use dietwise_shared::UserProfile;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/validate", post(validate_profile))
}

/// POST /api/v1/profile/validate - Check profile fields against their ranges
///
/// Always 200; the body lists every rejected field.
async fn validate_profile(
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> ApiResult<Json<ProfileValidationResponse>> {
    let Json(profile) = payload?;
    Ok(Json(ProfileService::validate(&profile)))
}
