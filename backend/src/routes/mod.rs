//! Route definitions for the DietWise API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod calculations;
mod health;
mod metrics;
mod nutrition;
mod profile;

pub use calculations::calculation_routes;
pub use nutrition::nutrition_routes;
pub use profile::profile_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let http = state.config().http.clone();

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::render_metrics))
        // nested "/" only matches "/api/v1"; the trailing-slash form is registered here
        .route("/api/v1/", get(api_banner))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(RequestBodyLimitLayer::new(http.body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(http.request_timeout()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_banner))
        .nest("/metrics", calculations::calculation_routes())
        .nest("/profile", profile::profile_routes())
        .nest("/nutrition", nutrition::nutrition_routes())
}

async fn api_banner() -> &'static str {
    "DietWise API v1"
}
