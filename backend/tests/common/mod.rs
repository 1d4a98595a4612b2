//! Common test utilities for integration tests
//!
//! Builds the full router with middleware and drives it in-process.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use dietwise_backend::{config::AppConfig, routes, state::AppState};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a new test application with a local (not global) metrics recorder
    pub fn new() -> Self {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        Self::with_state(AppState::new(test_config(), Some(handle)))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            app: routes::create_router(state),
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// POST and parse the response body as JSON
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.post(path, &body.to_string()).await;
        let json = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("response is not JSON ({}): {}", e, body));
        (status, json)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config
}

/// Profile of a 30 year old moderately active man, 5'10" and 150 lbs, aiming for 140 lbs
pub fn complete_profile() -> serde_json::Value {
    serde_json::json!({
        "name": "Alex",
        "age": 30,
        "sex": "male",
        "height": { "ft": 5, "in": 10 },
        "weight": 150,
        "activityLevel": "moderate",
        "targetWeight": 140
    })
}
