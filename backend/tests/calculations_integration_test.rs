//! Integration tests for metric calculation endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_metrics_for_complete_profile() {
    let app = common::TestApp::new();

    let (status, response) = app.post_json("/api/v1/metrics", &common::complete_profile()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["metrics"]["bmi"], 21.5);
    assert_eq!(response["metrics"]["bmr"], 1647.0);
    assert_eq!(response["metrics"]["tdee"], 2553.0);
    assert_eq!(response["metrics"]["targetCalories"], 2053.0);
    assert_eq!(response["bmiCategory"], "normal");
    assert_eq!(response["profileComplete"], true);
    assert!(response["missingFields"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_metrics_for_partial_profile() {
    let app = common::TestApp::new();
    let body = json!({ "height": { "ft": 5, "in": 10 }, "weight": 150 });

    let (status, response) = app.post_json("/api/v1/metrics", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["metrics"]["bmi"], 21.5);
    assert!(response["metrics"]["bmr"].is_null());
    assert!(response["metrics"]["targetCalories"].is_null());
    assert_eq!(response["macroTargets"], json!({"protein": 50, "carbs": 130, "fat": 35, "fiber": 25}));
    assert_eq!(response["profileComplete"], false);
    assert_eq!(
        response["missingFields"],
        json!(["age", "sex", "activityLevel", "targetWeight"])
    );
}

#[tokio::test]
async fn test_weight_gain_goal() {
    let app = common::TestApp::new();
    let mut profile = common::complete_profile();
    profile["targetWeight"] = json!(160);

    let (_, response) = app.post_json("/api/v1/metrics", &profile).await;

    assert_eq!(response["metrics"]["targetCalories"], 2853.0);
}

#[tokio::test]
async fn test_macros_for_goal() {
    let app = common::TestApp::new();

    let (status, response) = app
        .post_json("/api/v1/metrics/macros", &json!({ "targetCalories": 2000 }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({"protein": 150, "carbs": 200, "fat": 67, "fiber": 28}));
}

#[tokio::test]
async fn test_macros_without_goal_fall_back() {
    let app = common::TestApp::new();

    let (status, response) = app.post_json("/api/v1/metrics/macros", &json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["protein"], 50);
    assert_eq!(response["fiber"], 25);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/v1/metrics", "{ not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("BAD_REQUEST"));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = common::test_config();
    config.http.body_limit_bytes = 256;
    let app = common::TestApp::with_state(dietwise_backend::state::AppState::new(config, None));
    let mut profile = common::complete_profile();
    profile["name"] = json!("x".repeat(1024));

    let (status, _) = app.post("/api/v1/metrics", &profile.to_string()).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_activity_levels() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/metrics/activity-levels").await;

    assert_eq!(status, StatusCode::OK);
    let levels: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(levels.as_array().unwrap().len(), 5);
    assert_eq!(levels[2]["value"], "moderate");
    assert_eq!(levels[2]["multiplier"], 1.55);
    assert_eq!(levels[2]["description"], "Moderate exercise/sports 3-5 days/week");
}
