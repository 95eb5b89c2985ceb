mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn health_root_returns_healthy() {
    let (app, _db) = common::test_app().await;
    let (status, json) = common::get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[tokio::test]
async fn health_api_returns_healthy() {
    let (app, _db) = common::test_app().await;
    let (status, json) = common::get_json(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _db) = common::test_app().await;
    let (status, _body) = common::get(&app, "/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
