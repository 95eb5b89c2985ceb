use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint handler. Always healthy while the process serves requests.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Register health check routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
