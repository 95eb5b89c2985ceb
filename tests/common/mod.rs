#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use scoreboard_api::config::{Config, Environment};
use scoreboard_api::state::AppState;

/// Build the app router backed by an in-memory `SQLite` database with migrations.
///
/// The connection is returned alongside so tests can inspect rows directly.
pub async fn test_app() -> (Router, DatabaseConnection) {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();

    Migrator::up(&db, None).await.unwrap_or_default();

    let state = AppState {
        db: db.clone(),
        config: Config {
            database_url: String::new(),
            server_host: std::net::IpAddr::from([127, 0, 0, 1]),
            server_port: 0,
            environment: Environment::Development,
            log_level: "warn".to_string(),
            frontend_url: "http://localhost:3001".to_string(),
            db_min_connections: 1,
            db_max_connections: 1,
        },
    };

    (scoreboard_api::routes::router().with_state(state), db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();

    send(app, request).await
}

/// Test helper: POST a JSON body and return (status, body).
pub async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_default();

    send(app, request).await
}

/// GET `uri` and parse the body as JSON.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Register a player through the API and return its id.
pub async fn register_player(app: &Router, name: &str) -> i64 {
    let (status, body) = post_json(app, "/api/players", &serde_json::json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    let v: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
    v["id"].as_i64().unwrap_or_default()
}

/// Record a game through the API and return its id.
pub async fn record_game(
    app: &Router,
    winner_id: i64,
    loser_id: i64,
    game_type: &str,
    played_at: &str,
) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/games",
        &serde_json::json!({
            "winner_id": winner_id,
            "loser_id": loser_id,
            "game_type": game_type,
            "played_at": played_at,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "record game failed: {body}");
    let v: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
    v["id"].as_i64().unwrap_or_default()
}

/// POST a raw body with the JSON content type and return (status, body).
pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap_or_default();

    send(app, request).await
}
