mod games;
mod health;
mod players;
mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health` — liveness check
/// - `/api/...` — health, players, stats and games endpoints
pub fn router() -> Router<AppState> {
    let api = Router::new()
        .merge(health::router())
        .nest("/players", players::router())
        .nest("/stats", stats::router())
        .nest("/games", games::router());

    Router::new().merge(health::router()).nest("/api", api)
}
