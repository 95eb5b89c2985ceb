use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::services::StatsService;
use crate::state::AppState;

/// Build the leaderboard route group: `/stats/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/players", get(player_leaderboard))
        .route("/games", get(game_type_leaderboard))
}

/// `GET /stats/players` — Players ranked by score, win percentage, then name.
async fn player_leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let leaderboard = StatsService::player_leaderboard(&state.db)
        .await
        .map_err(|e| AppError::from_service("player_leaderboard", e))?;

    Ok(Json(leaderboard))
}

/// `GET /stats/games` — Game types ranked by number of games played.
async fn game_type_leaderboard(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let leaderboard = StatsService::game_type_leaderboard(&state.db)
        .await
        .map_err(|e| AppError::from_service("game_type_leaderboard", e))?;

    Ok(Json(leaderboard))
}
