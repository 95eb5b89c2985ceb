use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::dto::{CreatedResponse, RecentGamesQuery, RecordGameRequest};
use crate::error::AppError;
use crate::services::{GameService, StatsService};
use crate::state::AppState;

/// Build the game route group: `/games/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_game))
        .route("/recent", get(recent_games))
}

/// `POST /games` — Record a head-to-head result.
async fn record_game(
    State(state): State<AppState>,
    payload: Result<Json<RecordGameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    if req.winner_id == req.loser_id {
        return Err(AppError::BadRequest(
            "Winner and loser must be different players".to_string(),
        ));
    }

    let id = GameService::record_game(
        &state.db,
        req.winner_id,
        req.loser_id,
        &req.game_type,
        req.played_at,
    )
    .await
    .map_err(|e| AppError::from_service("record_game", e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Game recorded successfully".to_string(),
        }),
    ))
}

/// `GET /games/recent?limit=N` — Most recently played games, newest first.
async fn recent_games(
    State(state): State<AppState>,
    query: Result<Query<RecentGamesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let games = StatsService::recent_games(&state.db, query.limit)
        .await
        .map_err(|e| AppError::from_service("recent_games", e))?;

    Ok(Json(games))
}
