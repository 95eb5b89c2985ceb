use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::dto::{CreatedResponse, RegisterPlayerRequest};
use crate::error::{AppError, ServiceError};
use crate::services::{PlayerService, StatsService};
use crate::state::AppState;

/// Build the player route group: `/players/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_players).post(register_player))
        .route("/{id}/stats", get(player_breakdown))
}

/// `POST /players` — Register a player.
///
/// Any store rejection is reported as a client error.
async fn register_player(
    State(state): State<AppState>,
    payload: Result<Json<RegisterPlayerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    let id = PlayerService::register_player(&state.db, &req.name)
        .await
        .map_err(|err| match err {
            ServiceError::Persistence(e) => {
                tracing::error!(operation = "register_player", error = %e, "Store rejected player");
                AppError::BadRequest(e.to_string())
            }
            other => AppError::from_service("register_player", other),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Player created successfully".to_string(),
        }),
    ))
}

/// `GET /players` — All players with standings, alphabetical.
async fn list_players(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let players = StatsService::list_players(&state.db)
        .await
        .map_err(|e| AppError::from_service("list_players", e))?;

    Ok(Json(players))
}

/// `GET /players/:id/stats` — One player's record per game type.
async fn player_breakdown(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let breakdown = StatsService::player_breakdown(&state.db, id)
        .await
        .map_err(|err| match err {
            ServiceError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::from_service("player_breakdown", other),
        })?;

    Ok(Json(breakdown))
}
