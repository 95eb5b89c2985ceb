use crate::entities::{GameKind, game_result, game_type, player};
use crate::error::{ServiceError, ServiceResult};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};

pub struct GameService;

impl GameService {
    /// Record the outcome of one game and return the new result id.
    ///
    /// Checks run in order: distinct players, known game type, both players
    /// exist. The lookups and the insert share one transaction, so either a
    /// single `game_result` row is committed or nothing is.
    pub async fn record_game(
        db: &DatabaseConnection,
        winner_id: i32,
        loser_id: i32,
        game_type_token: &str,
        played_at: Option<DateTimeWithTimeZone>,
    ) -> ServiceResult<i32> {
        if winner_id == loser_id {
            return Err(ServiceError::Validation(
                "Winner and loser must be different players".to_string(),
            ));
        }

        let txn = db.begin().await?;

        let game_type_id = Self::resolve_game_type(&txn, game_type_token).await?;

        let player_count = player::Entity::find()
            .filter(player::Column::Id.is_in([winner_id, loser_id]))
            .count(&txn)
            .await?;

        if player_count != 2 {
            return Err(ServiceError::NotFound(
                "One or both players not found".to_string(),
            ));
        }

        let result = game_result::ActiveModel {
            winner_id: Set(winner_id),
            loser_id: Set(loser_id),
            game_type_id: Set(game_type_id),
            played_at: Set(played_at.unwrap_or_else(|| chrono::Utc::now().into())),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!(
            game_id = result.id,
            winner_id,
            loser_id,
            game_type = game_type_token,
            "Game recorded"
        );

        Ok(result.id)
    }

    /// Map a client token to the stored game type id
    async fn resolve_game_type<C>(db: &C, token: &str) -> ServiceResult<i32>
    where
        C: sea_orm::ConnectionTrait,
    {
        let not_found = || ServiceError::NotFound(format!("Game type '{token}' not found"));

        let kind = GameKind::from_str(token).ok_or_else(not_found)?;

        game_type::Entity::find()
            .filter(game_type::Column::Name.eq(kind.as_str()))
            .one(db)
            .await?
            .map(|row| row.id)
            .ok_or_else(not_found)
    }
}
