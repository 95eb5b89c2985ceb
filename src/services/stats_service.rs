//! Standings derived from the recorded results.
//!
//! Nothing is materialized. Each aggregation is one grouped statement over the
//! current rows, read into an integer-count row; percentages, score and the
//! final ordering are derived in Rust so rounding is identical on every backend.

use std::cmp::Ordering;

use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait,
};

use crate::dto::{GameTypeStats, PlayerGameStats, PlayerRecord, RecentGame};
use crate::entities::{game_result, game_type, player};
use crate::error::{ServiceError, ServiceResult};

/// Points awarded per win. Losses cost nothing.
pub const POINTS_PER_WIN: u64 = 10;

/// Distinct existing players named as winner or loser under the outer `game_type` row.
const UNIQUE_PLAYERS_SQL: &str = r#"(SELECT COUNT(*) FROM "player" AS "participant" WHERE "participant"."id" IN (SELECT "won"."winner_id" FROM "game_result" AS "won" WHERE "won"."game_type_id" = "game_type"."id") OR "participant"."id" IN (SELECT "lost"."loser_id" FROM "game_result" AS "lost" WHERE "lost"."game_type_id" = "game_type"."id"))"#;

/// Per-player counts as returned by the standings query
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PlayerTallyRow {
    pub id: i32,
    pub name: String,
    pub games_won: i64,
    pub games_played: i64,
}

/// Per-game-type counts as returned by the activity query
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct GameTypeTallyRow {
    pub id: i32,
    pub name: String,
    pub total_games: i64,
    pub unique_players: i64,
    pub last_played: Option<DateTimeWithTimeZone>,
}

/// One player's counts within a game type
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct BreakdownRow {
    pub game_type: String,
    pub wins: i64,
    pub total_games: i64,
}

pub struct StatsService;

impl StatsService {
    /// Every player with derived standings, ordered by name.
    pub async fn list_players(db: &DatabaseConnection) -> ServiceResult<Vec<PlayerRecord>> {
        let mut records = Self::player_records(db).await?;
        records.sort_by(compare_by_name);
        Ok(records)
    }

    /// Every player ranked by score, then win percentage, then name.
    pub async fn player_leaderboard(db: &DatabaseConnection) -> ServiceResult<Vec<PlayerRecord>> {
        let mut records = Self::player_records(db).await?;
        records.sort_by(compare_leaderboard);
        Ok(records)
    }

    /// Every game type with its activity, busiest first.
    pub async fn game_type_leaderboard(
        db: &DatabaseConnection,
    ) -> ServiceResult<Vec<GameTypeStats>> {
        let rows = game_type::Entity::find()
            .select_only()
            .column(game_type::Column::Id)
            .column(game_type::Column::Name)
            .column_as(game_result::Column::Id.count(), "total_games")
            .column_as(Expr::cust(UNIQUE_PLAYERS_SQL), "unique_players")
            .column_as(game_result::Column::PlayedAt.max(), "last_played")
            .join(JoinType::LeftJoin, game_type::Relation::GameResults.def())
            .group_by(game_type::Column::Id)
            .group_by(game_type::Column::Name)
            .into_model::<GameTypeTallyRow>()
            .all(db)
            .await?;

        let mut stats: Vec<GameTypeStats> = rows.into_iter().map(game_type_stats).collect();
        stats.sort_by(compare_game_types);
        Ok(stats)
    }

    /// The `limit` most recently played games.
    ///
    /// Results whose players or game type cannot be joined are left out.
    pub async fn recent_games(db: &DatabaseConnection, limit: i64) -> ServiceResult<Vec<RecentGame>> {
        let limit = u64::try_from(limit)
            .ok()
            .filter(|l| *l > 0)
            .ok_or_else(|| ServiceError::Validation("limit must be a positive integer".to_string()))?;

        let winner = Alias::new("winner");
        let loser = Alias::new("loser");

        let games = game_result::Entity::find()
            .select_only()
            .column_as(game_result::Column::Id, "game_id")
            .column(game_result::Column::PlayedAt)
            .column_as(game_type::Column::Name, "game_type")
            .column_as(aliased_name(winner.clone()), "winner_name")
            .column_as(aliased_name(loser.clone()), "loser_name")
            .join(JoinType::InnerJoin, game_result::Relation::GameType.def())
            .join_as(JoinType::InnerJoin, game_result::Relation::Winner.def(), winner)
            .join_as(JoinType::InnerJoin, game_result::Relation::Loser.def(), loser)
            .order_by_desc(game_result::Column::PlayedAt)
            .order_by_desc(game_result::Column::Id)
            .limit(limit)
            .into_model::<RecentGame>()
            .all(db)
            .await?;

        Ok(games)
    }

    /// One player's record split by game type, ordered by game type name.
    pub async fn player_breakdown(
        db: &DatabaseConnection,
        player_id: i32,
    ) -> ServiceResult<Vec<PlayerGameStats>> {
        if player::Entity::find_by_id(player_id).one(db).await?.is_none() {
            return Err(ServiceError::NotFound(format!(
                "Player {player_id} not found"
            )));
        }

        let rows = game_result::Entity::find()
            .select_only()
            .column_as(game_type::Column::Name, "game_type")
            .column_as(
                count_when(game_result::Column::WinnerId.eq(player_id)),
                "wins",
            )
            .column_as(game_result::Column::Id.count(), "total_games")
            .join(JoinType::InnerJoin, game_result::Relation::GameType.def())
            .filter(
                Condition::any()
                    .add(game_result::Column::WinnerId.eq(player_id))
                    .add(game_result::Column::LoserId.eq(player_id)),
            )
            .group_by(game_type::Column::Name)
            .order_by_asc(game_type::Column::Name)
            .into_model::<BreakdownRow>()
            .all(db)
            .await?;

        Ok(rows.into_iter().map(player_game_stats).collect())
    }

    /// Won and played counts for every player, including those with no games.
    ///
    /// A result counts toward each existing player it names, even when the
    /// opponent row is missing.
    async fn player_records(db: &DatabaseConnection) -> ServiceResult<Vec<PlayerRecord>> {
        let won = Expr::col((game_result::Entity, game_result::Column::WinnerId))
            .equals((player::Entity, player::Column::Id));
        let lost = Expr::col((game_result::Entity, game_result::Column::LoserId))
            .equals((player::Entity, player::Column::Id));

        let mut select = player::Entity::find()
            .select_only()
            .column(player::Column::Id)
            .column(player::Column::Name)
            .column_as(count_when(won.clone()), "games_won")
            .column_as(game_result::Column::Id.count(), "games_played")
            .group_by(player::Column::Id)
            .group_by(player::Column::Name);

        QueryTrait::query(&mut select).join(
            JoinType::LeftJoin,
            game_result::Entity,
            Condition::any().add(won).add(lost),
        );

        let rows = select.into_model::<PlayerTallyRow>().all(db).await?;
        Ok(rows.into_iter().map(player_record).collect())
    }
}

/// `player.name` read through a join alias
fn aliased_name(alias: Alias) -> SimpleExpr {
    Expr::col((alias, player::Column::Name)).into()
}

/// `COUNT(CASE WHEN <cond> THEN 1 END)`
fn count_when(cond: SimpleExpr) -> SimpleExpr {
    Func::count(Expr::case(cond, 1)).into()
}

/// Negative counts cannot come out of `COUNT`; clamp rather than wrap.
fn count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

/// Win percentage rounded half-up to two decimal places; 0 when nothing was played.
///
/// Computed in integer basis points so the rounding is exact:
/// 1/3 gives 33.33, 2/3 gives 66.67 and 1/800 gives 0.13.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn win_percentage(won: u64, played: u64) -> f64 {
    if played == 0 {
        return 0.0;
    }
    let basis_points = (won * 20_000 + played) / (2 * played);
    basis_points as f64 / 100.0
}

/// Derive score and percentage from a player's counts
#[must_use]
pub fn player_record(row: PlayerTallyRow) -> PlayerRecord {
    let games_won = count(row.games_won);
    let games_played = count(row.games_played);
    PlayerRecord {
        id: row.id,
        name: row.name,
        win_percentage: win_percentage(games_won, games_played),
        score: games_won * POINTS_PER_WIN,
        games_won,
        games_played,
    }
}

#[must_use]
pub fn game_type_stats(row: GameTypeTallyRow) -> GameTypeStats {
    GameTypeStats {
        id: row.id,
        name: row.name,
        total_games: count(row.total_games),
        unique_players: count(row.unique_players),
        last_played: row.last_played,
    }
}

#[must_use]
pub fn player_game_stats(row: BreakdownRow) -> PlayerGameStats {
    let wins = count(row.wins);
    let total_games = count(row.total_games);
    PlayerGameStats {
        game_type: row.game_type,
        wins,
        losses: total_games.saturating_sub(wins),
        total_games,
        win_percentage: win_percentage(wins, total_games),
    }
}

/// Alphabetical, with id as a final tie-break for players sharing a name
#[must_use]
pub fn compare_by_name(a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
    a.name.cmp(&b.name).then(a.id.cmp(&b.id))
}

/// Score desc, then win percentage desc, then name asc
#[must_use]
pub fn compare_leaderboard(a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.win_percentage.total_cmp(&a.win_percentage))
        .then_with(|| compare_by_name(a, b))
}

/// Total games desc, then name asc; idle types therefore sort last
#[must_use]
pub fn compare_game_types(a: &GameTypeStats, b: &GameTypeStats) -> Ordering {
    b.total_games
        .cmp(&a.total_games)
        .then_with(|| a.name.cmp(&b.name))
}
