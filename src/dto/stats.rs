use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

/// Activity summary for one game type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameTypeStats {
    pub id: i32,
    pub name: String,
    pub total_games: u64,
    pub unique_players: u64,
    pub last_played: Option<DateTimeWithTimeZone>,
}

/// One player's record within a single game type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerGameStats {
    pub game_type: String,
    pub wins: u64,
    pub losses: u64,
    pub total_games: u64,
    pub win_percentage: f64,
}
