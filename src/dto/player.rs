use serde::{Deserialize, Serialize};

// ============ Request DTOs ============

/// Register player request
#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

// ============ Response DTOs ============

/// Acknowledgement for a created player or recorded game
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
    pub message: String,
}

/// A player together with standings derived from every recorded result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub id: i32,
    pub name: String,
    pub win_percentage: f64,
    pub score: u64,
    pub games_won: u64,
    pub games_played: u64,
}
