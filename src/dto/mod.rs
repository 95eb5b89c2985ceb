pub mod game;
pub mod player;
pub mod stats;

pub use game::{RecentGame, RecentGamesQuery, RecordGameRequest};
pub use player::{CreatedResponse, PlayerRecord, RegisterPlayerRequest};
pub use stats::{GameTypeStats, PlayerGameStats};
