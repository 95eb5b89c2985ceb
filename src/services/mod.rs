pub mod game_service;
pub mod player_service;
pub mod stats_service;

pub use game_service::GameService;
pub use player_service::PlayerService;
pub use stats_service::StatsService;
