pub mod game_kind;
pub mod game_result;
pub mod game_type;
pub mod player;

pub use game_kind::GameKind;
