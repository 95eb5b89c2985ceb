use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_result")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub winner_id: i32,
    pub loser_id: i32,
    pub game_type_id: i32,
    pub played_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::WinnerId",
        to = "super::player::Column::Id"
    )]
    Winner,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::LoserId",
        to = "super::player::Column::Id"
    )]
    Loser,
    #[sea_orm(
        belongs_to = "super::game_type::Entity",
        from = "Column::GameTypeId",
        to = "super::game_type::Column::Id"
    )]
    GameType,
}

// Backs `game_type::Relation::GameResults`.
impl Related<super::game_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
