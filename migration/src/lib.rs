pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_player_table;
mod m20250301_000002_create_game_type_table;
mod m20250301_000003_create_game_result_table;
mod m20250301_000004_seed_game_types;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_player_table::Migration),
            Box::new(m20250301_000002_create_game_type_table::Migration),
            Box::new(m20250301_000003_create_game_result_table::Migration),
            Box::new(m20250301_000004_seed_game_types::Migration),
        ]
    }
}
