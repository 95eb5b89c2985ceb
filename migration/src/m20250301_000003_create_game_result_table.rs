use sea_orm_migration::prelude::*;

/// Creates the `game_result` table: one immutable row per recorded game.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum GameResult {
    Table,
    Id,
    WinnerId,
    LoserId,
    GameTypeId,
    PlayedAt,
}

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum GameType {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameResult::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameResult::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GameResult::WinnerId).integer().not_null())
                    .col(ColumnDef::new(GameResult::LoserId).integer().not_null())
                    .col(ColumnDef::new(GameResult::GameTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(GameResult::PlayedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(GameResult::WinnerId).ne(Expr::col(GameResult::LoserId)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_result_winner_id")
                            .from(GameResult::Table, GameResult::WinnerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_result_loser_id")
                            .from(GameResult::Table, GameResult::LoserId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_result_game_type_id")
                            .from(GameResult::Table, GameResult::GameTypeId)
                            .to(GameType::Table, GameType::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Recent-games listing sorts on played_at
        manager
            .create_index(
                Index::create()
                    .name("idx_game_result_played_at")
                    .table(GameResult::Table)
                    .col(GameResult::PlayedAt)
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_game_result_winner_id", GameResult::WinnerId),
            ("idx_game_result_loser_id", GameResult::LoserId),
            ("idx_game_result_game_type_id", GameResult::GameTypeId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(GameResult::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameResult::Table).to_owned())
            .await
    }
}
