use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// The fixed set of game types clients may record results under.
const GAME_TYPES: &[&str] = &["rocket_league", "college_football", "smash_bros"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in GAME_TYPES {
            let insert = Query::insert()
                .into_table(GameType::Table)
                .columns([GameType::Name])
                .values([(*name).into()])
                .map_err(|e| DbErr::Custom(format!("Invalid seed row for {name}: {e}")))?
                .on_conflict(OnConflict::column(GameType::Name).do_nothing().to_owned())
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(GameType::Table)
                    .and_where(Expr::col(GameType::Name).is_in(GAME_TYPES.iter().copied()))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum GameType {
    Table,
    Name,
}
