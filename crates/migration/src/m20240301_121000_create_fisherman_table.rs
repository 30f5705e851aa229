use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentFisherman::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TournamentFisherman::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TournamentFisherman::TournamentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentFisherman::Name)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TournamentFisherman::Email).string())
                    .col(
                        ColumnDef::new(TournamentFisherman::IsEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TournamentFisherman::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tournament_fisherman-tournament_id")
                    .table(TournamentFisherman::Table)
                    .col(TournamentFisherman::TournamentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TournamentFisherman::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TournamentFisherman {
    Table,
    Id,
    TournamentId,
    Name,
    Email,
    IsEnabled,
    CreatedAt,
}
