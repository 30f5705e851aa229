use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TournamentCategory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TournamentCategory::TournamentId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TournamentCategory::Name).string().not_null())
                    .col(
                        ColumnDef::new(TournamentCategory::CategoryType)
                            .string()
                            .not_null()
                            .default("weight"),
                    )
                    .col(
                        ColumnDef::new(TournamentCategory::CategoryLimit)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(TournamentCategory::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tournament_category-tournament_id")
                    .table(TournamentCategory::Table)
                    .col(TournamentCategory::TournamentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TournamentCategory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TournamentCategory {
    Table,
    Id,
    TournamentId,
    Name,
    CategoryType,
    CategoryLimit,
    CreatedAt,
}
