use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // References are plain indexed columns. Deletes never cascade, so an entry
    // may outlive the category, fisherman or boat it points at.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentEntry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TournamentEntry::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TournamentEntry::TournamentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentEntry::TournamentCategoryId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentEntry::TournamentFishermanId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentEntry::TournamentBoatId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TournamentEntry::Value).double().not_null())
                    .col(ColumnDef::new(TournamentEntry::Witness).string())
                    .col(
                        ColumnDef::new(TournamentEntry::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tournament_entry-tournament_id")
                    .table(TournamentEntry::Table)
                    .col(TournamentEntry::TournamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tournament_entry-tournament_category_id")
                    .table(TournamentEntry::Table)
                    .col(TournamentEntry::TournamentCategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tournament_entry-tournament_fisherman_id")
                    .table(TournamentEntry::Table)
                    .col(TournamentEntry::TournamentFishermanId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TournamentEntry::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TournamentEntry {
    Table,
    Id,
    TournamentId,
    TournamentCategoryId,
    TournamentFishermanId,
    TournamentBoatId,
    Value,
    Witness,
    CreatedAt,
}
