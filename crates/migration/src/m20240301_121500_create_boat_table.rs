use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentBoat::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TournamentBoat::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TournamentBoat::TournamentId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TournamentBoat::Name).string().not_null())
                    .col(
                        ColumnDef::new(TournamentBoat::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TournamentBoat::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TournamentBoat {
    Table,
    Id,
    TournamentId,
    Name,
    CreatedAt,
}
