use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sail::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sail::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sail::Boat).string().not_null())
                    .col(ColumnDef::new(Sail::Captain).string().not_null())
                    .col(ColumnDef::new(Sail::Crew).integer().not_null())
                    .col(ColumnDef::new(Sail::Destination).string().not_null())
                    .col(
                        ColumnDef::new(Sail::Departure)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sail::Arrival)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sail::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sail::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Sail {
    Table,
    Id,
    Boat,
    Captain,
    Crew,
    Destination,
    Departure,
    Arrival,
    CreatedAt,
}
