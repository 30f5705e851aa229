use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // create event table
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Event::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Event::Name).string().not_null())
                    .col(ColumnDef::new(Event::Position).integer().not_null().default(0))
                    .col(ColumnDef::new(Event::Date).timestamp_with_time_zone().not_null())
                    .col(
                        ColumnDef::new(Event::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .take(),
            )
            .await?;

        // create file_group table
        manager
            .create_table(
                Table::create()
                    .table(FileGroup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FileGroup::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FileGroup::Name).string())
                    .col(ColumnDef::new(FileGroup::Directory).string())
                    .col(
                        ColumnDef::new(FileGroup::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .take(),
            )
            .await?;

        // link file groups to events
        manager
            .create_table(
                Table::create()
                    .table(EventFileGroup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventFileGroup::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventFileGroup::EventId).integer().not_null())
                    .col(
                        ColumnDef::new(EventFileGroup::FileGroupId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventFileGroup::Name).string())
                    .col(
                        ColumnDef::new(EventFileGroup::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EventFileGroup::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_file_group-event_id")
                            .from(EventFileGroup::Table, EventFileGroup::EventId)
                            .to(Event::Table, Event::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_file_group-file_group_id")
                            .from(EventFileGroup::Table, EventFileGroup::FileGroupId)
                            .to(FileGroup::Table, FileGroup::Id),
                    )
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventFileGroup::Table).take())
            .await?;

        manager
            .drop_table(Table::drop().table(FileGroup::Table).take())
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).take())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub enum Event {
    Table,
    Id,
    Name,
    Position,
    Date,
    CreatedAt,
}

#[derive(Iden)]
pub enum FileGroup {
    Table,
    Id,
    Name,
    Directory,
    CreatedAt,
}

#[derive(Iden)]
pub enum EventFileGroup {
    Table,
    Id,
    EventId,
    FileGroupId,
    Name,
    Position,
    CreatedAt,
}
