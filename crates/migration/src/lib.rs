pub use sea_orm_migration::prelude::*;

mod m20240301_120000_create_tournament_table;
mod m20240301_120500_create_category_table;
mod m20240301_121000_create_fisherman_table;
mod m20240301_121500_create_boat_table;
mod m20240301_122000_create_entry_table;
mod m20240318_090000_create_event_tables;
mod m20240402_180000_create_sail_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_120000_create_tournament_table::Migration),
            Box::new(m20240301_120500_create_category_table::Migration),
            Box::new(m20240301_121000_create_fisherman_table::Migration),
            Box::new(m20240301_121500_create_boat_table::Migration),
            Box::new(m20240301_122000_create_entry_table::Migration),
            Box::new(m20240318_090000_create_event_tables::Migration),
            Box::new(m20240402_180000_create_sail_table::Migration),
        ]
    }
}
