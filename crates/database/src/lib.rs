#![forbid(unsafe_code)]

pub mod entities;

use log::debug;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not connect to database")]
    Connect(#[source] sea_orm::DbErr),

    #[error("Could not migrate database")]
    Migrate(#[source] sea_orm::DbErr),
}

pub async fn connect(url: &str) -> Result<DatabaseConnection, Error> {
    debug!("Opening database connection");

    let db = Database::connect(url).await.map_err(Error::Connect)?;

    Ok(db)
}

/// Apply every pending migration.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), Error> {
    debug!("Applying pending migrations");

    Migrator::up(db, None).await.map_err(Error::Migrate)?;
    Ok(())
}
