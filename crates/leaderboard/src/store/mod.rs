//! Persistence for everything the API exposes. Each submodule owns one kind
//! of row and exposes free functions over a [`DatabaseConnection`].

pub mod boat;
pub mod category;
pub mod entry;
pub mod fisherman;
pub mod gallery;
pub mod sail;
pub mod tournament;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};

use crate::{Action, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Position,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for sea_orm::Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Self::Asc,
            Direction::Desc => Self::Desc,
        }
    }
}

pub(crate) fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&Utc.fix())
}

/// Store every timestamp in UTC so that text comparisons in SQLite agree
/// with time order.
pub(crate) fn utc(date: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    date.with_timezone(&Utc.fix())
}

/// Trimmed text, or `None` when nothing but whitespace was given.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn require_text(
    value: Option<String>,
    action: Action,
    entity: &'static str,
    field: &'static str,
) -> Result<String, Error> {
    non_blank(value).ok_or_else(|| Error::missing(action, entity, field))
}

pub(crate) fn require_id(
    value: Option<i32>,
    action: Action,
    entity: &'static str,
    field: &'static str,
) -> Result<i32, Error> {
    value
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::missing(action, entity, field))
}

/// Apply `changes` to the row with `id` and read it back, both in one
/// transaction.
pub(crate) async fn update_by_id<E, A>(
    db: &DatabaseConnection,
    id_column: E::Column,
    id: i32,
    changes: A,
    entity: &'static str,
) -> Result<E::Model, Error>
where
    E: EntityTrait,
    A: ActiveModelTrait<Entity = E> + Send,
{
    debug!("Updating {entity} {id}");

    let txn = db.begin().await?;

    let result = E::update_many()
        .set(changes)
        .filter(id_column.eq(id))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound { entity, id });
    }

    let row = E::find()
        .filter(id_column.eq(id))
        .one(&txn)
        .await?
        .ok_or(Error::NotFound { entity, id })?;

    txn.commit().await?;

    Ok(row)
}

/// Delete the row with `id`. Returns the id when a row was removed.
pub(crate) async fn delete_by_id<E>(
    db: &DatabaseConnection,
    id_column: E::Column,
    id: Option<i32>,
    entity: &'static str,
) -> Result<Option<i32>, Error>
where
    E: EntityTrait,
{
    let id = require_id(id, Action::Delete, entity, "id")?;

    debug!("Deleting {entity} {id}");

    let result = E::delete_many()
        .filter(id_column.eq(id))
        .exec(db)
        .await?;

    Ok((result.rows_affected > 0).then_some(id))
}
