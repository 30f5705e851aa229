use chrono::{DateTime, FixedOffset};
use database::entities::tournament;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use super::{delete_by_id, non_blank, now, require_id, require_text, update_by_id, utc};
use super::{Direction, OrderBy};
use crate::{slug::slugify, Action, Error, Tournament};

const ENTITY: &str = "tournament";

#[derive(Debug, Clone, Default)]
pub struct NewTournament {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct TournamentChanges {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    pub position: Option<i32>,
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Tournament>, Error> {
    debug!("Fetching tournament {id}");

    let tournament = tournament::Entity::find_by_id(id).one(db).await?;

    Ok(tournament.map(Into::into))
}

/// The tournament with the greatest date.
pub async fn latest(db: &DatabaseConnection) -> Result<Option<Tournament>, Error> {
    debug!("Fetching latest tournament");

    let tournament = tournament::Entity::find()
        .order_by_desc(tournament::Column::Date)
        .order_by_desc(tournament::Column::Id)
        .one(db)
        .await?;

    Ok(tournament.map(Into::into))
}

pub async fn by_slug(db: &DatabaseConnection, slug: &str) -> Result<Option<Tournament>, Error> {
    debug!("Fetching tournament {slug:?}");

    let tournament = tournament::Entity::find()
        .filter(tournament::Column::Slug.eq(slug))
        .order_by_desc(tournament::Column::Date)
        .one(db)
        .await?;

    Ok(tournament.map(Into::into))
}

/// Look up the latest tournament when `latest` is set, otherwise the one with `id`.
pub async fn find(
    db: &DatabaseConnection,
    id: Option<i32>,
    latest: bool,
) -> Result<Option<Tournament>, Error> {
    if latest {
        return self::latest(db).await;
    }

    let id = require_id(id, Action::Fetch, ENTITY, "id")?;
    get(db, id).await
}

pub async fn list(
    db: &DatabaseConnection,
    order_by: OrderBy,
    direction: Direction,
) -> Result<Vec<Tournament>, Error> {
    debug!("Listing tournaments by {order_by:?} {direction:?}");

    let column = match order_by {
        OrderBy::Position => tournament::Column::Position,
        OrderBy::Date => tournament::Column::Date,
    };

    let tournaments = tournament::Entity::find()
        .order_by(column, direction.into())
        .order_by_asc(tournament::Column::Id)
        .all(db)
        .await?;

    Ok(tournaments.into_iter().map(Into::into).collect())
}

pub async fn create(db: &DatabaseConnection, input: NewTournament) -> Result<Tournament, Error> {
    let name = require_text(input.name, Action::Create, ENTITY, "name")?;
    let slug = non_blank(input.slug).unwrap_or_else(|| slugify(&name));

    debug!("Creating tournament {name:?}");

    let txn = db.begin().await?;

    let row = tournament::ActiveModel {
        name: ActiveValue::set(name),
        slug: ActiveValue::set(slug),
        position: ActiveValue::set(input.position.unwrap_or(0)),
        date: ActiveValue::set(input.date.map(utc).unwrap_or_else(now)),
        created_at: ActiveValue::set(now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(row.into())
}

pub async fn update(
    db: &DatabaseConnection,
    changes: TournamentChanges,
) -> Result<Tournament, Error> {
    let id = require_id(changes.id, Action::Update, ENTITY, "id")?;

    let mut model = tournament::ActiveModel {
        ..Default::default()
    };
    let mut changed = false;

    if let Some(name) = non_blank(changes.name) {
        model.name = ActiveValue::set(name);
        changed = true;
    }
    if let Some(slug) = non_blank(changes.slug) {
        model.slug = ActiveValue::set(slug);
        changed = true;
    }
    if let Some(date) = changes.date {
        model.date = ActiveValue::set(utc(date));
        changed = true;
    }
    if let Some(position) = changes.position {
        model.position = ActiveValue::set(position);
        changed = true;
    }

    if !changed {
        return Err(Error::NothingToUpdate { entity: ENTITY });
    }

    let row = update_by_id(db, tournament::Column::Id, id, model, ENTITY).await?;

    Ok(row.into())
}

pub async fn delete(db: &DatabaseConnection, id: Option<i32>) -> Result<Option<i32>, Error> {
    delete_by_id::<tournament::Entity>(db, tournament::Column::Id, id, ENTITY).await
}
