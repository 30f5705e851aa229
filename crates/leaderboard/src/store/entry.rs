use chrono::{DateTime, FixedOffset};
use database::entities::{tournament_entry, tournament_fisherman};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, TransactionTrait,
};

use super::{delete_by_id, non_blank, now, require_id, update_by_id, utc};
use crate::{ranking, Action, Category, Entry, Error};

const ENTITY: &str = "entry";

#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub tournament_id: Option<i32>,
    pub category_id: Option<i32>,
    pub fisherman_id: Option<i32>,
    pub boat_id: Option<i32>,
    pub value: Option<f64>,
    pub witness: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub id: Option<i32>,
    pub category_id: Option<i32>,
    pub fisherman_id: Option<i32>,
    pub boat_id: Option<i32>,
    pub value: Option<f64>,
    pub witness: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
}

fn check_value(value: f64) -> Result<f64, Error> {
    if !value.is_finite() {
        return Err(Error::invalid("value", "must be a finite number"));
    }
    Ok(value)
}

/// Entries whose fisherman is enabled, best catch first.
fn visible() -> Select<tournament_entry::Entity> {
    tournament_entry::Entity::find()
        .join(
            JoinType::InnerJoin,
            tournament_entry::Relation::TournamentFisherman.def(),
        )
        .filter(tournament_fisherman::Column::IsEnabled.eq(true))
        .order_by_desc(tournament_entry::Column::Value)
        .order_by_asc(tournament_entry::Column::CreatedAt)
        .order_by_asc(tournament_entry::Column::Id)
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Entry>, Error> {
    debug!("Fetching entry {id}");

    let entry = tournament_entry::Entity::find_by_id(id).one(db).await?;

    Ok(entry.map(Into::into))
}

/// Every visible entry of a tournament, ordered by value then date.
pub async fn list_for_tournament(
    db: &DatabaseConnection,
    tournament_id: i32,
) -> Result<Vec<Entry>, Error> {
    debug!("Listing entries of tournament {tournament_id}");

    let entries = visible()
        .filter(tournament_entry::Column::TournamentId.eq(tournament_id))
        .all(db)
        .await?;

    Ok(entries.into_iter().map(Into::into).collect())
}

pub async fn list_for_category(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<Vec<Entry>, Error> {
    debug!("Listing entries of category {category_id}");

    let entries = visible()
        .filter(tournament_entry::Column::TournamentCategoryId.eq(category_id))
        .all(db)
        .await?;

    Ok(entries.into_iter().map(Into::into).collect())
}

/// The ranked leaderboard of `category`.
pub async fn leaderboard(
    db: &DatabaseConnection,
    category: &Category,
    ignore_limit: bool,
) -> Result<Vec<Entry>, Error> {
    let entries = list_for_category(db, category.id).await?;

    Ok(ranking::rank(category, entries, ignore_limit))
}

pub async fn create(db: &DatabaseConnection, input: NewEntry) -> Result<Entry, Error> {
    let tournament_id = require_id(input.tournament_id, Action::Create, ENTITY, "tournamentId")?;
    let category_id = require_id(input.category_id, Action::Create, ENTITY, "categoryId")?;
    let fisherman_id = require_id(input.fisherman_id, Action::Create, ENTITY, "fishermanId")?;
    let boat_id = require_id(input.boat_id, Action::Create, ENTITY, "boatId")?;
    let value = input
        .value
        .ok_or_else(|| Error::missing(Action::Create, ENTITY, "value"))
        .and_then(check_value)?;

    debug!("Creating entry of {value} for fisherman {fisherman_id} in category {category_id}");

    let txn = db.begin().await?;

    let row = tournament_entry::ActiveModel {
        tournament_id: ActiveValue::set(tournament_id),
        tournament_category_id: ActiveValue::set(category_id),
        tournament_fisherman_id: ActiveValue::set(fisherman_id),
        tournament_boat_id: ActiveValue::set(boat_id),
        value: ActiveValue::set(value),
        witness: ActiveValue::set(non_blank(input.witness)),
        created_at: ActiveValue::set(input.date.map(utc).unwrap_or_else(now)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(row.into())
}

pub async fn update(db: &DatabaseConnection, changes: EntryChanges) -> Result<Entry, Error> {
    let id = require_id(changes.id, Action::Update, ENTITY, "id")?;

    let mut model = tournament_entry::ActiveModel {
        ..Default::default()
    };
    let mut changed = false;

    if let Some(category_id) = changes.category_id.filter(|id| *id > 0) {
        model.tournament_category_id = ActiveValue::set(category_id);
        changed = true;
    }
    if let Some(fisherman_id) = changes.fisherman_id.filter(|id| *id > 0) {
        model.tournament_fisherman_id = ActiveValue::set(fisherman_id);
        changed = true;
    }
    if let Some(boat_id) = changes.boat_id.filter(|id| *id > 0) {
        model.tournament_boat_id = ActiveValue::set(boat_id);
        changed = true;
    }
    if let Some(value) = changes.value {
        model.value = ActiveValue::set(check_value(value)?);
        changed = true;
    }
    if let Some(witness) = non_blank(changes.witness) {
        model.witness = ActiveValue::set(Some(witness));
        changed = true;
    }
    if let Some(date) = changes.date {
        model.created_at = ActiveValue::set(utc(date));
        changed = true;
    }

    if !changed {
        return Err(Error::NothingToUpdate { entity: ENTITY });
    }

    let row = update_by_id(db, tournament_entry::Column::Id, id, model, ENTITY).await?;

    Ok(row.into())
}

pub async fn delete(db: &DatabaseConnection, id: Option<i32>) -> Result<Option<i32>, Error> {
    delete_by_id::<tournament_entry::Entity>(db, tournament_entry::Column::Id, id, ENTITY).await
}
