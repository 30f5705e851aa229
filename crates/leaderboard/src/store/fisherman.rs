use database::entities::tournament_fisherman;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use super::{delete_by_id, non_blank, now, require_id, require_text, update_by_id};
use crate::{Action, Error, Fisherman};

const ENTITY: &str = "fisherman";

#[derive(Debug, Clone, Default)]
pub struct NewFisherman {
    pub tournament_id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct FishermanChanges {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_enabled: Option<bool>,
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Fisherman>, Error> {
    debug!("Fetching fisherman {id}");

    let fisherman = tournament_fisherman::Entity::find_by_id(id).one(db).await?;

    Ok(fisherman.map(Into::into))
}

pub async fn list_for_tournament(
    db: &DatabaseConnection,
    tournament_id: i32,
) -> Result<Vec<Fisherman>, Error> {
    debug!("Listing fishermen of tournament {tournament_id}");

    let fishermen = tournament_fisherman::Entity::find()
        .filter(tournament_fisherman::Column::TournamentId.eq(tournament_id))
        .order_by_asc(tournament_fisherman::Column::Name)
        .order_by_asc(tournament_fisherman::Column::Id)
        .all(db)
        .await?;

    Ok(fishermen.into_iter().map(Into::into).collect())
}

pub async fn create(db: &DatabaseConnection, input: NewFisherman) -> Result<Fisherman, Error> {
    let tournament_id = require_id(input.tournament_id, Action::Create, ENTITY, "tournamentId")?;
    let name = require_text(input.name, Action::Create, ENTITY, "name")?;

    debug!("Creating fisherman {name:?} in tournament {tournament_id}");

    let txn = db.begin().await?;

    let row = tournament_fisherman::ActiveModel {
        tournament_id: ActiveValue::set(tournament_id),
        name: ActiveValue::set(name),
        email: ActiveValue::set(non_blank(input.email)),
        is_enabled: ActiveValue::set(input.is_enabled.unwrap_or(true)),
        created_at: ActiveValue::set(now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(row.into())
}

/// Partial update. Toggling `is_enabled` hides or restores the fisherman's
/// entries on every leaderboard.
pub async fn update(
    db: &DatabaseConnection,
    changes: FishermanChanges,
) -> Result<Fisherman, Error> {
    let id = require_id(changes.id, Action::Update, ENTITY, "id")?;

    let mut model = tournament_fisherman::ActiveModel {
        ..Default::default()
    };
    let mut changed = false;

    if let Some(name) = non_blank(changes.name) {
        model.name = ActiveValue::set(name);
        changed = true;
    }
    if let Some(email) = non_blank(changes.email) {
        model.email = ActiveValue::set(Some(email));
        changed = true;
    }
    if let Some(is_enabled) = changes.is_enabled {
        model.is_enabled = ActiveValue::set(is_enabled);
        changed = true;
    }

    if !changed {
        return Err(Error::NothingToUpdate { entity: ENTITY });
    }

    let row = update_by_id(db, tournament_fisherman::Column::Id, id, model, ENTITY).await?;

    Ok(row.into())
}

pub async fn delete(db: &DatabaseConnection, id: Option<i32>) -> Result<Option<i32>, Error> {
    delete_by_id::<tournament_fisherman::Entity>(db, tournament_fisherman::Column::Id, id, ENTITY)
        .await
}
