use database::entities::tournament_boat;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use super::{delete_by_id, non_blank, now, require_id, require_text, update_by_id};
use crate::{Action, Boat, Error};

const ENTITY: &str = "boat";

#[derive(Debug, Clone, Default)]
pub struct NewBoat {
    pub tournament_id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BoatChanges {
    pub id: Option<i32>,
    pub name: Option<String>,
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Boat>, Error> {
    debug!("Fetching boat {id}");

    let boat = tournament_boat::Entity::find_by_id(id).one(db).await?;

    Ok(boat.map(Into::into))
}

pub async fn list_for_tournament(
    db: &DatabaseConnection,
    tournament_id: i32,
) -> Result<Vec<Boat>, Error> {
    debug!("Listing boats of tournament {tournament_id}");

    let boats = tournament_boat::Entity::find()
        .filter(tournament_boat::Column::TournamentId.eq(tournament_id))
        .order_by_asc(tournament_boat::Column::Name)
        .order_by_asc(tournament_boat::Column::Id)
        .all(db)
        .await?;

    Ok(boats.into_iter().map(Into::into).collect())
}

pub async fn create(db: &DatabaseConnection, input: NewBoat) -> Result<Boat, Error> {
    let tournament_id = require_id(input.tournament_id, Action::Create, ENTITY, "tournamentId")?;
    let name = require_text(input.name, Action::Create, ENTITY, "name")?;

    debug!("Creating boat {name:?} in tournament {tournament_id}");

    let txn = db.begin().await?;

    let row = tournament_boat::ActiveModel {
        tournament_id: ActiveValue::set(tournament_id),
        name: ActiveValue::set(name),
        created_at: ActiveValue::set(now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(row.into())
}

pub async fn update(db: &DatabaseConnection, changes: BoatChanges) -> Result<Boat, Error> {
    let id = require_id(changes.id, Action::Update, ENTITY, "id")?;

    let Some(name) = non_blank(changes.name) else {
        return Err(Error::NothingToUpdate { entity: ENTITY });
    };

    let model = tournament_boat::ActiveModel {
        name: ActiveValue::set(name),
        ..Default::default()
    };

    let row = update_by_id(db, tournament_boat::Column::Id, id, model, ENTITY).await?;

    Ok(row.into())
}

pub async fn delete(db: &DatabaseConnection, id: Option<i32>) -> Result<Option<i32>, Error> {
    delete_by_id::<tournament_boat::Entity>(db, tournament_boat::Column::Id, id, ENTITY).await
}
