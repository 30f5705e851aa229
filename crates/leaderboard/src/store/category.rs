use database::entities::tournament_category;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use super::{delete_by_id, non_blank, now, require_id, require_text, update_by_id};
use crate::{Action, Category, Error, ScoringType};

const ENTITY: &str = "category";

#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub tournament_id: Option<i32>,
    pub name: Option<String>,
    pub scoring: Option<ScoringType>,
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub scoring: Option<ScoringType>,
    pub limit: Option<i32>,
}

fn check_limit(limit: i32) -> Result<i32, Error> {
    if limit < 0 {
        return Err(Error::invalid("limit", "must not be negative"));
    }
    Ok(limit)
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Category>, Error> {
    debug!("Fetching category {id}");

    tournament_category::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(Category::try_from)
        .transpose()
}

pub async fn list_for_tournament(
    db: &DatabaseConnection,
    tournament_id: i32,
) -> Result<Vec<Category>, Error> {
    debug!("Listing categories of tournament {tournament_id}");

    tournament_category::Entity::find()
        .filter(tournament_category::Column::TournamentId.eq(tournament_id))
        .order_by_asc(tournament_category::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Category::try_from)
        .collect()
}

pub async fn create(db: &DatabaseConnection, input: NewCategory) -> Result<Category, Error> {
    let tournament_id = require_id(input.tournament_id, Action::Create, ENTITY, "tournamentId")?;
    let name = require_text(input.name, Action::Create, ENTITY, "name")?;
    let limit = check_limit(input.limit.unwrap_or(1))?;
    let scoring = input.scoring.unwrap_or(ScoringType::Weight);

    debug!("Creating {scoring} category {name:?} in tournament {tournament_id}");

    let txn = db.begin().await?;

    let row = tournament_category::ActiveModel {
        tournament_id: ActiveValue::set(tournament_id),
        name: ActiveValue::set(name),
        category_type: ActiveValue::set(scoring.as_str().to_string()),
        category_limit: ActiveValue::set(limit),
        created_at: ActiveValue::set(now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Category::try_from(row)
}

pub async fn update(db: &DatabaseConnection, changes: CategoryChanges) -> Result<Category, Error> {
    let id = require_id(changes.id, Action::Update, ENTITY, "id")?;

    let mut model = tournament_category::ActiveModel {
        ..Default::default()
    };
    let mut changed = false;

    if let Some(name) = non_blank(changes.name) {
        model.name = ActiveValue::set(name);
        changed = true;
    }
    if let Some(scoring) = changes.scoring {
        model.category_type = ActiveValue::set(scoring.as_str().to_string());
        changed = true;
    }
    if let Some(limit) = changes.limit {
        model.category_limit = ActiveValue::set(check_limit(limit)?);
        changed = true;
    }

    if !changed {
        return Err(Error::NothingToUpdate { entity: ENTITY });
    }

    let row = update_by_id(db, tournament_category::Column::Id, id, model, ENTITY).await?;

    Category::try_from(row)
}

pub async fn delete(db: &DatabaseConnection, id: Option<i32>) -> Result<Option<i32>, Error> {
    delete_by_id::<tournament_category::Entity>(db, tournament_category::Column::Id, id, ENTITY)
        .await
}
