use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Offset, TimeZone, Utc};
use database::entities::sail;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use super::{now, require_text, utc, Direction};
use crate::{Action, Error, Sail};

const ENTITY: &str = "sail";

/// Which timestamp a sail listing filters and sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SailFilter {
    #[default]
    Departure,
    Arrival,
}

#[derive(Debug, Clone, Default)]
pub struct NewSail {
    pub boat: Option<String>,
    pub captain: Option<String>,
    pub crew: Option<i32>,
    pub destination: Option<String>,
    pub departure: Option<DateTime<FixedOffset>>,
    pub arrival: Option<DateTime<FixedOffset>>,
}

/// Expand `start..end` to whole UTC days: midnight of the first day up to
/// the last millisecond of the last one.
pub fn window(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>), Error> {
    if start >= end {
        return Err(Error::invalid(
            "start",
            format!("({}) can not be later than the end ({})", start.to_rfc3339(), end.to_rfc3339()),
        ));
    }

    let first = start.with_timezone(&Utc).date_naive().and_time(NaiveTime::MIN);
    let last = end.with_timezone(&Utc).date_naive().and_time(NaiveTime::MIN)
        + Duration::days(1)
        - Duration::milliseconds(1);

    Ok((
        Utc.from_utc_datetime(&first).with_timezone(&Utc.fix()),
        Utc.from_utc_datetime(&last).with_timezone(&Utc.fix()),
    ))
}

/// Sails whose `filter_by` timestamp falls inside the window. `start`
/// defaults to a week ago and `end` to now.
pub async fn list(
    db: &DatabaseConnection,
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
    direction: Direction,
    filter_by: SailFilter,
) -> Result<Vec<Sail>, Error> {
    let end = end.unwrap_or_else(now);
    let start = start.unwrap_or_else(|| now() - Duration::days(7));
    let (from, to) = window(start, end)?;

    debug!("Listing sails by {filter_by:?} between {from} and {to}");

    let column = match filter_by {
        SailFilter::Departure => sail::Column::Departure,
        SailFilter::Arrival => sail::Column::Arrival,
    };

    let sails = sail::Entity::find()
        .filter(column.between(from, to))
        .order_by(column, direction.into())
        .order_by_asc(sail::Column::Id)
        .all(db)
        .await?;

    Ok(sails.into_iter().map(Into::into).collect())
}

pub async fn create(db: &DatabaseConnection, input: NewSail) -> Result<Sail, Error> {
    let boat = require_text(input.boat, Action::Create, ENTITY, "boat")?;
    let captain = require_text(input.captain, Action::Create, ENTITY, "captain")?;
    let crew = input
        .crew
        .filter(|crew| *crew != 0)
        .ok_or_else(|| Error::missing(Action::Create, ENTITY, "crew"))?;
    let destination = require_text(input.destination, Action::Create, ENTITY, "destination")?;
    let departure = input
        .departure
        .ok_or_else(|| Error::missing(Action::Create, ENTITY, "departure"))?;
    let arrival = input
        .arrival
        .ok_or_else(|| Error::missing(Action::Create, ENTITY, "arrival"))?;

    if crew < 0 {
        return Err(Error::invalid("crew", "must not be negative"));
    }
    if departure >= arrival {
        return Err(Error::invalid("arrival", "must be later than the departure"));
    }

    debug!("Logging sail of {boat:?} to {destination:?}");

    let txn = db.begin().await?;

    let row = sail::ActiveModel {
        boat: ActiveValue::set(boat),
        captain: ActiveValue::set(captain),
        crew: ActiveValue::set(crew),
        destination: ActiveValue::set(destination),
        departure: ActiveValue::set(utc(departure)),
        arrival: ActiveValue::set(utc(arrival)),
        created_at: ActiveValue::set(now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(row.into())
}
