use database::entities::{event, event_file_group, file_group};
use log::{debug, warn};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::{require_id, Direction, OrderBy};
use crate::{bucket::Bucket, coerce, Action, Error, Event, File, FileGroup};

pub async fn event(db: &DatabaseConnection, id: Option<i32>) -> Result<Option<Event>, Error> {
    let id = require_id(id, Action::Fetch, "event", "id")?;

    debug!("Fetching event {id}");

    let event = event::Entity::find_by_id(id).one(db).await?;

    Ok(event.map(Into::into))
}

pub async fn events(
    db: &DatabaseConnection,
    order_by: OrderBy,
    direction: Direction,
) -> Result<Vec<Event>, Error> {
    debug!("Listing events by {order_by:?} {direction:?}");

    let column = match order_by {
        OrderBy::Position => event::Column::Position,
        OrderBy::Date => event::Column::Date,
    };

    let events = event::Entity::find()
        .order_by(column, direction.into())
        .order_by_asc(event::Column::Id)
        .all(db)
        .await?;

    Ok(events.into_iter().map(Into::into).collect())
}

/// The file groups attached to an event. Name, position and date come from
/// the attachment rather than the group itself.
pub async fn file_groups_for_event(
    db: &DatabaseConnection,
    bucket: &dyn Bucket,
    event_id: i32,
    order_by: OrderBy,
    direction: Direction,
) -> Result<Vec<FileGroup>, Error> {
    debug!("Listing file groups of event {event_id}");

    let column = match order_by {
        OrderBy::Position => event_file_group::Column::Position,
        OrderBy::Date => event_file_group::Column::CreatedAt,
    };

    let links = event_file_group::Entity::find()
        .filter(event_file_group::Column::EventId.eq(event_id))
        .order_by(column, direction.into())
        .order_by_asc(event_file_group::Column::Id)
        .find_also_related(file_group::Entity)
        .all(db)
        .await?;

    let mut groups = Vec::with_capacity(links.len());

    for (link, group) in links {
        let Some(group) = group else {
            warn!(
                "Event {event_id} links to missing file group {}",
                link.file_group_id
            );
            continue;
        };

        let directory = coerce::text(group.directory);
        let files = files(bucket, &directory).await?;

        groups.push(FileGroup {
            id: group.id,
            name: coerce::text(link.name.or(group.name)),
            directory,
            position: link.position,
            date: link.created_at,
            files,
        });
    }

    Ok(groups)
}

pub async fn file_groups(
    db: &DatabaseConnection,
    bucket: &dyn Bucket,
    direction: Direction,
) -> Result<Vec<FileGroup>, Error> {
    debug!("Listing file groups {direction:?}");

    let rows = file_group::Entity::find()
        .order_by(file_group::Column::CreatedAt, direction.into())
        .order_by_asc(file_group::Column::Id)
        .all(db)
        .await?;

    let mut groups = Vec::with_capacity(rows.len());
    for row in rows {
        groups.push(materialize(bucket, row).await?);
    }

    Ok(groups)
}

pub async fn file_group(
    db: &DatabaseConnection,
    bucket: &dyn Bucket,
    id: Option<i32>,
) -> Result<Option<FileGroup>, Error> {
    let id = require_id(id, Action::Fetch, "file group", "id")?;

    debug!("Fetching file group {id}");

    match file_group::Entity::find_by_id(id).one(db).await? {
        Some(row) => Ok(Some(materialize(bucket, row).await?)),
        None => Ok(None),
    }
}

async fn materialize(bucket: &dyn Bucket, group: file_group::Model) -> Result<FileGroup, Error> {
    let directory = coerce::text(group.directory);
    let files = files(bucket, &directory).await?;

    Ok(FileGroup {
        id: group.id,
        name: coerce::text(group.name),
        directory,
        position: 0,
        date: group.created_at,
        files,
    })
}

/// Groups without a directory have no files.
async fn files(bucket: &dyn Bucket, directory: &str) -> Result<Vec<File>, Error> {
    if directory.trim().is_empty() {
        return Ok(Vec::new());
    }

    let objects = bucket.list(directory).await?;

    Ok(objects
        .into_iter()
        .map(|object| File {
            url: bucket.url(&object.key),
            id: object.etag,
            key: object.key,
            version: object.version,
            size: object.size,
            uploaded: object.uploaded,
        })
        .collect())
}
