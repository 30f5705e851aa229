use std::collections::HashMap;

use leaderboard::{
    store::{boat, category, entry, fisherman, tournament},
    Category, Entry, ScoringType, Tournament,
};
use log::debug;
use once_cell::sync::Lazy;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tera::{Context, Tera};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not load leaderboard")]
    Load(#[from] leaderboard::Error),

    #[error("Could not render template")]
    RenderTemplate(#[source] tera::Error),
}

static TEMPLATES: Lazy<Result<Tera, tera::Error>> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates([
        ("base.html", include_str!("templates/base.html")),
        ("leaderboard.html", include_str!("templates/leaderboard.html")),
        ("not_found.html", include_str!("templates/not_found.html")),
    ])?;
    Ok(tera)
});

fn render(template: &str, context: &Context) -> Result<String, Error> {
    let tera = TEMPLATES.as_ref().map_err(|err| {
        Error::RenderTemplate(tera::Error::msg(format!("Could not load templates: {err}")))
    })?;

    tera.render(template, context).map_err(Error::RenderTemplate)
}

#[derive(Debug, Serialize)]
struct Row {
    rank: usize,
    fisherman: String,
    boat: String,
    value: String,
    date: String,
    witness: Option<String>,
}

#[derive(Debug, Serialize)]
struct Board {
    name: String,
    points: bool,
    rows: Vec<Row>,
}

fn board(
    category: &Category,
    entries: Vec<Entry>,
    fishermen: &HashMap<i32, String>,
    boats: &HashMap<i32, String>,
) -> Board {
    let points = category.scoring == ScoringType::Points;

    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| Row {
            rank: index + 1,
            fisherman: fishermen.get(&entry.fisherman_id).cloned().unwrap_or_default(),
            boat: boats.get(&entry.boat_id).cloned().unwrap_or_default(),
            value: if points {
                format!("{}", entry.value)
            } else {
                format!("{:.2} kg", entry.value)
            },
            date: entry.date.format("%Y-%m-%d %H:%M").to_string(),
            witness: entry.witness,
        })
        .collect();

    Board {
        name: category.name.clone(),
        points,
        rows,
    }
}

async fn boards(db: &DatabaseConnection, tournament: &Tournament) -> Result<Vec<Board>, Error> {
    let fishermen: HashMap<_, _> = fisherman::list_for_tournament(db, tournament.id)
        .await?
        .into_iter()
        .map(|fisherman| (fisherman.id, fisherman.name))
        .collect();
    let boats: HashMap<_, _> = boat::list_for_tournament(db, tournament.id)
        .await?
        .into_iter()
        .map(|boat| (boat.id, boat.name))
        .collect();

    let mut boards = Vec::new();
    for category in category::list_for_tournament(db, tournament.id).await? {
        let entries = entry::leaderboard(db, &category, false).await?;
        boards.push(board(&category, entries, &fishermen, &boats));
    }

    Ok(boards)
}

/// Render the leaderboard of the tournament with `slug`, or of the latest
/// tournament. `None` when there is no such tournament.
pub async fn leaderboard(
    db: &DatabaseConnection,
    slug: Option<&str>,
) -> Result<Option<String>, Error> {
    debug!("Rendering leaderboard for {slug:?}");

    let tournament = match slug {
        Some(slug) => tournament::by_slug(db, slug).await?,
        None => tournament::latest(db).await?,
    };

    let Some(tournament) = tournament else {
        return Ok(None);
    };

    let mut context = Context::new();
    context.insert("tournament", &tournament.name);
    context.insert("date", &tournament.date.format("%Y-%m-%d").to_string());
    context.insert("boards", &boards(db, &tournament).await?);

    render("leaderboard.html", &context).map(Some)
}

pub fn not_found() -> Result<String, Error> {
    render("not_found.html", &Context::new())
}
