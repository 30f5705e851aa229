use std::fmt::{self, Display};

use chrono::{DateTime, FixedOffset, Utc};
use database::entities::{
    event, sail, tournament, tournament_boat, tournament_category, tournament_entry,
    tournament_fisherman,
};
use serde::Serialize;

use crate::{coerce, Error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tournament {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub position: i32,
    pub date: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
}

impl From<tournament::Model> for Tournament {
    fn from(tournament: tournament::Model) -> Self {
        Self {
            id: tournament.id,
            name: tournament.name,
            slug: tournament.slug,
            position: tournament.position,
            date: tournament.date,
            created_at: tournament.created_at,
        }
    }
}

/// How a category turns entries into a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringType {
    /// Heaviest single catches win.
    Weight,
    /// Points are summed per fisherman.
    Points,
}

impl ScoringType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Points => "points",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "weight" => Some(Self::Weight),
            "points" => Some(Self::Points),
            _ => None,
        }
    }
}

impl Display for ScoringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i32,
    pub tournament_id: i32,
    pub name: String,
    pub scoring: ScoringType,
    pub limit: u32,
    pub created_at: DateTime<FixedOffset>,
}

impl TryFrom<tournament_category::Model> for Category {
    type Error = Error;

    fn try_from(category: tournament_category::Model) -> Result<Self, Self::Error> {
        let scoring =
            ScoringType::parse(&category.category_type).ok_or(Error::UnknownScoringType {
                id: category.id,
                kind: category.category_type,
            })?;

        Ok(Self {
            id: category.id,
            tournament_id: category.tournament_id,
            name: category.name,
            scoring,
            limit: coerce::count(category.category_limit),
            created_at: category.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fisherman {
    pub id: i32,
    pub tournament_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub is_enabled: bool,
    pub created_at: DateTime<FixedOffset>,
}

impl From<tournament_fisherman::Model> for Fisherman {
    fn from(fisherman: tournament_fisherman::Model) -> Self {
        Self {
            id: fisherman.id,
            tournament_id: fisherman.tournament_id,
            name: fisherman.name,
            email: fisherman.email.filter(|email| !email.is_empty()),
            is_enabled: fisherman.is_enabled,
            created_at: fisherman.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boat {
    pub id: i32,
    pub tournament_id: i32,
    pub name: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<tournament_boat::Model> for Boat {
    fn from(boat: tournament_boat::Model) -> Self {
        Self {
            id: boat.id,
            tournament_id: boat.tournament_id,
            name: boat.name,
            created_at: boat.created_at,
        }
    }
}

/// A single catch. On a points leaderboard one entry stands for a
/// fisherman's whole tally and `value` holds the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: i32,
    pub tournament_id: i32,
    pub category_id: i32,
    pub fisherman_id: i32,
    pub boat_id: i32,
    pub value: f64,
    pub witness: Option<String>,
    pub date: DateTime<FixedOffset>,
}

impl From<tournament_entry::Model> for Entry {
    fn from(entry: tournament_entry::Model) -> Self {
        Self {
            id: entry.id,
            tournament_id: entry.tournament_id,
            category_id: entry.tournament_category_id,
            fisherman_id: entry.tournament_fisherman_id,
            boat_id: entry.tournament_boat_id,
            value: entry.value,
            witness: entry.witness,
            date: entry.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub position: i32,
    pub date: DateTime<FixedOffset>,
}

impl From<event::Model> for Event {
    fn from(event: event::Model) -> Self {
        Self {
            id: event.id,
            name: event.name,
            position: event.position,
            date: event.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileGroup {
    pub id: i32,
    pub name: String,
    pub directory: String,
    pub position: i32,
    pub date: DateTime<FixedOffset>,
    pub files: Vec<File>,
}

/// An object in the media bucket, addressable through its public URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    pub id: String,
    pub key: String,
    pub version: Option<String>,
    pub size: u64,
    pub uploaded: DateTime<Utc>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sail {
    pub id: i32,
    pub boat: String,
    pub captain: String,
    pub crew: i32,
    pub destination: String,
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
}

impl From<sail::Model> for Sail {
    fn from(sail: sail::Model) -> Self {
        Self {
            id: sail.id,
            boat: sail.boat,
            captain: sail.captain,
            crew: sail.crew,
            destination: sail.destination,
            departure: sail.departure,
            arrival: sail.arrival,
            created_at: sail.created_at,
        }
    }
}
