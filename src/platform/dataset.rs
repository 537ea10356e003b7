//! Directory dataset loading
//!
//! The dataset is a JSON array of establishment records keyed by their
//! national identifier:
//!
//! ```json
//! [
//!   {
//!     "identifiant_de_l_etablissement": "0750654D",
//!     "name": "Lycée Henri-IV",
//!     "ville": "Paris",
//!     "latitude": 48.8462,
//!     "longitude": 2.3479
//!   }
//! ]
//! ```
//!
//! `rank` and `votes` are optional and default to zero.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::entity::{Coordinates, Entity, EntityId};
use crate::platform::EntitySource;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Duplicate establishment id {0}")]
    DuplicateId(EntityId),
}

#[derive(Debug, Deserialize)]
struct EstablishmentRecord {
    #[serde(rename = "identifiant_de_l_etablissement")]
    id: EntityId,
    name: String,
    #[serde(rename = "ville")]
    locality: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    rank: u32,
    #[serde(default)]
    votes: u32,
}

impl From<EstablishmentRecord> for Entity {
    fn from(record: EstablishmentRecord) -> Self {
        Entity::new(record.id, record.name, record.locality)
            .with_rank(record.rank)
            .with_vote_count(record.votes)
            .with_coordinates(Coordinates::new(record.latitude, record.longitude))
    }
}

/// Parses a dataset document, keeping record order
pub fn parse_entities(json: &str) -> Result<Vec<Entity>, DatasetError> {
    let records: Vec<EstablishmentRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut entities = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.clone()) {
            return Err(DatasetError::DuplicateId(record.id));
        }
        entities.push(Entity::from(record));
    }

    debug!(count = entities.len(), "parsed dataset");
    Ok(entities)
}

/// Dataset stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonDataset {
    path: PathBuf,
}

impl JsonDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntitySource for JsonDataset {
    fn load_entities(&self) -> Result<Vec<Entity>, DatasetError> {
        let json = fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;
        let entities = parse_entities(&json)?;
        info!(path = %self.path.display(), count = entities.len(), "dataset loaded");
        Ok(entities)
    }
}

/// Dataset already held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticEntities {
    entities: Vec<Entity>,
}

impl StaticEntities {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// The twenty schools of the ranking board prototype
    ///
    /// Ranks run 1 to 20 with descending vote tallies.
    pub fn ranking_board() -> Self {
        const BOARD: [(&str, u32); 20] = [
            ("A", 150),
            ("B", 120),
            ("C", 100),
            ("D", 80),
            ("E", 70),
            ("F", 65),
            ("G", 60),
            ("H", 55),
            ("I", 50),
            ("J", 45),
            ("K", 40),
            ("L", 35),
            ("M", 30),
            ("N", 25),
            ("O", 20),
            ("P", 15),
            ("Q", 10),
            ("R", 5),
            ("S", 3),
            ("T", 1),
        ];

        let entities = BOARD
            .iter()
            .zip(1u32..)
            .map(|((letter, votes), rank)| {
                Entity::new(format!("S{rank}"), format!("Lycée {letter}"), "")
                    .with_rank(rank)
                    .with_vote_count(*votes)
            })
            .collect();

        Self { entities }
    }
}

impl EntitySource for StaticEntities {
    fn load_entities(&self) -> Result<Vec<Entity>, DatasetError> {
        Ok(self.entities.clone())
    }
}
