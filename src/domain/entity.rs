//! Core directory types
//!
//! An entity is one institution of the static directory. Entities are
//! loaded once and never mutated by the engine; coordinates are carried
//! through untouched for the map collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of an entity
///
/// Used as the lookup key for favorites and votes. Never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an identifier from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Geographic position of an entity, opaque to the engine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// An institution record of the directory
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub locality: String,
    /// Externally assigned position on the board, informational only
    pub rank: u32,
    /// Tally owned by the vote collaborator, read-only here
    pub vote_count: u32,
    pub coordinates: Coordinates,
}

impl Entity {
    /// Creates an entity with zero rank, zero votes and origin coordinates
    ///
    /// # Example
    /// ```rust
    /// use school_directory::domain::entity::Entity;
    ///
    /// let school = Entity::new("0750654D", "Lycée Henri-IV", "Paris")
    ///     .with_rank(1)
    ///     .with_vote_count(150);
    /// assert_eq!(school.id.as_str(), "0750654D");
    /// assert_eq!(school.vote_count, 150);
    /// ```
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        locality: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            locality: locality.into(),
            rank: 0,
            vote_count: 0,
            coordinates: Coordinates::default(),
        }
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_vote_count(mut self, vote_count: u32) -> Self {
        self.vote_count = vote_count;
        self
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = coordinates;
        self
    }
}
