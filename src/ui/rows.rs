//! List row view models
//!
//! Rows are what the host draws for each entity. They are built from the
//! ranked sequence and carry no references into the dataset, so a host
//! can hand them to another thread or keep them across re-renders.

use std::fmt;

use crate::domain::entity::{Entity, EntityId};
use crate::domain::favorites::FavoriteSet;

/// One row of the search screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRow {
    pub id: EntityId,
    pub name: String,
    pub locality: String,
    pub favorite: bool,
}

impl DirectoryRow {
    pub fn new(entity: &Entity, favorites: &FavoriteSet) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
            locality: entity.locality.clone(),
            favorite: favorites.contains(&entity.id),
        }
    }

    /// Heart glyph name, filled for favorites
    pub fn heart_icon(&self) -> &'static str {
        if self.favorite { "heart" } else { "heart-o" }
    }
}

impl fmt::Display for DirectoryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.favorite { '♥' } else { '♡' };
        write!(f, "{mark} {} ({})", self.name, self.locality)
    }
}

/// One row of the ranking board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub id: EntityId,
    pub rank: u32,
    pub name: String,
    pub votes: u32,
}

impl BoardRow {
    pub fn new(entity: &Entity) -> Self {
        Self {
            id: entity.id.clone(),
            rank: entity.rank,
            name: entity.name.clone(),
            votes: entity.vote_count,
        }
    }

    pub fn rank_label(&self) -> String {
        self.rank.to_string()
    }

    pub fn summary(&self) -> String {
        format!("{} - {} votes", self.name, self.votes)
    }
}

impl fmt::Display for BoardRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {}", self.rank_label(), self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_row_reflects_favorite_membership() {
        let entity = Entity::new("1", "Lycée A", "Paris");
        let mut favorites = FavoriteSet::new();

        let row = DirectoryRow::new(&entity, &favorites);
        assert!(!row.favorite);
        assert_eq!(row.heart_icon(), "heart-o");

        favorites.toggle(&entity.id);
        let row = DirectoryRow::new(&entity, &favorites);
        assert!(row.favorite);
        assert_eq!(row.heart_icon(), "heart");
        assert_eq!(row.to_string(), "♥ Lycée A (Paris)");
    }

    #[test]
    fn board_row_labels() {
        let entity = Entity::new("S2", "Lycée B", "")
            .with_rank(2)
            .with_vote_count(120);
        let row = BoardRow::new(&entity);

        assert_eq!(row.rank_label(), "2");
        assert_eq!(row.summary(), "Lycée B - 120 votes");
        assert_eq!(row.to_string(), "  2  Lycée B - 120 votes");
    }
}
