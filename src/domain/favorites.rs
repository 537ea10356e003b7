//! Favorite set for the search screen
//!
//! Favorites are session state: created when the screen mounts, dropped
//! when it unmounts. Membership is only changed by an explicit toggle.

use std::collections::HashSet;

use crate::domain::entity::EntityId;

/// Set of favorited entity ids
///
/// Ids may refer to entities that are currently filtered out, or to no
/// entity at all; such ids are simply inert when ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteSet {
    ids: HashSet<EntityId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id` and returns the new membership
    ///
    /// Toggling the same id twice restores the previous state.
    ///
    /// # Example
    /// ```rust
    /// use school_directory::domain::{entity::EntityId, favorites::FavoriteSet};
    ///
    /// let mut favorites = FavoriteSet::new();
    /// let id = EntityId::new("0750654D");
    /// assert!(favorites.toggle(&id));
    /// assert!(!favorites.toggle(&id));
    /// assert!(favorites.is_empty());
    /// ```
    pub fn toggle(&mut self, id: &EntityId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityId> {
        self.ids.iter()
    }
}

impl FromIterator<EntityId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
