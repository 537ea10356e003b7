//! Free-text search over the directory
//!
//! A query is an arbitrary string matched as a case-insensitive substring
//! against an entity's name or locality. There is no tokenization and no
//! fuzzy matching; every string is a valid query.

use crate::domain::entity::Entity;

/// Case-insensitive substring query
///
/// The lowercase form is computed once so that matching a whole list on
/// every keystroke does not re-fold the query per entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    /// Creates a query from user input
    ///
    /// # Example
    /// ```rust
    /// use school_directory::domain::{entity::Entity, search::SearchQuery};
    ///
    /// let query = SearchQuery::new("LYON");
    /// assert!(query.matches(&Entity::new("2", "Lycée B", "Lyon")));
    /// ```
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// Query that matches everything
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the text as typed by the user
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns true if the entity's name or locality contains the query
    pub fn matches(&self, entity: &Entity) -> bool {
        self.is_empty() || self.matches_text(&entity.name) || self.matches_text(&entity.locality)
    }

    fn matches_text(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SearchQuery {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school() -> Entity {
        Entity::new("1", "Lycée Victor Hugo", "Besançon")
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = SearchQuery::empty();
        assert!(query.is_empty());
        assert!(query.matches(&school()));
        assert!(query.matches(&Entity::new("2", "", "")));
    }

    #[test]
    fn matches_name_case_insensitively() {
        assert!(SearchQuery::new("victor").matches(&school()));
        assert!(SearchQuery::new("LYCÉE").matches(&school()));
        assert!(SearchQuery::new("r h").matches(&school()));
        assert!(SearchQuery::new("VICTOR H").matches(&school()));
    }

    #[test]
    fn matches_locality_case_insensitively() {
        assert!(SearchQuery::new("besan").matches(&school()));
        assert!(SearchQuery::new("BESANÇON").matches(&school()));
    }

    #[test]
    fn rejects_non_matching_text() {
        assert!(!SearchQuery::new("lyon").matches(&school()));
        assert!(!SearchQuery::new("victor  hugo").matches(&school()));
    }

    #[test]
    fn keeps_raw_text() {
        let query = SearchQuery::from("Lycée");
        assert_eq!(query.as_str(), "Lycée");
    }
}
