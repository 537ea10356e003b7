//! Display ordering of the directory
//!
//! Ranking is a pure function of the entity list, the live query and the
//! live favorite set. It holds no state, so the host can call it on every
//! keystroke or toggle and always get the same answer for the same inputs.

use crate::domain::entity::Entity;
use crate::domain::favorites::FavoriteSet;
use crate::domain::search::SearchQuery;

/// Filters the directory and moves favorites to the front
pub struct DirectoryRanker;

impl DirectoryRanker {
    /// Produces the display-ordered, filtered view of `entities`
    ///
    /// 1. Keeps entities whose name or locality contains `query`.
    /// 2. Stable favorite-first partition: favorites come first, and the
    ///    relative order inside each group is the input order.
    ///
    /// No secondary sort key is applied.
    ///
    /// # Example
    /// ```rust
    /// use school_directory::domain::{
    ///     entity::{Entity, EntityId},
    ///     favorites::FavoriteSet,
    ///     ranker::DirectoryRanker,
    ///     search::SearchQuery,
    /// };
    ///
    /// let schools = vec![
    ///     Entity::new("1", "Lycée A", "Paris"),
    ///     Entity::new("2", "Lycée B", "Lyon"),
    /// ];
    /// let favorites: FavoriteSet = [EntityId::new("2")].into_iter().collect();
    ///
    /// let ranked = DirectoryRanker::rank(&schools, &SearchQuery::new("lycée"), &favorites);
    /// let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
    /// assert_eq!(ids, ["2", "1"]);
    /// ```
    pub fn rank<'a>(
        entities: &'a [Entity],
        query: &SearchQuery,
        favorites: &FavoriteSet,
    ) -> Vec<&'a Entity> {
        let (mut favored, rest): (Vec<&Entity>, Vec<&Entity>) = entities
            .iter()
            .filter(|entity| query.matches(entity))
            .partition(|entity| favorites.contains(&entity.id));

        favored.extend(rest);
        favored
    }

    /// Same as [`DirectoryRanker::rank`] with no favorites
    pub fn filter<'a>(entities: &'a [Entity], query: &SearchQuery) -> Vec<&'a Entity> {
        entities
            .iter()
            .filter(|entity| query.matches(entity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::EntityId;
    use proptest::prelude::*;

    fn ids(ranked: &[&Entity]) -> Vec<String> {
        ranked.iter().map(|e| e.id.to_string()).collect()
    }

    fn favorites(ids: &[&str]) -> FavoriteSet {
        ids.iter().copied().map(EntityId::new).collect()
    }

    fn sample() -> Vec<Entity> {
        vec![
            Entity::new("1", "Lycée A", "Paris"),
            Entity::new("2", "Lycée B", "Lyon"),
            Entity::new("3", "Collège C", "Paris"),
            Entity::new("4", "Lycée D", "Marseille"),
        ]
    }

    #[test]
    fn favorite_first_scenario() {
        let entities = vec![
            Entity::new("1", "Lycée A", "Paris"),
            Entity::new("2", "Lycée B", "Lyon"),
        ];
        let ranked = DirectoryRanker::rank(&entities, &"lycée".into(), &favorites(&["2"]));
        assert_eq!(ids(&ranked), ["2", "1"]);
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let ranked = DirectoryRanker::rank(&[], &"anything".into(), &favorites(&["1"]));
        assert!(ranked.is_empty());
    }

    #[test]
    fn filters_by_locality() {
        let entities = sample();
        let ranked = DirectoryRanker::rank(&entities, &"paris".into(), &FavoriteSet::new());
        assert_eq!(ids(&ranked), ["1", "3"]);
    }

    #[test]
    fn favorites_keep_their_relative_order() {
        let entities = sample();
        let ranked = DirectoryRanker::rank(
            &entities,
            &SearchQuery::empty(),
            &favorites(&["4", "2"]),
        );
        assert_eq!(ids(&ranked), ["2", "4", "1", "3"]);
    }

    #[test]
    fn filtered_out_favorite_reappears_first() {
        let entities = sample();
        let favs = favorites(&["3"]);

        let hidden = DirectoryRanker::rank(&entities, &"lyon".into(), &favs);
        assert_eq!(ids(&hidden), ["2"]);

        let shown = DirectoryRanker::rank(&entities, &SearchQuery::empty(), &favs);
        assert_eq!(ids(&shown), ["3", "1", "2", "4"]);
    }

    #[test]
    fn unknown_favorites_are_inert() {
        let entities = sample();
        let ranked = DirectoryRanker::rank(
            &entities,
            &SearchQuery::empty(),
            &favorites(&["999", "unknown"]),
        );
        assert_eq!(ids(&ranked), ["1", "2", "3", "4"]);
    }

    #[test]
    fn filter_matches_rank_without_favorites() {
        let entities = sample();
        let query = SearchQuery::new("lycée");
        assert_eq!(
            DirectoryRanker::filter(&entities, &query),
            DirectoryRanker::rank(&entities, &query, &FavoriteSet::new())
        );
    }

    fn arb_entities() -> impl Strategy<Value = Vec<Entity>> {
        prop::collection::vec(("[a-cA-Cé ]{0,5}", "[a-cA-C]{0,4}"), 0..12).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (name, locality))| Entity::new(index.to_string(), name, locality))
                .collect()
        })
    }

    fn arb_favorites() -> impl Strategy<Value = FavoriteSet> {
        prop::collection::vec(0usize..16, 0..8)
            .prop_map(|ids| ids.into_iter().map(|id| EntityId::new(id.to_string())).collect())
    }

    fn position(ranked: &[&Entity], id: &EntityId) -> Option<usize> {
        ranked.iter().position(|e| &e.id == id)
    }

    proptest! {
        #[test]
        fn empty_query_without_favorites_is_identity(entities in arb_entities()) {
            let ranked = DirectoryRanker::rank(&entities, &SearchQuery::empty(), &FavoriteSet::new());
            let expected: Vec<&Entity> = entities.iter().collect();
            prop_assert_eq!(ranked, expected);
        }

        #[test]
        fn every_result_matches_query(
            entities in arb_entities(),
            query in "[a-cA-C]{0,2}",
            favs in arb_favorites(),
        ) {
            let query = SearchQuery::new(query);
            for entity in DirectoryRanker::rank(&entities, &query, &favs) {
                prop_assert!(query.matches(entity));
            }
        }

        #[test]
        fn favorites_form_a_prefix(
            entities in arb_entities(),
            query in "[a-cA-C]{0,2}",
            favs in arb_favorites(),
        ) {
            let query = SearchQuery::new(query);
            let ranked = DirectoryRanker::rank(&entities, &query, &favs);
            let filtered = DirectoryRanker::filter(&entities, &query);
            prop_assert_eq!(ranked.len(), filtered.len());

            let split = ranked.iter().take_while(|e| favs.contains(&e.id)).count();
            prop_assert!(ranked[split..].iter().all(|e| !favs.contains(&e.id)));
        }

        #[test]
        fn partition_is_stable(
            entities in arb_entities(),
            query in "[a-cA-C]{0,2}",
            favs in arb_favorites(),
        ) {
            let query = SearchQuery::new(query);
            let ranked = DirectoryRanker::rank(&entities, &query, &favs);
            let filtered = DirectoryRanker::filter(&entities, &query);

            for (i, a) in filtered.iter().enumerate() {
                for b in &filtered[i + 1..] {
                    if favs.contains(&a.id) == favs.contains(&b.id) {
                        prop_assert!(position(&ranked, &a.id) < position(&ranked, &b.id));
                    }
                }
            }
        }

        #[test]
        fn ranking_is_idempotent(
            entities in arb_entities(),
            query in "[a-cA-C]{0,2}",
            favs in arb_favorites(),
        ) {
            let query = SearchQuery::new(query);
            prop_assert_eq!(
                DirectoryRanker::rank(&entities, &query, &favs),
                DirectoryRanker::rank(&entities, &query, &favs)
            );
        }
    }
}
