//! In-memory review store

use std::collections::HashMap;

use tracing::debug;

use crate::domain::entity::EntityId;
use crate::domain::review::Review;
use crate::platform::CommentSource;

#[derive(Debug, Clone, Default)]
pub struct InMemoryComments {
    reviews: HashMap<EntityId, Vec<Review>>,
}

impl InMemoryComments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_review(&mut self, id: &EntityId, review: Review) {
        debug!(entity = %id, stars = review.rating.stars(), "review stored");
        self.reviews.entry(id.clone()).or_default().push(review);
    }
}

impl CommentSource for InMemoryComments {
    fn load_comments(&self, id: &EntityId) -> Vec<Review> {
        self.reviews.get(id).cloned().unwrap_or_default()
    }

    fn average_rating(&self, id: &EntityId) -> Option<f32> {
        let reviews = self.reviews.get(id).filter(|reviews| !reviews.is_empty())?;
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating.stars())).sum();
        Some(total as f32 / reviews.len() as f32)
    }
}
