//! Collaborators outside the engine
//!
//! The engine never loads data or talks to a vote backend itself. These
//! traits are the seams the hosting screens call through; the concrete
//! types here are the file and in-memory implementations used by the
//! binary and the tests.

pub mod comments;
pub mod dataset;
pub mod votes;

use crate::domain::entity::{Entity, EntityId};
use crate::domain::review::Review;

pub use comments::InMemoryComments;
pub use dataset::{DatasetError, JsonDataset, StaticEntities};
pub use votes::{InMemoryVoteLedger, SubmissionError, VoteReceipt};

/// Supplies the immutable reference dataset at startup
pub trait EntitySource {
    fn load_entities(&self) -> Result<Vec<Entity>, DatasetError>;
}

/// Records a confirmed vote
///
/// Called exactly once per accepted and confirmed vote.
pub trait VoteSubmitter {
    fn submit_vote(&mut self, id: &EntityId) -> Result<VoteReceipt, SubmissionError>;
}

/// Read-only review data for the detail screen
pub trait CommentSource {
    fn load_comments(&self, id: &EntityId) -> Vec<Review>;

    /// Mean star rating, or None when nobody has reviewed the entity
    fn average_rating(&self, id: &EntityId) -> Option<f32>;
}
