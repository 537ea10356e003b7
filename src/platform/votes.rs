//! In-memory vote tally

use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::entity::{Entity, EntityId};
use crate::platform::VoteSubmitter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("No establishment with id {0}")]
    UnknownEntity(EntityId),
    #[error("Vote service unavailable: {0}")]
    Unavailable(String),
}

/// Acknowledgement of a recorded vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub id: EntityId,
    /// Tally after this vote
    pub vote_count: u32,
}

/// Vote collaborator keeping tallies in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryVoteLedger {
    tallies: HashMap<EntityId, u32>,
    offline: bool,
}

impl InMemoryVoteLedger {
    /// Seeds tallies from the entities' current vote counts
    pub fn from_entities(entities: &[Entity]) -> Self {
        Self {
            tallies: entities
                .iter()
                .map(|entity| (entity.id.clone(), entity.vote_count))
                .collect(),
            offline: false,
        }
    }

    /// Makes every following submission fail with `Unavailable`
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn vote_count(&self, id: &EntityId) -> Option<u32> {
        self.tallies.get(id).copied()
    }
}

impl VoteSubmitter for InMemoryVoteLedger {
    fn submit_vote(&mut self, id: &EntityId) -> Result<VoteReceipt, SubmissionError> {
        if self.offline {
            warn!(entity = %id, "vote dropped, ledger offline");
            return Err(SubmissionError::Unavailable("ledger offline".to_string()));
        }

        let tally = self
            .tallies
            .get_mut(id)
            .ok_or_else(|| SubmissionError::UnknownEntity(id.clone()))?;
        *tally = tally.saturating_add(1);

        info!(entity = %id, votes = *tally, "vote recorded");
        Ok(VoteReceipt {
            id: id.clone(),
            vote_count: *tally,
        })
    }
}
