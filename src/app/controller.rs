//! Screen controllers
//!
//! Each controller is one screen session: it owns the transient state
//! (query, favorites, cooldown, open prompt), feeds user events into the
//! domain, and returns render models. Dropping a controller is unmounting
//! the screen.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::app::state::{BoardEvent, BoardState, BoardStateMachine};
use crate::config::{AppConfig, ConfigError, SubmissionFailurePolicy};
use crate::domain::cooldown::{CooldownState, VoteCooldownGate, VoteOutcome};
use crate::domain::entity::{Entity, EntityId};
use crate::domain::favorites::FavoriteSet;
use crate::domain::paging::Pagination;
use crate::domain::ranker::DirectoryRanker;
use crate::domain::review::{Review, ReviewDraft, ReviewError};
use crate::domain::search::SearchQuery;
use crate::platform::{
    CommentSource, DatasetError, EntitySource, SubmissionError, VoteReceipt, VoteSubmitter,
};
use crate::ui::{BoardRow, DirectoryRow, Prompt, SchoolDetail};

/// Application errors that can occur during controller operations
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("Vote submission failed: {0}")]
    Submission(#[from] SubmissionError),
    #[error("Review error: {0}")]
    Review(#[from] ReviewError),
    #[error("No establishment with id {0}")]
    UnknownEntity(EntityId),
    #[error("No vote is waiting for confirmation")]
    NothingToConfirm,
}

fn find<'a>(entities: &'a [Entity], id: &EntityId) -> Result<&'a Entity, AppError> {
    entities
        .iter()
        .find(|entity| &entity.id == id)
        .ok_or_else(|| AppError::UnknownEntity(id.clone()))
}

/// Search screen: query box, favorite hearts, favorite-first list
#[derive(Debug, Clone)]
pub struct SearchScreen {
    entities: Vec<Entity>,
    query: SearchQuery,
    favorites: FavoriteSet,
}

impl SearchScreen {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            query: SearchQuery::empty(),
            favorites: FavoriteSet::new(),
        }
    }

    pub fn from_source(source: &impl EntitySource) -> Result<Self, AppError> {
        Ok(Self::new(source.load_entities()?))
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Replaces the query with the latest contents of the search box
    pub fn handle_search(&mut self, query: impl Into<SearchQuery>) {
        self.query = query.into();
        debug!(query = self.query.as_str(), "search updated");
    }

    /// Flips the heart on `id`; returns the new membership
    ///
    /// Works for entities hidden by the current query too.
    pub fn toggle_favorite(&mut self, id: &EntityId) -> bool {
        let favorite = self.favorites.toggle(id);
        debug!(entity = %id, favorite, "favorite toggled");
        favorite
    }

    /// Filtered, favorite-first view of the directory
    pub fn ranked(&self) -> Vec<&Entity> {
        DirectoryRanker::rank(&self.entities, &self.query, &self.favorites)
    }

    pub fn rows(&self) -> Vec<DirectoryRow> {
        self.ranked()
            .into_iter()
            .map(|entity| DirectoryRow::new(entity, &self.favorites))
            .collect()
    }

    /// Opens the detail screen of a listed entity
    pub fn open_detail(&self, id: &EntityId) -> Result<DetailScreen, AppError> {
        let entity = find(&self.entities, id)?;
        Ok(DetailScreen::new(entity.clone()))
    }
}

/// Detail screen: map pin, ratings and the review form
#[derive(Debug, Clone)]
pub struct DetailScreen {
    entity: Entity,
    draft: ReviewDraft,
}

impl DetailScreen {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            draft: ReviewDraft::new(),
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn view(&self, comments: &impl CommentSource) -> SchoolDetail {
        SchoolDetail::new(&self.entity, comments)
    }

    pub fn open_review(&mut self) {
        self.draft.open();
    }

    pub fn close_review(&mut self) {
        self.draft.close();
    }

    pub fn rate(&mut self, stars: u8) -> Result<(), AppError> {
        Ok(self.draft.set_rating(stars)?)
    }

    pub fn write_comment(&mut self, comment: impl Into<String>) -> Result<(), AppError> {
        Ok(self.draft.set_comment(comment)?)
    }

    /// Takes the finished review out of the form
    ///
    /// Storing it is up to the caller's comment backend.
    pub fn submit_review(&mut self) -> Result<Review, AppError> {
        let review = self.draft.submit()?;
        info!(entity = %self.entity.id, stars = review.rating.stars(), "review submitted");
        Ok(review)
    }
}

/// Ranking board: paged list, tap-to-vote with a cooldown
#[derive(Debug)]
pub struct RankingBoard<V> {
    entities: Vec<Entity>,
    query: SearchQuery,
    paging: Pagination,
    gate: VoteCooldownGate,
    state: BoardState,
    submitter: V,
    failure_policy: SubmissionFailurePolicy,
}

impl<V: VoteSubmitter> RankingBoard<V> {
    pub fn new(entities: Vec<Entity>, config: &AppConfig, submitter: V) -> Self {
        Self {
            entities,
            query: SearchQuery::empty(),
            paging: Pagination::new(config.page_size),
            gate: VoteCooldownGate::new(config.cooldown_seconds),
            state: BoardState::default(),
            submitter,
            failure_policy: config.submission_failure,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn submitter(&self) -> &V {
        &self.submitter
    }

    pub fn cooldown(&self) -> CooldownState {
        self.gate.current_state()
    }

    pub fn handle_search(&mut self, query: impl Into<SearchQuery>) {
        self.query = query.into();
        debug!(query = self.query.as_str(), "board search updated");
    }

    pub fn load_more(&mut self) {
        self.paging.expand();
    }

    pub fn shows_load_more(&self) -> bool {
        self.paging
            .shows_load_more(DirectoryRanker::filter(&self.entities, &self.query).len())
    }

    /// Visible rows, in dataset order
    pub fn rows(&self) -> Vec<BoardRow> {
        let filtered = DirectoryRanker::filter(&self.entities, &self.query);
        self.paging
            .visible(&filtered)
            .iter()
            .map(|entity| BoardRow::new(entity))
            .collect()
    }

    /// Prompt to show for the current state, if any
    pub fn prompt(&self) -> Option<Prompt> {
        match &self.state {
            BoardState::Browsing => None,
            BoardState::Confirming(confirming) => Some(Prompt::ConfirmVote {
                school_name: find(&self.entities, &confirming.target)
                    .map(|entity| entity.name.clone())
                    .unwrap_or_else(|_| confirming.target.to_string()),
            }),
            BoardState::CoolingNotice { remaining } => Some(Prompt::CooldownRemaining {
                remaining: *remaining,
            }),
        }
    }

    /// Handles a tap on a board row
    ///
    /// Returns the gate's answer, or None when a prompt is already open and
    /// the tap was ignored.
    pub fn tap(&mut self, id: &EntityId) -> Result<Option<VoteOutcome>, AppError> {
        if !self.state.is_browsing() {
            debug!(entity = %id, "tap ignored, prompt open");
            return Ok(None);
        }
        find(&self.entities, id)?;

        let outcome = self.gate.request_vote(id);
        self.process(BoardEvent::VoteTapped {
            target: id.clone(),
            outcome,
        });
        Ok(Some(outcome))
    }

    /// Submits the pending vote
    ///
    /// The collaborator is called exactly once. On failure the configured
    /// policy decides whether the vote slot is refunded.
    pub fn confirm(&mut self) -> Result<VoteReceipt, AppError> {
        let target = match &self.state {
            BoardState::Confirming(confirming) => confirming.target.clone(),
            _ => return Err(AppError::NothingToConfirm),
        };
        self.process(BoardEvent::VoteConfirmed);

        match self.submitter.submit_vote(&target) {
            Ok(receipt) => {
                if let Some(entity) = self.entities.iter_mut().find(|e| e.id == receipt.id) {
                    entity.vote_count = receipt.vote_count;
                }
                info!(entity = %target, votes = receipt.vote_count, "vote submitted");
                Ok(receipt)
            }
            Err(err) => {
                warn!(entity = %target, error = %err, "vote submission failed");
                if self.failure_policy == SubmissionFailurePolicy::Refund {
                    self.gate.release(&target);
                }
                Err(err.into())
            }
        }
    }

    /// Closes the confirmation prompt without voting
    ///
    /// The cooldown started at the tap keeps running.
    pub fn cancel(&mut self) -> bool {
        self.process(BoardEvent::VoteCancelled)
    }

    pub fn dismiss_notice(&mut self) -> bool {
        self.process(BoardEvent::NoticeDismissed)
    }

    /// Forwards elapsed time from the host's tick source
    pub fn tick(&mut self, elapsed_secs: i64) {
        self.gate.tick(elapsed_secs);
    }

    fn process(&mut self, event: BoardEvent) -> bool {
        let current_state = std::mem::take(&mut self.state);
        let before = current_state.clone();
        self.state = BoardStateMachine::process_event(current_state, event);
        self.state != before
    }
}
