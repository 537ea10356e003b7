//! Ranking board state management
//!
//! Defines which prompt the board is showing and the transitions between
//! them. The cooldown itself lives in the gate; this machine only tracks
//! what the user is looking at.

use crate::domain::cooldown::{RemainingTime, VoteOutcome};
use crate::domain::entity::EntityId;

/// What the ranking board is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardState {
    /// List is interactive, no prompt open
    #[default]
    Browsing,
    /// "Are you sure" prompt for an accepted vote
    Confirming(ConfirmingState),
    /// Remaining-time prompt after a rejected tap
    CoolingNotice { remaining: RemainingTime },
}

impl BoardState {
    /// Returns true when no prompt is open
    pub fn is_browsing(&self) -> bool {
        matches!(self, BoardState::Browsing)
    }
}

/// State while the user confirms a vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmingState {
    /// Entity whose vote slot was consumed by the tap
    pub target: EntityId,
}

/// Possible state transition events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A row was tapped and the gate answered with `outcome`
    VoteTapped { target: EntityId, outcome: VoteOutcome },
    /// User pressed "Voter" on the confirmation prompt
    VoteConfirmed,
    /// User dismissed the confirmation prompt
    VoteCancelled,
    /// User closed the remaining-time prompt
    NoticeDismissed,
}

/// State machine for board transitions
pub struct BoardStateMachine;

impl BoardStateMachine {
    /// Processes an event and returns the new state
    ///
    /// Events that make no sense in the current state leave it unchanged.
    pub fn process_event(current_state: BoardState, event: BoardEvent) -> BoardState {
        match (current_state, event) {
            (BoardState::Browsing, BoardEvent::VoteTapped { target, outcome }) => match outcome {
                VoteOutcome::Accepted => BoardState::Confirming(ConfirmingState { target }),
                VoteOutcome::Rejected(remaining) => BoardState::CoolingNotice { remaining },
            },

            (BoardState::Confirming(_), BoardEvent::VoteConfirmed)
            | (BoardState::Confirming(_), BoardEvent::VoteCancelled) => BoardState::Browsing,

            (BoardState::CoolingNotice { .. }, BoardEvent::NoticeDismissed) => BoardState::Browsing,

            // Prompts are modal
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tapped(outcome: VoteOutcome) -> BoardEvent {
        BoardEvent::VoteTapped {
            target: EntityId::new("S1"),
            outcome,
        }
    }

    #[test]
    fn default_state_is_browsing() {
        assert!(BoardState::default().is_browsing());
    }

    #[test]
    fn accepted_tap_opens_confirmation() {
        let state = BoardStateMachine::process_event(BoardState::Browsing, tapped(VoteOutcome::Accepted));

        assert_eq!(
            state,
            BoardState::Confirming(ConfirmingState {
                target: EntityId::new("S1")
            })
        );
    }

    #[test]
    fn rejected_tap_opens_notice() {
        let remaining = RemainingTime::from_secs(12);
        let state = BoardStateMachine::process_event(
            BoardState::Browsing,
            tapped(VoteOutcome::Rejected(remaining)),
        );

        assert_eq!(state, BoardState::CoolingNotice { remaining });
    }

    #[test]
    fn confirm_and_cancel_return_to_browsing() {
        let confirming = BoardState::Confirming(ConfirmingState {
            target: EntityId::new("S1"),
        });

        assert!(BoardStateMachine::process_event(confirming.clone(), BoardEvent::VoteConfirmed).is_browsing());
        assert!(BoardStateMachine::process_event(confirming, BoardEvent::VoteCancelled).is_browsing());
    }

    #[test]
    fn dismissing_notice_returns_to_browsing() {
        let notice = BoardState::CoolingNotice {
            remaining: RemainingTime::from_secs(3),
        };
        assert!(BoardStateMachine::process_event(notice, BoardEvent::NoticeDismissed).is_browsing());
    }

    #[test]
    fn taps_are_ignored_while_prompt_is_open() {
        let confirming = BoardState::Confirming(ConfirmingState {
            target: EntityId::new("S1"),
        });
        let state = BoardStateMachine::process_event(confirming.clone(), tapped(VoteOutcome::Accepted));
        assert_eq!(state, confirming);
    }

    #[test]
    fn stray_events_are_ignored() {
        assert!(BoardStateMachine::process_event(BoardState::Browsing, BoardEvent::VoteConfirmed).is_browsing());
        assert!(BoardStateMachine::process_event(BoardState::Browsing, BoardEvent::NoticeDismissed).is_browsing());

        let notice = BoardState::CoolingNotice {
            remaining: RemainingTime::from_secs(3),
        };
        assert_eq!(
            BoardStateMachine::process_event(notice.clone(), BoardEvent::VoteConfirmed),
            notice
        );
    }
}
