//! Time-gated voting
//!
//! The gate allows one vote per cooldown window. It owns no timer: the
//! host advances time by calling [`VoteCooldownGate::tick`] from whatever
//! clock it has, and the gate only computes transitions.
//!
//! ## States
//! - `Idle`: a vote may be cast
//! - `Cooling { remaining, target }`: votes are rejected until `remaining`
//!   reaches zero
//!
//! Rejected requests never touch `remaining`, so rapid tapping can not
//! restart or extend the window.

use std::fmt;

use tracing::debug;

use crate::domain::entity::EntityId;

/// Whole seconds left before voting is allowed again
///
/// Displays as `MM:SS`; minutes are not wrapped into hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RemainingTime(u64);

impl RemainingTime {
    /// Wraps a number of whole seconds
    pub fn from_secs(seconds: u64) -> Self {
        Self(seconds)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Result of a vote request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote slot was consumed; the caller should confirm and submit
    Accepted,
    /// A cooldown is running; nothing changed
    Rejected(RemainingTime),
}

impl VoteOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, VoteOutcome::Accepted)
    }
}

/// Internal phase of the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CooldownPhase {
    Idle,
    Cooling { remaining: u64, target: EntityId },
}

/// Read-only snapshot for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooldownState {
    pub can_vote: bool,
    /// Meaningful only when `can_vote` is false
    pub remaining: RemainingTime,
    /// Entity the last accepted vote was for
    pub active_target: Option<EntityId>,
}

/// Per-session vote cooldown state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCooldownGate {
    duration: u64,
    phase: CooldownPhase,
    last_target: Option<EntityId>,
}

impl VoteCooldownGate {
    /// Cooldown used by the ranking board
    pub const DEFAULT_COOLDOWN_SECS: u64 = 30;

    /// Creates an idle gate with the given cooldown length in seconds
    ///
    /// # Example
    /// ```rust
    /// use school_directory::domain::{cooldown::{VoteCooldownGate, VoteOutcome}, entity::EntityId};
    ///
    /// let mut gate = VoteCooldownGate::new(30);
    /// let school = EntityId::new("S1");
    ///
    /// assert_eq!(gate.request_vote(&school), VoteOutcome::Accepted);
    /// assert!(!gate.current_state().can_vote);
    ///
    /// gate.tick(30);
    /// assert!(gate.current_state().can_vote);
    /// ```
    pub fn new(duration_secs: u64) -> Self {
        Self {
            duration: duration_secs,
            phase: CooldownPhase::Idle,
            last_target: None,
        }
    }

    /// Returns the configured cooldown length in seconds
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Returns the current phase, including the cooling target
    pub fn phase(&self) -> &CooldownPhase {
        &self.phase
    }

    /// Attempts to cast a vote for `target`
    ///
    /// The target is not validated against the dataset; that is the
    /// host's job. A zero-length cooldown accepts every request and never
    /// leaves `Idle`.
    pub fn request_vote(&mut self, target: &EntityId) -> VoteOutcome {
        match &self.phase {
            CooldownPhase::Idle => {
                self.last_target = Some(target.clone());
                if self.duration > 0 {
                    debug!(entity = %target, seconds = self.duration, "cooldown started");
                    self.phase = CooldownPhase::Cooling {
                        remaining: self.duration,
                        target: target.clone(),
                    };
                }
                VoteOutcome::Accepted
            }
            CooldownPhase::Cooling { remaining, .. } => {
                debug!(entity = %target, remaining, "vote rejected, cooling down");
                VoteOutcome::Rejected(RemainingTime(*remaining))
            }
        }
    }

    /// Advances time by `elapsed_secs`
    ///
    /// Non-positive values are ignored. The countdown is floored at zero,
    /// at which point the gate returns to `Idle`.
    pub fn tick(&mut self, elapsed_secs: i64) {
        if elapsed_secs <= 0 {
            return;
        }

        if let CooldownPhase::Cooling { remaining, target } = &mut self.phase {
            *remaining = remaining.saturating_sub(elapsed_secs as u64);
            if *remaining == 0 {
                debug!(entity = %target, "cooldown finished");
                self.phase = CooldownPhase::Idle;
            }
        }
    }

    /// Cancels a running cooldown for `target`, refunding the vote slot
    ///
    /// Returns true if the gate went back to `Idle`. A cooldown started for
    /// a different target is left alone.
    pub fn release(&mut self, target: &EntityId) -> bool {
        match &self.phase {
            CooldownPhase::Cooling { target: cooling, .. } if cooling == target => {
                debug!(entity = %target, "cooldown released");
                self.phase = CooldownPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Returns true while the gate is `Idle`
    pub fn can_vote(&self) -> bool {
        matches!(self.phase, CooldownPhase::Idle)
    }

    /// Returns the time left in the running cooldown
    ///
    /// # Returns
    /// Zero when the gate is `Idle`.
    pub fn remaining(&self) -> RemainingTime {
        match &self.phase {
            CooldownPhase::Idle => RemainingTime::default(),
            CooldownPhase::Cooling { remaining, .. } => RemainingTime(*remaining),
        }
    }

    /// Takes a read-only snapshot for rendering
    ///
    /// # Returns
    /// `can_vote`, the remaining time and the target of the last accepted
    /// vote. The target is kept after the cooldown ends.
    pub fn current_state(&self) -> CooldownState {
        CooldownState {
            can_vote: self.can_vote(),
            remaining: self.remaining(),
            active_target: self.last_target.clone(),
        }
    }
}

impl Default for VoteCooldownGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COOLDOWN_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s1() -> EntityId {
        EntityId::new("S1")
    }

    #[test]
    fn new_gate_is_idle() {
        let gate = VoteCooldownGate::new(30);
        let state = gate.current_state();

        assert!(state.can_vote);
        assert!(state.remaining.is_zero());
        assert_eq!(state.active_target, None);
        assert_eq!(gate.phase(), &CooldownPhase::Idle);
    }

    #[test]
    fn accepted_then_rejected_with_full_duration() {
        let mut gate = VoteCooldownGate::new(30);

        assert_eq!(gate.request_vote(&s1()), VoteOutcome::Accepted);
        assert_eq!(
            gate.request_vote(&s1()),
            VoteOutcome::Rejected(RemainingTime::from_secs(30))
        );
    }

    #[test]
    fn full_cooldown_scenario() {
        let mut gate = VoteCooldownGate::new(30);

        assert_eq!(gate.request_vote(&s1()), VoteOutcome::Accepted);
        assert_eq!(
            gate.request_vote(&s1()),
            VoteOutcome::Rejected(RemainingTime::from_secs(30))
        );

        gate.tick(10);
        assert_eq!(
            gate.request_vote(&s1()),
            VoteOutcome::Rejected(RemainingTime::from_secs(20))
        );

        gate.tick(20);
        assert!(gate.current_state().can_vote);
        assert_eq!(gate.request_vote(&s1()), VoteOutcome::Accepted);
    }

    #[test]
    fn repeated_requests_never_extend_cooldown() {
        let mut gate = VoteCooldownGate::new(30);
        gate.request_vote(&s1());
        gate.tick(5);

        for _ in 0..50 {
            assert_eq!(
                gate.request_vote(&EntityId::new("other")),
                VoteOutcome::Rejected(RemainingTime::from_secs(25))
            );
        }
        assert_eq!(gate.remaining().as_secs(), 25);
        assert_eq!(gate.current_state().active_target, Some(s1()));
    }

    #[test]
    fn zero_and_negative_ticks_are_noops() {
        let mut gate = VoteCooldownGate::new(30);
        gate.request_vote(&s1());

        gate.tick(0);
        assert_eq!(gate.remaining().as_secs(), 30);
        gate.tick(-15);
        assert_eq!(gate.remaining().as_secs(), 30);
        assert!(!gate.can_vote());
    }

    #[test]
    fn large_tick_clamps_at_zero() {
        let mut gate = VoteCooldownGate::new(30);
        gate.request_vote(&s1());

        gate.tick(i64::MAX);
        let state = gate.current_state();
        assert!(state.can_vote);
        assert_eq!(state.remaining.as_secs(), 0);
    }

    #[test]
    fn tick_while_idle_does_nothing() {
        let mut gate = VoteCooldownGate::new(30);
        gate.tick(100);
        assert_eq!(gate.phase(), &CooldownPhase::Idle);
    }

    #[test]
    fn last_target_survives_cooldown_end() {
        let mut gate = VoteCooldownGate::new(10);
        gate.request_vote(&s1());
        gate.tick(10);

        let state = gate.current_state();
        assert!(state.can_vote);
        assert_eq!(state.active_target, Some(s1()));
    }

    #[test]
    fn release_refunds_only_matching_target() {
        let mut gate = VoteCooldownGate::new(30);
        gate.request_vote(&s1());

        assert!(!gate.release(&EntityId::new("S2")));
        assert!(!gate.can_vote());

        assert!(gate.release(&s1()));
        assert!(gate.can_vote());
        assert!(!gate.release(&s1()));
    }

    #[test]
    fn zero_duration_never_cools() {
        let mut gate = VoteCooldownGate::new(0);
        assert!(gate.request_vote(&s1()).is_accepted());
        assert!(gate.request_vote(&s1()).is_accepted());
        assert!(gate.can_vote());
    }

    #[test]
    fn remaining_time_formats_as_minutes_and_seconds() {
        assert_eq!(RemainingTime::from_secs(0).to_string(), "00:00");
        assert_eq!(RemainingTime::from_secs(30).to_string(), "00:30");
        assert_eq!(RemainingTime::from_secs(75).to_string(), "01:15");
        assert_eq!(RemainingTime::from_secs(6000).to_string(), "100:00");
    }

    #[test]
    fn default_gate_uses_board_cooldown() {
        assert_eq!(VoteCooldownGate::default().duration(), 30);
    }
}
