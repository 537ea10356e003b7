//! Whole-second tick source
//!
//! The cooldown gate counts in whole seconds while host clocks fire at
//! whatever rate they like. `SecondTicker` turns monotonic instants into
//! whole elapsed seconds and carries the fractional rest to the next call.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SecondTicker {
    last: Instant,
    carry: Duration,
}

impl SecondTicker {
    pub fn new(start: Instant) -> Self {
        Self {
            last: start,
            carry: Duration::ZERO,
        }
    }

    /// Returns the whole seconds elapsed since the previous call
    ///
    /// An instant earlier than the previous one counts as no time.
    pub fn advance(&mut self, now: Instant) -> i64 {
        let delta = now.saturating_duration_since(self.last);
        if now > self.last {
            self.last = now;
        }

        let total = self.carry + delta;
        let whole = total.as_secs();
        self.carry = total - Duration::from_secs(whole);
        i64::try_from(whole).unwrap_or(i64::MAX)
    }
}
