use std::fmt;

use snow_ids::Id;
use tracing::{debug, trace, warn};

use super::Streak;
use crate::consensus::{Nature, Snowflake};

/// Snowflake over a single value with no known conflicts.
///
/// The value is fixed at construction. A vote naming any other id cannot
/// extend the streak and is recorded as an unsuccessful poll.
#[derive(Debug, Clone)]
pub struct UnarySnowflake {
    choice: Id,
    streak: Streak,
}

impl UnarySnowflake {
    /// Creates a virtuous instance for `choice`.
    pub fn new(beta_virtuous: usize, beta_rogue: usize, choice: Id) -> Self {
        Self {
            choice,
            streak: Streak::new(beta_virtuous, beta_rogue, Nature::Virtuous),
        }
    }

    /// Fixes the conflict nature, and with it the applicable beta.
    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.streak.set_nature(nature);
        self
    }

    /// Returns the beta this instance finalizes at.
    pub fn beta(&self) -> usize {
        self.streak.beta()
    }
}

impl Snowflake for UnarySnowflake {
    fn record_successful_poll(&mut self, choice: Id) {
        if self.streak.finalized() {
            return;
        }
        if choice != self.choice {
            warn!(%choice, expected = %self.choice, "vote for unknown choice in unary snowflake");
            self.record_unsuccessful_poll();
            return;
        }
        if self.streak.succeed(true) {
            debug!(choice = %self.choice, confidence = self.streak.confidence(), "snowflake finalized");
        }
    }

    fn record_unsuccessful_poll(&mut self) {
        if self.streak.finalized() {
            return;
        }
        trace!(lost = self.streak.confidence(), "snowflake streak reset");
        self.streak.reset();
    }

    fn preference(&self) -> Id {
        self.choice
    }

    fn confidence(&self) -> usize {
        self.streak.confidence()
    }

    fn finalized(&self) -> bool {
        self.streak.finalized()
    }

    fn nature(&self) -> Nature {
        self.streak.nature()
    }
}

impl fmt::Display for UnarySnowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SF(Confidence = {}, Finalized = {})",
            self.streak.confidence(),
            self.streak.finalized()
        )
    }
}
