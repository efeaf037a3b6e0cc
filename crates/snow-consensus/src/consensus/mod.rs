//! Consensus protocols.

pub mod bag;
pub mod flat;
pub mod snowball;
pub mod snowflake;

use std::fmt;

use serde::{Deserialize, Serialize};
use snow_ids::Id;

/// Conflict nature of a decision instance.
///
/// A virtuous instance has no live competitor and finalizes after
/// `beta_virtuous` consecutive successful polls. A rogue instance has at least
/// one and needs `beta_rogue`. The nature is fixed when the instance is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    Virtuous,
    Rogue,
}

impl Nature {
    /// Returns the threshold that applies to this nature.
    #[must_use]
    pub const fn beta(self, beta_virtuous: usize, beta_rogue: usize) -> usize {
        match self {
            Self::Virtuous => beta_virtuous,
            Self::Rogue => beta_rogue,
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Virtuous => f.write_str("virtuous"),
            Self::Rogue => f.write_str("rogue"),
        }
    }
}

/// Finality from consecutive successful polls.
///
/// Any vote for a different choice, or any unsuccessful poll, breaks the
/// streak. Once finalized, every mutator is a no-op.
pub trait Snowflake: fmt::Display + Send + Sync {
    /// Registers a competing choice. Only the n-ary shape tracks an open set.
    fn add(&mut self, _choice: Id) {}

    /// Records a poll in which `choice` won.
    fn record_successful_poll(&mut self, choice: Id);

    /// Records a poll that no choice won.
    fn record_unsuccessful_poll(&mut self);

    /// Returns the choice the current streak is building toward.
    fn preference(&self) -> Id;

    /// Returns the length of the current streak.
    fn confidence(&self) -> usize;

    /// Returns true once the streak has reached the applicable beta.
    fn finalized(&self) -> bool;

    /// Returns the conflict nature fixed at construction.
    fn nature(&self) -> Nature;
}

/// Preference from cumulative successful polls, finality from an embedded
/// [`Snowflake`].
///
/// The preference only moves when a choice strictly overtakes the current
/// maximum, so ties keep the existing preference. After finalization the
/// embedded snowflake's choice is reported instead.
pub trait Snowball: fmt::Display + Send + Sync {
    /// Registers a competing choice. Only the n-ary shape tracks an open set.
    fn add(&mut self, _choice: Id) {}

    /// Records a poll in which `choice` won.
    fn record_successful_poll(&mut self, choice: Id);

    /// Records a poll that no choice won.
    fn record_unsuccessful_poll(&mut self);

    /// Returns the currently preferred choice.
    fn preference(&self) -> Id;

    /// Returns the number of successful polls ever recorded for `choice`.
    fn num_successful_polls(&self, choice: &Id) -> usize;

    /// Returns the largest per-choice total.
    fn max_successful_polls(&self) -> usize;

    /// Returns true once the embedded snowflake has finalized.
    fn finalized(&self) -> bool;

    /// Returns the conflict nature of the embedded snowflake.
    fn nature(&self) -> Nature;
}
