//! Flat snowball: the n-ary snowball driven by raw poll results.

use std::fmt;

use snow_ids::Id;
use tracing::debug;

use super::bag::Bag;
use super::snowball::NnarySnowball;
use super::{Nature, Snowball};
use crate::{ConsensusError, Parameters, Result};

/// Reduces each poll's votes to a single outcome and feeds it to an
/// [`NnarySnowball`].
///
/// A poll succeeds for the most voted choice if it collected at least
/// `alpha` votes. Anything less is an unsuccessful poll.
///
/// A flat instance exists to decide between competing choices, so it is
/// rogue and finalizes at `beta_rogue` unless built otherwise.
#[derive(Debug, Clone)]
pub struct Flat {
    params: Parameters,
    snowball: NnarySnowball,
}

impl Flat {
    /// Creates a rogue flat instance preferring `choice`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsensusError::InvalidParameters`] if `params` do not validate.
    pub fn new(params: Parameters, choice: Id) -> Result<Self> {
        params.validate().map_err(ConsensusError::InvalidParameters)?;
        let snowball = NnarySnowball::new(params.beta_virtuous, params.beta_rogue, choice)
            .with_nature(Nature::Rogue);
        Ok(Self { params, snowball })
    }

    /// Overrides the conflict nature, e.g. [`Nature::Virtuous`] when the caller
    /// knows the choice has no competitor.
    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.snowball = self.snowball.with_nature(nature);
        self
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Returns the wrapped snowball.
    pub fn snowball(&self) -> &NnarySnowball {
        &self.snowball
    }

    pub fn add(&mut self, choice: Id) {
        self.snowball.add(choice);
    }

    /// Records the votes of one poll. Returns true if the poll was successful.
    pub fn record_poll(&mut self, votes: &Bag) -> bool {
        match votes.mode() {
            Some((choice, count)) if count >= self.params.alpha => {
                self.snowball.record_successful_poll(choice);
                if self.snowball.finalized() {
                    debug!(preference = %self.snowball.preference(), "flat snowball finalized");
                }
                true
            }
            _ => {
                self.snowball.record_unsuccessful_poll();
                false
            }
        }
    }

    pub fn record_unsuccessful_poll(&mut self) {
        self.snowball.record_unsuccessful_poll();
    }

    pub fn preference(&self) -> Id {
        self.snowball.preference()
    }

    pub fn finalized(&self) -> bool {
        self.snowball.finalized()
    }
}

impl fmt::Display for Flat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snowball, f)
    }
}
