use std::fmt;

use snow_ids::Id;
use tracing::{debug, trace, warn};

use super::Streak;
use crate::consensus::{Nature, Snowflake};

/// Snowflake over exactly two competing choices.
///
/// Both choices are fixed at construction and the preference is held as an
/// index into them. Two live choices make the instance rogue by default.
#[derive(Debug, Clone)]
pub struct BinarySnowflake {
    choices: [Id; 2],
    preference: usize,
    streak: Streak,
}

impl BinarySnowflake {
    /// Creates a rogue instance preferring `preferred` over `competitor`.
    pub fn new(beta_virtuous: usize, beta_rogue: usize, preferred: Id, competitor: Id) -> Self {
        Self {
            choices: [preferred, competitor],
            preference: 0,
            streak: Streak::new(beta_virtuous, beta_rogue, Nature::Rogue),
        }
    }

    /// Fixes the conflict nature, and with it the applicable beta.
    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.streak.set_nature(nature);
        self
    }

    /// Returns the two choices in construction order.
    pub fn choices(&self) -> [Id; 2] {
        self.choices
    }

    /// Returns the position of `choice`, or `None` if it is not one of the two.
    pub fn index_of(&self, choice: &Id) -> Option<usize> {
        self.choices.iter().position(|c| c == choice)
    }

    /// Returns the beta this instance finalizes at.
    pub fn beta(&self) -> usize {
        self.streak.beta()
    }
}

impl Snowflake for BinarySnowflake {
    fn record_successful_poll(&mut self, choice: Id) {
        if self.streak.finalized() {
            return;
        }
        let Some(index) = self.index_of(&choice) else {
            warn!(%choice, "vote for unknown choice in binary snowflake");
            self.record_unsuccessful_poll();
            return;
        };

        let extends = index == self.preference;
        if !extends {
            trace!(from = %self.choices[self.preference], to = %choice, "snowflake switched preference");
            self.preference = index;
        }
        if self.streak.succeed(extends) {
            debug!(%choice, confidence = self.streak.confidence(), "snowflake finalized");
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
        self.choices[self.preference]
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

impl fmt::Display for BinarySnowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SF(Preference = {}, Confidence = {}, Finalized = {})",
            self.preference(),
            self.streak.confidence(),
            self.streak.finalized()
        )
    }
}
