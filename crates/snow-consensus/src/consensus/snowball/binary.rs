use std::fmt;

use snow_ids::Id;

use crate::consensus::snowflake::BinarySnowflake;
use crate::consensus::{Nature, Snowball, Snowflake};

/// Snowball over exactly two competing choices.
#[derive(Debug, Clone)]
pub struct BinarySnowball {
    /// Index of the choice with the most successful polls. Ties keep the
    /// current index.
    preference: usize,
    num_successful_polls: [usize; 2],
    snowflake: BinarySnowflake,
}

impl BinarySnowball {
    /// Creates a rogue instance preferring `preferred` over `competitor`.
    pub fn new(beta_virtuous: usize, beta_rogue: usize, preferred: Id, competitor: Id) -> Self {
        Self {
            preference: 0,
            num_successful_polls: [0; 2],
            snowflake: BinarySnowflake::new(beta_virtuous, beta_rogue, preferred, competitor),
        }
    }

    /// Fixes the conflict nature of the embedded snowflake.
    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.snowflake = self.snowflake.with_nature(nature);
        self
    }

    /// Returns the embedded snowflake that decides finality.
    pub fn snowflake(&self) -> &BinarySnowflake {
        &self.snowflake
    }
}

impl Snowball for BinarySnowball {
    fn record_successful_poll(&mut self, choice: Id) {
        if self.finalized() {
            return;
        }
        if let Some(index) = self.snowflake.index_of(&choice) {
            self.num_successful_polls[index] += 1;
            if self.num_successful_polls[index] > self.num_successful_polls[self.preference] {
                self.preference = index;
            }
        }
        self.snowflake.record_successful_poll(choice);
    }

    fn record_unsuccessful_poll(&mut self) {
        self.snowflake.record_unsuccessful_poll();
    }

    fn preference(&self) -> Id {
        if self.finalized() {
            return self.snowflake.preference();
        }
        self.snowflake.choices()[self.preference]
    }

    fn num_successful_polls(&self, choice: &Id) -> usize {
        self.snowflake
            .index_of(choice)
            .map_or(0, |index| self.num_successful_polls[index])
    }

    fn max_successful_polls(&self) -> usize {
        self.num_successful_polls[self.preference]
    }

    fn finalized(&self) -> bool {
        self.snowflake.finalized()
    }

    fn nature(&self) -> Nature {
        self.snowflake.nature()
    }
}

impl fmt::Display for BinarySnowball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SB(Preference = {}, NumSuccessfulPolls = {}, SF = {})",
            self.snowflake.choices()[self.preference],
            self.max_successful_polls(),
            self.snowflake
        )
    }
}
