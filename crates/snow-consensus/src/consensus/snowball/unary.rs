use std::fmt;

use snow_ids::Id;

use crate::consensus::snowflake::UnarySnowflake;
use crate::consensus::{Nature, Snowball, Snowflake};

/// Snowball over a single value with no known conflicts.
#[derive(Debug, Clone)]
pub struct UnarySnowball {
    num_successful_polls: usize,
    snowflake: UnarySnowflake,
}

impl UnarySnowball {
    pub fn new(beta_virtuous: usize, beta_rogue: usize, choice: Id) -> Self {
        Self {
            num_successful_polls: 0,
            snowflake: UnarySnowflake::new(beta_virtuous, beta_rogue, choice),
        }
    }

    /// Fixes the conflict nature of the embedded snowflake.
    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.snowflake = self.snowflake.with_nature(nature);
        self
    }

    /// Returns the embedded snowflake that decides finality.
    pub fn snowflake(&self) -> &UnarySnowflake {
        &self.snowflake
    }
}

impl Snowball for UnarySnowball {
    fn record_successful_poll(&mut self, choice: Id) {
        if self.finalized() {
            return;
        }
        if choice == self.snowflake.preference() {
            self.num_successful_polls += 1;
        }
        self.snowflake.record_successful_poll(choice);
    }

    fn record_unsuccessful_poll(&mut self) {
        self.snowflake.record_unsuccessful_poll();
    }

    fn preference(&self) -> Id {
        self.snowflake.preference()
    }

    fn num_successful_polls(&self, choice: &Id) -> usize {
        if *choice == self.snowflake.preference() {
            self.num_successful_polls
        } else {
            0
        }
    }

    fn max_successful_polls(&self) -> usize {
        self.num_successful_polls
    }

    fn finalized(&self) -> bool {
        self.snowflake.finalized()
    }

    fn nature(&self) -> Nature {
        self.snowflake.nature()
    }
}

impl fmt::Display for UnarySnowball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SB(Preference = {}, NumSuccessfulPolls = {}, SF = {})",
            self.snowflake.preference(),
            self.num_successful_polls,
            self.snowflake
        )
    }
}
