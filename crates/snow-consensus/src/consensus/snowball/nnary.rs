use std::collections::HashMap;
use std::fmt;

use snow_ids::Id;

use crate::consensus::snowflake::NnarySnowflake;
use crate::consensus::{Nature, Snowball, Snowflake};

/// Snowball over an open set of choices.
///
/// Totals are kept lazily: a choice needs no registration before it can
/// receive a successful poll, and an absent entry counts as zero.
#[derive(Debug, Clone)]
pub struct NnarySnowball {
    /// The choice with the most successful polls. Ties keep the current
    /// preference.
    preference: Id,
    max_successful_polls: usize,
    num_successful_polls: HashMap<Id, usize>,
    snowflake: NnarySnowflake,
}

impl NnarySnowball {
    /// Creates a virtuous instance preferring `choice`.
    pub fn new(beta_virtuous: usize, beta_rogue: usize, choice: Id) -> Self {
        Self {
            preference: choice,
            max_successful_polls: 0,
            num_successful_polls: HashMap::new(),
            snowflake: NnarySnowflake::new(beta_virtuous, beta_rogue, choice),
        }
    }

    /// Fixes the conflict nature of the embedded snowflake.
    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.snowflake = self.snowflake.with_nature(nature);
        self
    }

    /// Returns the embedded snowflake that decides finality.
    pub fn snowflake(&self) -> &NnarySnowflake {
        &self.snowflake
    }
}

impl Snowball for NnarySnowball {
    fn add(&mut self, choice: Id) {
        self.snowflake.add(choice);
    }

    fn record_successful_poll(&mut self, choice: Id) {
        if self.finalized() {
            return;
        }

        let total = self.num_successful_polls.entry(choice).or_insert(0);
        *total += 1;
        if *total > self.max_successful_polls {
            self.preference = choice;
            self.max_successful_polls = *total;
        }

        self.snowflake.record_successful_poll(choice);
    }

    fn record_unsuccessful_poll(&mut self) {
        self.snowflake.record_unsuccessful_poll();
    }

    fn preference(&self) -> Id {
        // Totals and the streak can disagree in rare cases. Once the streak
        // has finalized its choice is the one that was proven.
        if self.finalized() {
            return self.snowflake.preference();
        }
        self.preference
    }

    fn num_successful_polls(&self, choice: &Id) -> usize {
        self.num_successful_polls.get(choice).copied().unwrap_or(0)
    }

    fn max_successful_polls(&self) -> usize {
        self.max_successful_polls
    }

    fn finalized(&self) -> bool {
        self.snowflake.finalized()
    }

    fn nature(&self) -> Nature {
        self.snowflake.nature()
    }
}

impl fmt::Display for NnarySnowball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SB(Preference = {}, NumSuccessfulPolls = {}, SF = {})",
            self.preference, self.max_successful_polls, self.snowflake
        )
    }
}
