use std::collections::HashSet;
use std::fmt;

use snow_ids::Id;
use tracing::{debug, trace};

use super::Streak;
use crate::consensus::{Nature, Snowflake};

/// Snowflake over an open set of choices.
///
/// Competitors are registered with [`Snowflake::add`] as the conflict set
/// grows, or implicitly the first time a poll names them. Registering a
/// choice never touches the streak, the preference or finality.
#[derive(Debug, Clone)]
pub struct NnarySnowflake {
    preference: Id,
    choices: HashSet<Id>,
    streak: Streak,
}

impl NnarySnowflake {
    /// Creates a virtuous instance preferring `choice`.
    pub fn new(beta_virtuous: usize, beta_rogue: usize, choice: Id) -> Self {
        Self {
            preference: choice,
            choices: HashSet::from([choice]),
            streak: Streak::new(beta_virtuous, beta_rogue, Nature::Virtuous),
        }
    }

    /// Fixes the conflict nature, and with it the applicable beta.
    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.streak.set_nature(nature);
        self
    }

    /// Returns every choice this instance has seen.
    pub fn choices(&self) -> &HashSet<Id> {
        &self.choices
    }

    /// Returns the beta this instance finalizes at.
    pub fn beta(&self) -> usize {
        self.streak.beta()
    }
}

impl Snowflake for NnarySnowflake {
    fn add(&mut self, choice: Id) {
        if self.streak.finalized() {
            return;
        }
        self.choices.insert(choice);
    }

    fn record_successful_poll(&mut self, choice: Id) {
        if self.streak.finalized() {
            return;
        }

        let extends = choice == self.preference;
        if !extends {
            trace!(from = %self.preference, to = %choice, "snowflake switched preference");
            self.choices.insert(choice);
            self.preference = choice;
        }
        if self.streak.succeed(extends) {
            debug!(
                %choice,
                confidence = self.streak.confidence(),
                nature = %self.streak.nature(),
                "snowflake finalized"
            );
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
        self.preference
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

impl fmt::Display for NnarySnowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SF(Preference = {}, Confidence = {}, Finalized = {})",
            self.preference,
            self.streak.confidence(),
            self.streak.finalized()
        )
    }
}
