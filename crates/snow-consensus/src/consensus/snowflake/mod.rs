//! Snowflake: finality from consecutive successful polls.

mod binary;
mod nnary;
mod unary;

pub use binary::BinarySnowflake;
pub use nnary::NnarySnowflake;
pub use unary::UnarySnowflake;

use super::Nature;

/// Streak bookkeeping shared by every snowflake shape.
#[derive(Debug, Clone)]
pub(crate) struct Streak {
    beta_virtuous: usize,
    beta_rogue: usize,
    nature: Nature,
    confidence: usize,
    finalized: bool,
}

impl Streak {
    pub(crate) fn new(beta_virtuous: usize, beta_rogue: usize, nature: Nature) -> Self {
        Self {
            beta_virtuous,
            beta_rogue,
            nature,
            confidence: 0,
            finalized: false,
        }
    }

    pub(crate) fn beta(&self) -> usize {
        self.nature.beta(self.beta_virtuous, self.beta_rogue)
    }

    /// Extends the streak, or restarts it at one when `extends` is false.
    /// Returns true if this success finalized the instance.
    pub(crate) fn succeed(&mut self, extends: bool) -> bool {
        self.confidence = if extends { self.confidence + 1 } else { 1 };
        self.finalized = self.confidence >= self.beta();
        self.finalized
    }

    pub(crate) fn reset(&mut self) {
        self.confidence = 0;
    }

    pub(crate) fn confidence(&self) -> usize {
        self.confidence
    }

    pub(crate) fn finalized(&self) -> bool {
        self.finalized
    }

    pub(crate) fn nature(&self) -> Nature {
        self.nature
    }

    pub(crate) fn set_nature(&mut self, nature: Nature) {
        self.nature = nature;
    }
}
