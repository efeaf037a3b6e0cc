//! Consensus parameters.

use serde::{Deserialize, Serialize};

/// Parameters for Snow consensus protocols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Sample size (k) - number of validators to poll
    pub k: usize,

    /// Quorum size (alpha) - number of votes needed for a successful poll
    pub alpha: usize,

    /// Beta for virtuous decisions - consecutive successes needed
    pub beta_virtuous: usize,

    /// Beta for rogue decisions - consecutive successes needed when conflicting
    pub beta_rogue: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            k: 20,
            alpha: 15,
            beta_virtuous: 15,
            beta_rogue: 20,
        }
    }
}

impl Parameters {
    /// Creates new parameters with the given values.
    pub fn new(k: usize, alpha: usize, beta_virtuous: usize, beta_rogue: usize) -> Self {
        Self {
            k,
            alpha,
            beta_virtuous,
            beta_rogue,
        }
    }

    /// Validates the parameters.
    ///
    /// `alpha` must be a strict majority of `k`, and rogue decisions may not
    /// finalize faster than virtuous ones.
    pub fn validate(&self) -> Result<(), String> {
        if self.k == 0 {
            return Err("k must be positive".to_string());
        }
        if self.alpha <= self.k / 2 {
            return Err(format!(
                "k = {}, alpha = {}: fails the condition that k/2 < alpha",
                self.k, self.alpha
            ));
        }
        if self.alpha > self.k {
            return Err(format!(
                "k = {}, alpha = {}: fails the condition that alpha <= k",
                self.k, self.alpha
            ));
        }
        if self.beta_virtuous == 0 {
            return Err("beta_virtuous must be positive".to_string());
        }
        if self.beta_rogue < self.beta_virtuous {
            return Err(format!(
                "beta_virtuous = {}, beta_rogue = {}: fails the condition that beta_virtuous <= beta_rogue",
                self.beta_virtuous, self.beta_rogue
            ));
        }
        Ok(())
    }
}
