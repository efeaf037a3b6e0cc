//! Error types for consensus.
//!
//! Recording polls never fails. Errors only arise at the boundary where
//! thresholds are accepted into the system.

use thiserror::Error;

/// Result type for consensus operations.
pub type Result<T> = std::result::Result<T, ConsensusError>;

/// Errors that can occur while setting up consensus.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    /// Invalid consensus parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}
