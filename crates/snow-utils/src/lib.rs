//! Ambient utilities for snow consensus.
//!
//! - [`logging`]: tracing-subscriber setup driven by a [`LogConfig`]

pub mod logging;

pub use logging::{LogConfig, LogError, LogLevel, RotationInterval};
