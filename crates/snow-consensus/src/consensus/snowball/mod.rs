//! Snowball: preference from cumulative successful polls.
//!
//! Every shape owns the snowflake of the same shape and defers to it for
//! finality. Once that snowflake finalizes, its choice is the reported
//! preference even if another choice has the larger total: only the streak
//! proves the decision safe.

mod binary;
mod nnary;
mod unary;

pub use binary::BinarySnowball;
pub use nnary::NnarySnowball;
pub use unary::UnarySnowball;
