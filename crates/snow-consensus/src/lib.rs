//! Snow consensus decision instances.
//!
//! This crate provides the local decision primitive of the Snow family of
//! consensus protocols. A caller samples peers, reduces their responses to a
//! single poll outcome and feeds it to an instance; the instance reports the
//! node's current preference and whether the decision is final.
//!
//! # Architecture
//!
//! - **Snowflake**: finalizes on a streak of consecutive successful polls
//! - **Snowball**: wraps a Snowflake and prefers the choice with the most
//!   successful polls overall
//! - **Flat**: drives an n-ary Snowball from raw vote bags using `alpha`
//!
//! Each of Snowflake and Snowball comes in three shapes: unary (no
//! competitor), binary (exactly two choices) and n-ary (an open set).
//!
//! # Example
//!
//! ```
//! use snow_consensus::{Nature, NnarySnowball, Snowball};
//! use snow_ids::Id;
//!
//! let red = Id::from_hash(b"red");
//! let blue = Id::from_hash(b"blue");
//!
//! // Two live choices: the decision is rogue and needs three in a row.
//! let mut sb = NnarySnowball::new(2, 3, red).with_nature(Nature::Rogue);
//! sb.add(blue);
//! sb.record_successful_poll(blue);
//! sb.record_successful_poll(blue);
//! assert!(!sb.finalized());
//!
//! sb.record_successful_poll(blue);
//! assert!(sb.finalized());
//! assert_eq!(sb.preference(), blue);
//! ```

mod consensus;
mod error;
mod parameters;

pub use consensus::{
    bag::Bag,
    flat::Flat,
    snowball::{BinarySnowball, NnarySnowball, UnarySnowball},
    snowflake::{BinarySnowflake, NnarySnowflake, UnarySnowflake},
    Nature, Snowball, Snowflake,
};
pub use error::{ConsensusError, Result};
pub use parameters::Parameters;
