//! Choice identifiers for snow consensus.
//!
//! Every candidate value a consensus instance can decide on is named by an
//! [`Id`]: a 32-byte content hash. The engine only compares and hashes ids,
//! it never looks inside them.
//!
//! Ids render as CB58 (Base58 with a 4-byte checksum) so they read the same
//! in logs as they do on the wire.

mod cb58;
mod hashing;
mod id;

pub use cb58::{decode_cb58, encode_cb58, Cb58Error};
pub use hashing::{compute_hash256, Hash256};
pub use id::{Id, IdError};

/// Length of an [`Id`] in bytes.
pub const ID_LEN: usize = 32;
