//! SHA-256 helpers backing id derivation and CB58 checksums.

use sha2::{Digest, Sha256};

/// A 256-bit hash value.
pub type Hash256 = [u8; 32];

/// Computes the SHA-256 digest of `data`.
///
/// ```
/// use snow_ids::compute_hash256;
///
/// assert_eq!(compute_hash256(b"choice").len(), 32);
/// ```
#[must_use]
pub fn compute_hash256(data: &[u8]) -> Hash256 {
    Sha256::digest(data).into()
}

/// Returns the trailing `length` bytes of the SHA-256 digest of `data`.
///
/// # Panics
///
/// Panics if `length` is greater than 32.
#[must_use]
pub(crate) fn checksum(data: &[u8], length: usize) -> Vec<u8> {
    assert!(length <= 32, "checksum length must be <= 32");
    let hash = compute_hash256(data);
    hash[32 - length..].to_vec()
}
