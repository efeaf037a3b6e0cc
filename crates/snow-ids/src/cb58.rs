//! CB58: Base58 with a trailing 4-byte SHA-256 checksum.

use thiserror::Error;

use crate::hashing::checksum;

const CHECKSUM_LEN: usize = 4;

/// Errors produced while decoding CB58 text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Cb58Error {
    /// The text is not valid Base58.
    #[error("base58 decoding error: {0}")]
    Base58Decoding(String),

    /// The decoded payload is shorter than the checksum.
    #[error("input string is smaller than the checksum size")]
    MissingChecksum,

    /// The trailing checksum does not match the payload.
    #[error("invalid checksum")]
    BadChecksum,
}

/// Encodes `bytes` as CB58.
///
/// ```
/// use snow_ids::{decode_cb58, encode_cb58};
///
/// let text = encode_cb58(&[7, 7, 7]);
/// assert_eq!(decode_cb58(&text).unwrap(), vec![7, 7, 7]);
/// ```
#[must_use]
pub fn encode_cb58(bytes: &[u8]) -> String {
    let mut checked = Vec::with_capacity(bytes.len() + CHECKSUM_LEN);
    checked.extend_from_slice(bytes);
    checked.extend_from_slice(&checksum(bytes, CHECKSUM_LEN));
    bs58::encode(checked).into_string()
}

/// Decodes CB58 text, verifying and stripping the checksum.
///
/// # Errors
///
/// Returns a [`Cb58Error`] if the text is not Base58, is too short to carry a
/// checksum, or carries a checksum that does not match.
pub fn decode_cb58(s: &str) -> Result<Vec<u8>, Cb58Error> {
    let decoded = bs58::decode(s)
        .into_vec()
        .map_err(|e| Cb58Error::Base58Decoding(e.to_string()))?;

    if decoded.len() < CHECKSUM_LEN {
        return Err(Cb58Error::MissingChecksum);
    }

    let (payload, sum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum(payload, CHECKSUM_LEN) != sum {
        return Err(Cb58Error::BadChecksum);
    }

    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload() {
        let encoded = encode_cb58(&[]);
        assert_eq!(decode_cb58(&encoded).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_missing_checksum() {
        // "1" decodes to a single zero byte.
        assert_eq!(decode_cb58("1"), Err(Cb58Error::MissingChecksum));
    }

    #[test]
    fn test_bad_checksum() {
        let mut raw = bs58::decode(encode_cb58(&[1, 2, 3, 4])).into_vec().unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0xff;
        let tampered = bs58::encode(raw).into_string();
        assert_eq!(decode_cb58(&tampered), Err(Cb58Error::BadChecksum));
    }

    #[test]
    fn test_invalid_alphabet() {
        // '0' is not part of the Base58 alphabet.
        assert!(matches!(
            decode_cb58("0OIl"),
            Err(Cb58Error::Base58Decoding(_))
        ));
    }
}
