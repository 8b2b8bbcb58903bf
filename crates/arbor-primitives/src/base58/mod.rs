//! Base58 and Base58Check encoding.
//!
//! Base58Check appends a 4-byte double-SHA-256 checksum before encoding and
//! is the interchange format for serialized extended keys.

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Number of checksum bytes appended by Base58Check.
const CHECKSUM_LEN: usize = 4;

/// Encode a byte slice as Base58 using Bitcoin's alphabet.
///
/// Leading zero bytes encode as leading '1' characters.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string into bytes.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

/// Base58Check-encode a payload.
///
/// The checksum is the first 4 bytes of SHA-256d(payload), appended before
/// Base58 encoding.
pub fn check_encode(payload: &[u8]) -> String {
    let checksum = sha256d(payload);
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&data)
}

/// Decode a Base58Check string, stripping and verifying the checksum.
///
/// Returns the payload without the trailing checksum bytes.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(PrimitivesError::InvalidBase58(
            "data too short for checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = sha256d(payload);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
