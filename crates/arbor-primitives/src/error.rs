/// Unified error type for all primitives operations.
///
/// Covers errors from hashing, EC key handling, encoding, and the mnemonic codec.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid scalar: {0}")]
    InvalidScalar(String),

    #[error("invalid curve point: {0}")]
    InvalidPoint(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid entropy length: {0} bytes")]
    InvalidEntropyLength(usize),

    #[error("invalid word count: {0}")]
    InvalidWordCount(usize),

    #[error("unknown word: {0:?}")]
    UnknownWord(String),

    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
