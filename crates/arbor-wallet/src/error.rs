/// Error types for extended key and address operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("primitives error: {0}")]
    Primitives(#[from] arbor_primitives::PrimitivesError),

    #[error("invalid seed length: {0} bytes")]
    InvalidSeedLength(usize),

    #[error("seed produced an invalid master key")]
    InvalidMasterKey,

    #[error("hardened derivation requires a private parent key")]
    HardenedFromPublic,

    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("version mismatch: {0}")]
    VersionMismatch(String),

    #[error("malformed extended key: {0}")]
    MalformedExtendedKey(String),

    #[error("child index space exhausted while skipping invalid keys")]
    ChildIndexExhausted,

    #[error("derivation depth exceeds 255")]
    DepthExceeded,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
