/// Arbor SDK - Hierarchical-deterministic key derivation.
///
/// Implements the HD wallet derivation engine: master key construction
/// from a seed, hardened and normal child key derivation, derivation path
/// parsing, Base58Check extended key serialization, and chain address
/// derivation from derived public keys.

mod error;
pub use error::WalletError;

pub mod address;
pub mod child_number;
pub mod extended_key;
pub mod network;
pub mod path;
pub mod serializer;

pub use address::{AddressScheme, Ethereum};
pub use child_number::{ChildNumber, HARDENED_OFFSET};
pub use extended_key::{ExtendedKey, ExtendedKeyAttrs, KeyMaterial};
pub use network::Network;
pub use path::DerivationPath;
