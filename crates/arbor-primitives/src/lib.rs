/// Arbor SDK - Cryptographic primitives for hierarchical-deterministic wallets.
///
/// This crate provides the foundational building blocks for the Arbor SDK:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, HMAC-SHA512, PBKDF2, Keccak-256)
/// - Base58 and Base58Check encoding/decoding
/// - Elliptic curve cryptography (secp256k1 private/public key wrappers)
/// - BIP-39 mnemonic codec (entropy <-> phrase <-> seed)

pub mod hash;
pub mod base58;
pub mod ec;
pub mod mnemonic;

mod error;
pub use error::PrimitivesError;
