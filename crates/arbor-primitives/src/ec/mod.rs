//! secp256k1 elliptic curve primitives.
//!
//! Thin wrappers around k256 providing exactly the group operations the
//! HD derivation engine needs: validated scalar parsing, scalar and point
//! tweak addition, and SEC1 (de)compression.

pub mod private_key;
pub mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
