#![deny(missing_docs)]

//! Arbor HD Wallet SDK - Complete SDK.
//!
//! Re-exports all Arbor SDK components for convenient single-crate usage.

pub use arbor_primitives as primitives;
pub use arbor_wallet as wallet;
