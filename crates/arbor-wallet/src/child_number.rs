//! Child derivation indices.

use std::fmt;

use crate::WalletError;

/// Index values at or above this bit denote hardened derivation.
pub const HARDENED_OFFSET: u32 = 1 << 31;

/// A 32-bit child derivation index.
///
/// The raw value carries the hardened bit: indices at or above `2^31`
/// derive hardened children, indices below derive normal children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChildNumber(u32);

impl ChildNumber {
    /// Build a child number from an index literal and a hardened flag.
    ///
    /// The literal must be below `2^31`; combining a larger literal with
    /// the hardened flag would overflow the index space.
    pub fn new(index: u32, hardened: bool) -> Result<Self, WalletError> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::InvalidPath(format!(
                "index {index} out of range (must be below 2^31)"
            )));
        }
        Ok(ChildNumber(if hardened { index | HARDENED_OFFSET } else { index }))
    }

    /// Wrap a raw 32-bit index, hardened bit included.
    pub fn from_raw(raw: u32) -> Self {
        ChildNumber(raw)
    }

    /// The raw 32-bit value, hardened bit included.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// The index literal without the hardened bit.
    pub fn index(&self) -> u32 {
        self.0 & !HARDENED_OFFSET
    }

    /// Whether this index derives a hardened child.
    pub fn is_hardened(&self) -> bool {
        self.0 & HARDENED_OFFSET != 0
    }

    /// Big-endian byte encoding, as mixed into the derivation HMAC and the
    /// serialized extended key.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// The next index within the same hardened class, if any.
    ///
    /// Used when an invalid candidate key forces a derivation step to fall
    /// through to the following index; escalation never crosses between
    /// normal and hardened index spaces.
    pub fn next(&self) -> Option<ChildNumber> {
        let raw = self.0.checked_add(1)?;
        if raw & HARDENED_OFFSET != self.0 & HARDENED_OFFSET {
            return None;
        }
        Some(ChildNumber(raw))
    }
}

impl fmt::Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;
        if self.is_hardened() {
            f.write_str("'")?;
        }
        Ok(())
    }
}
