//! Network version-byte profiles for extended key serialization.
//!
//! A profile only selects the four version bytes written in front of a
//! serialized extended key; it never affects the derivation math. Profiles
//! are plain values passed into serialize/deserialize calls, not global
//! state.

/// Serialization version-byte profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Network {
    /// `xprv`/`xpub` version bytes.
    #[default]
    Mainnet,
    /// `tprv`/`tpub` version bytes.
    Testnet,
}

impl Network {
    /// Version bytes for a private extended key on this network.
    pub const fn private_version(&self) -> [u8; 4] {
        match self {
            Network::Mainnet => [0x04, 0x88, 0xad, 0xe4],
            Network::Testnet => [0x04, 0x35, 0x83, 0x94],
        }
    }

    /// Version bytes for a public extended key on this network.
    pub const fn public_version(&self) -> [u8; 4] {
        match self {
            Network::Mainnet => [0x04, 0x88, 0xb2, 0x1e],
            Network::Testnet => [0x04, 0x35, 0x87, 0xcf],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bytes_are_distinct() {
        let versions = [
            Network::Mainnet.private_version(),
            Network::Mainnet.public_version(),
            Network::Testnet.private_version(),
            Network::Testnet.public_version(),
        ];
        for (i, a) in versions.iter().enumerate() {
            for b in &versions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
