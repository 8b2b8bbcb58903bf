//! Chain-specific address derivation from public keys.
//!
//! Only the Ethereum convention is implemented; other chains plug in
//! through the same [`AddressScheme`] seam.

use arbor_primitives::ec::PublicKey;
use arbor_primitives::hash::keccak256;

use crate::WalletError;

/// Derives a chain-specific address string from a public key.
pub trait AddressScheme {
    /// Encode the public key as an address for this chain.
    fn derive_address(&self, key: &PublicKey) -> String;
}

/// The Ethereum address convention.
///
/// Keccak-256 over the uncompressed point without its 0x04 tag; the last
/// 20 bytes of the digest, hex encoded with a `0x` prefix.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ethereum;

impl AddressScheme for Ethereum {
    fn derive_address(&self, key: &PublicKey) -> String {
        let uncompressed = key.to_uncompressed();
        let digest = keccak256(&uncompressed[1..]);
        format!("0x{}", hex::encode(&digest[12..]))
    }
}

/// Re-encode an Ethereum address with the EIP-55 mixed-case checksum.
///
/// Accepts the address with or without its `0x` prefix, in any case.
pub fn to_checksum_address(address: &str) -> Result<String, WalletError> {
    let hex_part = address.strip_prefix("0x").unwrap_or(address).to_lowercase();
    if hex_part.len() != 40 || !hex_part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(WalletError::InvalidArgument(format!(
            "not a 20-byte hex address: {address:?}"
        )));
    }

    let digest = keccak256(hex_part.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in hex_part.chars().enumerate() {
        let nibble = if i % 2 == 0 { digest[i / 2] >> 4 } else { digest[i / 2] & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    Ok(out)
}
