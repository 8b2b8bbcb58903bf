//! Base58Check serialization of extended keys.
//!
//! The 78-byte layout is the interoperability boundary with other wallet
//! software and must round-trip byte for byte:
//!
//! `version(4) | depth(1) | parent_fingerprint(4) | child_number(4, BE) |
//!  chain_code(32) | key_data(33)`
//!
//! `key_data` is `0x00 || scalar` for private keys and the compressed
//! point for public keys. The whole layout is Base58Check encoded.

use zeroize::Zeroize;

use arbor_primitives::base58;
use arbor_primitives::ec::{PrivateKey, PublicKey};

use crate::extended_key::{ExtendedKey, ExtendedKeyAttrs, KeyMaterial};
use crate::{ChildNumber, Network, WalletError};

/// Length of a serialized extended key before the Base58Check checksum.
pub const EXTENDED_KEY_LEN: usize = 78;

/// Encode an extended key as a Base58Check string.
///
/// The network profile supplies the version bytes; the key material variant
/// selects between the private and public version.
pub fn serialize(key: &ExtendedKey, network: Network) -> String {
    let attrs = key.attrs();
    let mut bytes = [0u8; EXTENDED_KEY_LEN];
    bytes[..4].copy_from_slice(&match key.key_material() {
        KeyMaterial::Private(_) => network.private_version(),
        KeyMaterial::Public(_) => network.public_version(),
    });
    bytes[4] = attrs.depth;
    bytes[5..9].copy_from_slice(&attrs.parent_fingerprint);
    bytes[9..13].copy_from_slice(&attrs.child_number.to_bytes());
    bytes[13..45].copy_from_slice(&attrs.chain_code);
    match key.key_material() {
        KeyMaterial::Private(sk) => {
            bytes[45] = 0x00;
            bytes[46..78].copy_from_slice(&sk.to_bytes());
        }
        KeyMaterial::Public(pk) => bytes[45..78].copy_from_slice(&pk.to_compressed()),
    }

    let encoded = base58::check_encode(&bytes);
    bytes.zeroize();
    encoded
}

/// Decode a Base58Check extended key string.
///
/// Verifies the checksum (`ChecksumMismatch`), the exact 78-byte length
/// (`MalformedExtendedKey`), the version bytes against the given network
/// profile (`VersionMismatch`), and re-validates the key material.
pub fn deserialize(encoded: &str, network: Network) -> Result<ExtendedKey, WalletError> {
    let mut bytes = base58::check_decode(encoded)?;
    if bytes.len() != EXTENDED_KEY_LEN {
        bytes.zeroize();
        return Err(WalletError::MalformedExtendedKey(format!(
            "expected {} bytes, got {}",
            EXTENDED_KEY_LEN,
            bytes.len()
        )));
    }

    let result = parse_payload(&bytes, network);
    bytes.zeroize();
    result
}

fn parse_payload(bytes: &[u8], network: Network) -> Result<ExtendedKey, WalletError> {
    let version: [u8; 4] = bytes[..4].try_into().expect("length checked");
    let is_private = if version == network.private_version() {
        true
    } else if version == network.public_version() {
        false
    } else {
        return Err(WalletError::VersionMismatch(format!(
            "{} does not belong to {:?}",
            hex::encode(version),
            network
        )));
    };

    let attrs = ExtendedKeyAttrs {
        depth: bytes[4],
        parent_fingerprint: bytes[5..9].try_into().expect("length checked"),
        child_number: ChildNumber::from_raw(u32::from_be_bytes(
            bytes[9..13].try_into().expect("length checked"),
        )),
        chain_code: bytes[13..45].try_into().expect("length checked"),
    };

    if attrs.depth == 0
        && (attrs.parent_fingerprint != [0u8; 4] || attrs.child_number != ChildNumber::default())
    {
        return Err(WalletError::MalformedExtendedKey(
            "root key with nonzero parent metadata".to_string(),
        ));
    }

    let key_data = &bytes[45..78];
    let key = if is_private {
        if key_data[0] != 0x00 {
            return Err(WalletError::MalformedExtendedKey(
                "private key data must begin with 0x00".to_string(),
            ));
        }
        KeyMaterial::Private(PrivateKey::from_bytes(&key_data[1..])?)
    } else {
        KeyMaterial::Public(PublicKey::from_bytes(key_data)?)
    };

    Ok(ExtendedKey::from_parts(key, attrs))
}
