//! Extended keys and hierarchical child key derivation.
//!
//! An extended key pairs key material with a 32-byte chain code and tree
//! position metadata, so any descendant can be derived on demand. Keys are
//! immutable value objects: deriving a child never touches the parent, and
//! the conceptual tree is infinite with nothing cached.

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use arbor_primitives::ec::{PrivateKey, PublicKey};
use arbor_primitives::hash::sha512_hmac;

use crate::path::DerivationPath;
use crate::{ChildNumber, WalletError};

/// HMAC key for master key construction.
const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Seed length bounds in bytes (128 to 512 bits).
const SEED_LEN_RANGE: std::ops::RangeInclusive<usize> = 16..=64;

/// Key material held by an extended key.
///
/// The variant is part of the type: hardened derivation from a
/// `Public`-only key is rejected up front rather than discovered through a
/// runtime assertion deep in the math.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// A private scalar; can produce the public side and any child.
    Private(PrivateKey),
    /// A curve point only; can produce normal children, never hardened ones.
    Public(PublicKey),
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMaterial::Private(_) => f.write_str("Private([REDACTED])"),
            KeyMaterial::Public(pk) => write!(f, "Public({pk})"),
        }
    }
}

/// Tree position metadata shared by private and public extended keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedKeyAttrs {
    /// Number of derivation steps from the root.
    pub depth: u8,

    /// First four bytes of Hash160 of the parent public key; zero for the
    /// root.
    pub parent_fingerprint: [u8; 4],

    /// Index this key was requested under from its parent.
    pub child_number: ChildNumber,

    /// Auxiliary entropy mixed into every child derivation from this node.
    pub chain_code: [u8; 32],
}

/// An extended private or public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedKey {
    key: KeyMaterial,
    attrs: ExtendedKeyAttrs,
}

impl ExtendedKey {
    /// Derive the master extended key from a seed.
    ///
    /// The seed must be 16..=64 bytes (`InvalidSeedLength` otherwise).
    /// `HMAC-SHA512("Bitcoin seed", seed)` splits into the master scalar
    /// (left half, must land in `[1, n-1]`, else `InvalidMasterKey`) and
    /// the chain code (right half).
    pub fn master_from_seed(seed: &[u8]) -> Result<Self, WalletError> {
        if !SEED_LEN_RANGE.contains(&seed.len()) {
            return Err(WalletError::InvalidSeedLength(seed.len()));
        }

        let mut digest = sha512_hmac(MASTER_HMAC_KEY, seed);
        let (secret, chain_code) = digest.split_at(32);
        let private_key =
            PrivateKey::from_bytes(secret).map_err(|_| WalletError::InvalidMasterKey)?;
        let attrs = ExtendedKeyAttrs {
            depth: 0,
            parent_fingerprint: [0u8; 4],
            child_number: ChildNumber::default(),
            chain_code: chain_code.try_into().expect("split yields 32 bytes"),
        };
        digest.zeroize();

        Ok(ExtendedKey { key: KeyMaterial::Private(private_key), attrs })
    }

    /// Assemble an extended key from parts, e.g. when deserializing.
    pub fn from_parts(key: KeyMaterial, attrs: ExtendedKeyAttrs) -> Self {
        ExtendedKey { key, attrs }
    }

    /// Derive the child key at the given index.
    ///
    /// Hardened indices require private key material
    /// (`HardenedFromPublic` otherwise). When a candidate child scalar or
    /// point is invalid, the step is recomputed once per failure with the
    /// next index in the HMAC message; the stored child number remains the
    /// index that was requested.
    pub fn derive_child(&self, child: ChildNumber) -> Result<ExtendedKey, WalletError> {
        self.derive_child_at(child, child)
    }

    fn derive_child_at(
        &self,
        child: ChildNumber,
        hmac_index: ChildNumber,
    ) -> Result<ExtendedKey, WalletError> {
        let depth = self.attrs.depth.checked_add(1).ok_or(WalletError::DepthExceeded)?;

        let mut message = Zeroizing::new(Vec::with_capacity(37));
        match (&self.key, child.is_hardened()) {
            (KeyMaterial::Public(_), true) => return Err(WalletError::HardenedFromPublic),
            (KeyMaterial::Private(sk), true) => {
                message.push(0x00);
                message.extend_from_slice(&sk.to_bytes());
            }
            (_, false) => {
                message.extend_from_slice(&self.public_key().to_compressed());
            }
        }
        message.extend_from_slice(&hmac_index.to_bytes());

        let mut digest = sha512_hmac(&self.attrs.chain_code, &message);
        let (left, chain_code) = digest.split_at(32);
        let tweak: [u8; 32] = left.try_into().expect("split yields 32 bytes");

        let candidate = match &self.key {
            KeyMaterial::Private(sk) => sk.tweak_add(&tweak)?.map(KeyMaterial::Private),
            KeyMaterial::Public(pk) => pk.tweak_add(&tweak)?.map(KeyMaterial::Public),
        };

        let result = match candidate {
            Some(key) => {
                let attrs = ExtendedKeyAttrs {
                    depth,
                    parent_fingerprint: self.fingerprint(),
                    child_number: child,
                    chain_code: chain_code.try_into().expect("split yields 32 bytes"),
                };
                Ok(ExtendedKey { key, attrs })
            }
            // Invalid candidate: recompute with the next index in the HMAC
            // message only. The requested child number is kept.
            None => {
                let next = hmac_index.next().ok_or(WalletError::ChildIndexExhausted)?;
                self.derive_child_at(child, next)
            }
        };
        digest.zeroize();
        result
    }

    /// Walk a derivation path from this key, failing on the first bad step.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<ExtendedKey, WalletError> {
        path.iter().try_fold(self.clone(), |key, child| key.derive_child(child))
    }

    /// Strip the private material, keeping only the public point.
    ///
    /// Irreversible; hardened descendants become underivable.
    pub fn neuter(&self) -> ExtendedKey {
        ExtendedKey {
            key: KeyMaterial::Public(self.public_key()),
            attrs: self.attrs.clone(),
        }
    }

    /// The public key for this node, for either key material variant.
    pub fn public_key(&self) -> PublicKey {
        match &self.key {
            KeyMaterial::Private(sk) => sk.public_key(),
            KeyMaterial::Public(pk) => pk.clone(),
        }
    }

    /// The private scalar, when this is a private extended key.
    pub fn private_key(&self) -> Option<&PrivateKey> {
        match &self.key {
            KeyMaterial::Private(sk) => Some(sk),
            KeyMaterial::Public(_) => None,
        }
    }

    /// Whether this key holds private material.
    pub fn is_private(&self) -> bool {
        matches!(self.key, KeyMaterial::Private(_))
    }

    /// Fingerprint of this node's public key.
    pub fn fingerprint(&self) -> [u8; 4] {
        self.public_key().fingerprint()
    }

    /// Tree position metadata.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// The key material variant.
    pub fn key_material(&self) -> &KeyMaterial {
        &self.key
    }
}
