//! secp256k1 public key point.
//!
//! Supports SEC1 compressed/uncompressed serialization, Hash160
//! fingerprints, and the point tweak-add used by public child derivation.

use std::fmt;

use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, ProjectivePoint, Scalar};

use crate::hash::hash160;
use crate::PrimitivesError;

/// Length of a compressed SEC1 public key (tag + x-coordinate).
const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed SEC1 public key (tag + x + y).
const UNCOMPRESSED_LEN: usize = 65;

/// A point on secp256k1, guaranteed on-curve and not the identity.
#[derive(Clone, Debug)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse a SEC1-encoded point (33-byte compressed or 65-byte uncompressed).
    ///
    /// Off-curve or identity encodings fail with `InvalidPoint`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        match bytes.len() {
            COMPRESSED_LEN | UNCOMPRESSED_LEN => {}
            n => {
                return Err(PrimitivesError::InvalidPoint(format!(
                    "expected {} or {} bytes, got {}",
                    COMPRESSED_LEN, UNCOMPRESSED_LEN, n
                )))
            }
        }
        let inner = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPoint(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    /// Parse a hex-encoded SEC1 point.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize in compressed SEC1 form: 0x02/0x03 tag plus x-coordinate.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize in uncompressed SEC1 form: 0x04 tag plus x and y coordinates.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Compressed encoding as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// First four bytes of Hash160 of the compressed encoding.
    ///
    /// Identifies this key as a parent in extended key metadata.
    pub fn fingerprint(&self) -> [u8; 4] {
        let digest = hash160(&self.to_compressed());
        let mut out = [0u8; 4];
        out.copy_from_slice(&digest[..4]);
        out
    }

    /// Add `tweak * G` to this point.
    ///
    /// Returns `Ok(None)` when the tweak encodes a value at or above the
    /// curve order, or when the resulting point is the identity; either way
    /// the caller must fall through to the next child index.
    pub fn tweak_add(&self, tweak: &[u8; 32]) -> Result<Option<PublicKey>, PrimitivesError> {
        let tweak_scalar: Option<Scalar> =
            Scalar::from_repr(FieldBytes::from(*tweak)).into();
        let Some(tweak_scalar) = tweak_scalar else {
            return Ok(None);
        };
        let sum = ProjectivePoint::GENERATOR * tweak_scalar + self.to_projective_point();
        if sum == ProjectivePoint::IDENTITY {
            return Ok(None);
        }
        let inner = VerifyingKey::from_affine(sum.to_affine())
            .map_err(|e| PrimitivesError::InvalidPoint(e.to_string()))?;
        Ok(Some(PublicKey { inner }))
    }

    /// Wrap a k256 verifying key.
    pub(crate) fn from_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }

    /// The k256 projective representation, for group arithmetic.
    fn to_projective_point(&self) -> ProjectivePoint {
        ProjectivePoint::from(*self.inner.as_affine())
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
