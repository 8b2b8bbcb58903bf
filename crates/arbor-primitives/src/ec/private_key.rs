//! secp256k1 private key scalar.
//!
//! Wraps a k256 signing key and adds the tweak-add operation used by
//! hierarchical child key derivation.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, NonZeroScalar, Scalar};

use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// Length of a serialized private key scalar in bytes.
const SCALAR_LEN: usize = 32;

/// A secp256k1 private key scalar in `[1, n-1]`.
///
/// The scalar is wiped from memory when the value is dropped.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Create a private key from a raw 32-byte big-endian scalar.
    ///
    /// Fails with `InvalidScalar` if the value is zero or not below the
    /// curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != SCALAR_LEN {
            return Err(PrimitivesError::InvalidScalar(format!(
                "expected {} bytes, got {}",
                SCALAR_LEN,
                bytes.len()
            )));
        }
        let inner = SigningKey::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidScalar(e.to_string()))?;
        Ok(PrivateKey { inner })
    }

    /// Create a private key from a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the scalar as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the scalar as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// The public key corresponding to this scalar.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.inner.verifying_key())
    }

    /// Add a 32-byte tweak to this scalar modulo the curve order.
    ///
    /// Returns `Ok(None)` when the tweak encodes a value at or above the
    /// curve order, or when the sum is zero. Both are the invalid-candidate
    /// conditions that make a child derivation step fall through to the
    /// next index.
    pub fn tweak_add(&self, tweak: &[u8; 32]) -> Result<Option<PrivateKey>, PrimitivesError> {
        let tweak_scalar: Option<Scalar> =
            Scalar::from_repr(FieldBytes::from(*tweak)).into();
        let Some(tweak_scalar) = tweak_scalar else {
            return Ok(None);
        };
        let sum = tweak_scalar + self.to_scalar();
        let nonzero: Option<NonZeroScalar> = NonZeroScalar::new(sum).into();
        Ok(nonzero.map(|scalar| PrivateKey { inner: SigningKey::from(scalar) }))
    }

    /// The k256 scalar representation, for group arithmetic.
    pub(crate) fn to_scalar(&self) -> Scalar {
        *self.inner.as_nonzero_scalar().as_ref()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        let mut bytes = self.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_MINUS_ONE: &str =
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140";

    fn scalar_bytes(k: u8) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[31] = k;
        bytes
    }

    #[test]
    fn test_rejects_zero_and_overflow() {
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
        assert!(PrivateKey::from_bytes(&[0xff; 32]).is_err());
        assert!(PrivateKey::from_bytes(&[1u8; 31]).is_err());
        assert!(PrivateKey::from_hex(ORDER_MINUS_ONE).is_ok());
    }

    #[test]
    fn test_scalar_one_yields_generator() {
        let key = PrivateKey::from_bytes(&scalar_bytes(1)).unwrap();
        assert_eq!(
            key.public_key().to_hex(),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn test_tweak_add() {
        let key = PrivateKey::from_bytes(&scalar_bytes(1)).unwrap();
        let child = key.tweak_add(&scalar_bytes(1)).unwrap().unwrap();
        assert_eq!(child.to_bytes(), scalar_bytes(2));
    }

    #[test]
    fn test_tweak_add_overflow_is_invalid() {
        let key = PrivateKey::from_bytes(&scalar_bytes(1)).unwrap();
        // Tweak encodes a value >= curve order
        assert!(key.tweak_add(&[0xff; 32]).unwrap().is_none());
    }

    #[test]
    fn test_tweak_add_zero_sum_is_invalid() {
        let key = PrivateKey::from_hex(ORDER_MINUS_ONE).unwrap();
        // (n - 1) + 1 == 0 mod n
        assert!(key.tweak_add(&scalar_bytes(1)).unwrap().is_none());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let key = PrivateKey::from_bytes(&scalar_bytes(42)).unwrap();
        let restored = PrivateKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(key, restored);
    }
}
