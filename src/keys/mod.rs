//! Key types for signing and verification
//!
//! This module provides a type-safe abstraction over the key material each
//! algorithm family accepts:
//! - Shared secrets (for HMAC algorithms)
//! - RSA private keys (PKCS#8 DER) and public keys (PKCS#1 `RSAPublicKey` DER)
//! - ECDSA private keys (PKCS#8 DER) and public keys (SEC1 uncompressed point)
//!
//! Secret and private material is wiped from memory when the key is dropped.

use crate::algorithm::AlgorithmFamily;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(test)]
pub(crate) mod test_keys;

/// A key that can be used to sign or verify tokens
#[derive(Debug, Clone)]
pub enum Key {
    /// Shared secret for HMAC algorithms
    Secret(SecretBytes),

    /// RSA private key, PKCS#8 DER
    RsaPrivate(SecretBytes),

    /// RSA public key, PKCS#1 `RSAPublicKey` DER
    RsaPublic(Vec<u8>),

    /// ECDSA private key, PKCS#8 DER
    EcPrivate(SecretBytes),

    /// ECDSA public key, SEC1 uncompressed point (`0x04 || X || Y`)
    EcPublic(Vec<u8>),
}

impl Key {
    /// Create a shared secret for HMAC algorithms
    pub fn secret(secret: impl Into<Vec<u8>>) -> Self {
        Key::Secret(SecretBytes::new(secret.into()))
    }

    /// Create an RSA private key from PKCS#8 DER bytes
    pub fn rsa_private_pkcs8(der: impl Into<Vec<u8>>) -> Self {
        Key::RsaPrivate(SecretBytes::new(der.into()))
    }

    /// Create an RSA public key from PKCS#1 `RSAPublicKey` DER bytes
    pub fn rsa_public_der(der: impl Into<Vec<u8>>) -> Self {
        Key::RsaPublic(der.into())
    }

    /// Create an ECDSA private key from PKCS#8 DER bytes
    ///
    /// The curve is taken from the algorithm the key is used with; a key on
    /// another curve is rejected at signing time.
    pub fn ec_private_pkcs8(der: impl Into<Vec<u8>>) -> Self {
        Key::EcPrivate(SecretBytes::new(der.into()))
    }

    /// Create an ECDSA public key from an uncompressed SEC1 point
    pub fn ec_public_sec1(point: impl Into<Vec<u8>>) -> Self {
        Key::EcPublic(point.into())
    }

    /// Algorithm family this key belongs to
    pub fn family(&self) -> AlgorithmFamily {
        match self {
            Key::Secret(_) => AlgorithmFamily::Hmac,
            Key::RsaPrivate(_) | Key::RsaPublic(_) => AlgorithmFamily::Rsa,
            Key::EcPrivate(_) | Key::EcPublic(_) => AlgorithmFamily::Ecdsa,
        }
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Secret(_) => "HMAC secret",
            Key::RsaPrivate(_) => "RSA private",
            Key::RsaPublic(_) => "RSA public",
            Key::EcPrivate(_) => "ECDSA private",
            Key::EcPublic(_) => "ECDSA public",
        }
    }

    /// Whether this key can produce signatures
    pub fn can_sign(&self) -> bool {
        matches!(
            self,
            Key::Secret(_) | Key::RsaPrivate(_) | Key::EcPrivate(_)
        )
    }
}

impl From<&str> for Key {
    fn from(secret: &str) -> Self {
        Key::secret(secret.as_bytes())
    }
}

impl From<&[u8]> for Key {
    fn from(secret: &[u8]) -> Self {
        Key::secret(secret)
    }
}

/// Owned key bytes that are zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// Wrap raw key bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([REDACTED; {}])", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_conversions() {
        let Key::Secret(bytes) = Key::from("secret") else {
            panic!("expected secret key");
        };
        assert_eq!(bytes.as_bytes(), b"secret");

        let key = Key::from(&[1u8, 2, 3][..]);
        assert_eq!(key.family(), AlgorithmFamily::Hmac);
    }

    #[test]
    fn test_key_families() {
        assert_eq!(Key::secret(b"s".to_vec()).family(), AlgorithmFamily::Hmac);
        assert_eq!(Key::rsa_private_pkcs8(vec![1]).family(), AlgorithmFamily::Rsa);
        assert_eq!(Key::rsa_public_der(vec![1]).family(), AlgorithmFamily::Rsa);
        assert_eq!(Key::ec_private_pkcs8(vec![1]).family(), AlgorithmFamily::Ecdsa);
        assert_eq!(Key::ec_public_sec1(vec![4]).family(), AlgorithmFamily::Ecdsa);
    }

    #[test]
    fn test_can_sign() {
        assert!(Key::secret(b"s".to_vec()).can_sign());
        assert!(Key::rsa_private_pkcs8(vec![1]).can_sign());
        assert!(!Key::rsa_public_der(vec![1]).can_sign());
        assert!(!Key::ec_public_sec1(vec![4]).can_sign());
    }

    #[test]
    fn test_debug_redacts_secret_material() {
        let key = Key::secret(b"super-secret".to_vec());
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("super"));
        assert!(rendered.contains("REDACTED"));
    }
}
