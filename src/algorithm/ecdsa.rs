use crate::algorithm::{Algorithm, AlgorithmFamily};
use crate::error::{Error, Result};
use crate::keys::Key;

use ring::rand::SystemRandom;
use ring::signature::{self, EcdsaKeyPair, KeyPair, UnparsedPublicKey};

/// ECDSA curve identifier
///
/// The curve fixes the digest: P-256 signs SHA-256, P-384 signs SHA-384.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcCurve {
    /// P-256 (secp256r1) curve
    P256,
    /// P-384 (secp384r1) curve
    P384,
}

/// ECDSA on one curve (ES256, ES384)
///
/// Signatures use the fixed-width `R || S` encoding from RFC 7518 §3.4,
/// not ASN.1 DER.
#[derive(Debug)]
pub struct EcdsaAlgorithm {
    pub(crate) curve: EcCurve,
}

impl EcdsaAlgorithm {
    fn signing(&self) -> &'static signature::EcdsaSigningAlgorithm {
        match self.curve {
            EcCurve::P256 => &signature::ECDSA_P256_SHA256_FIXED_SIGNING,
            EcCurve::P384 => &signature::ECDSA_P384_SHA384_FIXED_SIGNING,
        }
    }

    fn verification(&self) -> &'static signature::EcdsaVerificationAlgorithm {
        match self.curve {
            EcCurve::P256 => &signature::ECDSA_P256_SHA256_FIXED,
            EcCurve::P384 => &signature::ECDSA_P384_SHA384_FIXED,
        }
    }

    fn key_pair(&self, pkcs8: &[u8], rng: &SystemRandom) -> Result<EcdsaKeyPair> {
        EcdsaKeyPair::from_pkcs8(self.signing(), pkcs8, rng).map_err(|e| {
            Error::SigningFailure(format!("Invalid ECDSA {:?} private key: {e}", self.curve))
        })
    }
}

impl Algorithm for EcdsaAlgorithm {
    fn family(&self) -> AlgorithmFamily {
        AlgorithmFamily::Ecdsa
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let Key::EcPrivate(der) = key else {
            return Err(Error::SigningFailure(format!(
                "ECDSA signing requires a private key, got {} key",
                key.key_type()
            )));
        };

        let rng = SystemRandom::new();
        let key_pair = self.key_pair(der.as_bytes(), &rng)?;
        let signature = key_pair
            .sign(&rng, signing_input)
            .map_err(|_| Error::SigningFailure("ECDSA signing failed".to_string()))?;

        Ok(signature.as_ref().to_vec())
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> bool {
        let public_point = match key {
            Key::EcPublic(point) => point.clone(),
            Key::EcPrivate(der) => match self.key_pair(der.as_bytes(), &SystemRandom::new()) {
                Ok(key_pair) => key_pair.public_key().as_ref().to_vec(),
                Err(_) => return false,
            },
            _ => return false,
        };

        UnparsedPublicKey::new(self.verification(), public_point)
            .verify(signing_input, signature)
            .is_ok()
    }
}
