use crate::algorithm::{Algorithm, AlgorithmFamily, DigestAlgorithm};
use crate::error::{Error, Result};
use crate::keys::Key;

use ring::rand::SystemRandom;
use ring::signature::{self, RsaKeyPair, UnparsedPublicKey};

/// RSASSA-PKCS1-v1_5 over one SHA-2 digest (RS256, RS384, RS512)
#[derive(Debug)]
pub struct RsaAlgorithm {
    pub(crate) digest: DigestAlgorithm,
}

impl RsaAlgorithm {
    fn padding(&self) -> &'static dyn signature::RsaEncoding {
        match self.digest {
            DigestAlgorithm::Sha256 => &signature::RSA_PKCS1_SHA256,
            DigestAlgorithm::Sha384 => &signature::RSA_PKCS1_SHA384,
            DigestAlgorithm::Sha512 => &signature::RSA_PKCS1_SHA512,
        }
    }

    fn verification(&self) -> &'static dyn signature::VerificationAlgorithm {
        match self.digest {
            DigestAlgorithm::Sha256 => &signature::RSA_PKCS1_2048_8192_SHA256,
            DigestAlgorithm::Sha384 => &signature::RSA_PKCS1_2048_8192_SHA384,
            DigestAlgorithm::Sha512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        }
    }
}

impl Algorithm for RsaAlgorithm {
    fn family(&self) -> AlgorithmFamily {
        AlgorithmFamily::Rsa
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let Key::RsaPrivate(der) = key else {
            return Err(Error::SigningFailure(format!(
                "RSA signing requires a private key, got {} key",
                key.key_type()
            )));
        };

        let key_pair = RsaKeyPair::from_pkcs8(der.as_bytes())
            .map_err(|e| Error::SigningFailure(format!("Invalid RSA private key: {e}")))?;

        let rng = SystemRandom::new();
        let mut signature = vec![0u8; key_pair.public().modulus_len()];
        key_pair
            .sign(self.padding(), &rng, signing_input, &mut signature)
            .map_err(|_| Error::SigningFailure("RSA signing failed".to_string()))?;

        Ok(signature)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> bool {
        let public_key_der = match key {
            Key::RsaPublic(der) => der.clone(),
            Key::RsaPrivate(der) => match RsaKeyPair::from_pkcs8(der.as_bytes()) {
                Ok(key_pair) => key_pair.public().as_ref().to_vec(),
                Err(_) => return false,
            },
            _ => return false,
        };

        UnparsedPublicKey::new(self.verification(), public_key_der)
            .verify(signing_input, signature)
            .is_ok()
    }
}
