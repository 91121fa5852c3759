use crate::algorithm::{Algorithm, AlgorithmFamily, DigestAlgorithm, constant_time_eq};
use crate::error::{Error, Result};
use crate::keys::Key;

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HMAC over one SHA-2 digest (HS256, HS384, HS512)
#[derive(Debug)]
pub struct HmacAlgorithm {
    pub(crate) digest: DigestAlgorithm,
}

impl Algorithm for HmacAlgorithm {
    fn family(&self) -> AlgorithmFamily {
        AlgorithmFamily::Hmac
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let Key::Secret(secret) = key else {
            return Err(Error::SigningFailure(format!(
                "HMAC requires a shared secret, got {} key",
                key.key_type()
            )));
        };
        if secret.as_bytes().is_empty() {
            return Err(Error::SigningFailure("HMAC secret is empty".to_string()));
        }
        compute_mac(self.digest, secret.as_bytes(), signing_input)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> bool {
        let Key::Secret(secret) = key else {
            return false;
        };
        if secret.as_bytes().is_empty() {
            return false;
        }
        match compute_mac(self.digest, secret.as_bytes(), signing_input) {
            Ok(expected) => constant_time_eq(&expected, signature),
            Err(_) => false,
        }
    }
}

/// Compute a keyed hash with the requested digest
fn compute_mac(digest: DigestAlgorithm, secret: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let invalid = |e: hmac::digest::InvalidLength| Error::SigningFailure(format!("Invalid HMAC key: {e}"));

    let tag = match digest {
        DigestAlgorithm::Sha256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(secret).map_err(invalid)?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        DigestAlgorithm::Sha384 => {
            let mut mac = Hmac::<Sha384>::new_from_slice(secret).map_err(invalid)?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        DigestAlgorithm::Sha512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(secret).map_err(invalid)?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
    };
    Ok(tag)
}
