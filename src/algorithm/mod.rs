//! Algorithm registry
//!
//! Maps every supported algorithm identifier to exactly one digest and one
//! primitive family, and dispatches signing and verification to the family
//! implementation. The table is an immutable `static`; nothing is registered
//! at runtime.

mod traits;

pub mod ecdsa;
pub mod hmac;
pub mod rsa;

pub use traits::Algorithm;

use crate::error::{Error, Result};
use crate::keys::Key;
use crate::limits::MAX_ALG_LENGTH;

use self::ecdsa::{EcCurve, EcdsaAlgorithm};
use self::hmac::HmacAlgorithm;
use self::rsa::RsaAlgorithm;

/// Algorithm identifier carried in the `alg` header field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,
    /// ECDSA with P-256 and SHA-256
    ES256,
    /// ECDSA with P-384 and SHA-384
    ES384,
}

/// Primitive family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    /// Symmetric keyed hash
    Hmac,
    /// RSA signature
    Rsa,
    /// Elliptic-curve signature
    Ecdsa,
}

/// Message digest used by an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

/// One row of the registry
pub(crate) struct AlgorithmEntry {
    id: AlgorithmId,
    name: &'static str,
    family: AlgorithmFamily,
    digest: DigestAlgorithm,
    primitive: &'static dyn Algorithm,
}

/// Rows are ordered by `AlgorithmId` discriminant.
static ALGORITHMS: [AlgorithmEntry; 8] = [
    AlgorithmEntry {
        id: AlgorithmId::HS256,
        name: "HS256",
        family: AlgorithmFamily::Hmac,
        digest: DigestAlgorithm::Sha256,
        primitive: &HmacAlgorithm {
            digest: DigestAlgorithm::Sha256,
        },
    },
    AlgorithmEntry {
        id: AlgorithmId::HS384,
        name: "HS384",
        family: AlgorithmFamily::Hmac,
        digest: DigestAlgorithm::Sha384,
        primitive: &HmacAlgorithm {
            digest: DigestAlgorithm::Sha384,
        },
    },
    AlgorithmEntry {
        id: AlgorithmId::HS512,
        name: "HS512",
        family: AlgorithmFamily::Hmac,
        digest: DigestAlgorithm::Sha512,
        primitive: &HmacAlgorithm {
            digest: DigestAlgorithm::Sha512,
        },
    },
    AlgorithmEntry {
        id: AlgorithmId::RS256,
        name: "RS256",
        family: AlgorithmFamily::Rsa,
        digest: DigestAlgorithm::Sha256,
        primitive: &RsaAlgorithm {
            digest: DigestAlgorithm::Sha256,
        },
    },
    AlgorithmEntry {
        id: AlgorithmId::RS384,
        name: "RS384",
        family: AlgorithmFamily::Rsa,
        digest: DigestAlgorithm::Sha384,
        primitive: &RsaAlgorithm {
            digest: DigestAlgorithm::Sha384,
        },
    },
    AlgorithmEntry {
        id: AlgorithmId::RS512,
        name: "RS512",
        family: AlgorithmFamily::Rsa,
        digest: DigestAlgorithm::Sha512,
        primitive: &RsaAlgorithm {
            digest: DigestAlgorithm::Sha512,
        },
    },
    AlgorithmEntry {
        id: AlgorithmId::ES256,
        name: "ES256",
        family: AlgorithmFamily::Ecdsa,
        digest: DigestAlgorithm::Sha256,
        primitive: &EcdsaAlgorithm {
            curve: EcCurve::P256,
        },
    },
    AlgorithmEntry {
        id: AlgorithmId::ES384,
        name: "ES384",
        family: AlgorithmFamily::Ecdsa,
        digest: DigestAlgorithm::Sha384,
        primitive: &EcdsaAlgorithm {
            curve: EcCurve::P384,
        },
    },
];

impl AlgorithmId {
    /// Parse an algorithm name
    ///
    /// Matching is exact and case-sensitive. Anything outside the registry,
    /// including `none`, is an `UnsupportedAlgorithm` error.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        if s.len() > MAX_ALG_LENGTH {
            return Err(Error::UnsupportedAlgorithm(format!(
                "algorithm string too long: {} bytes (maximum: {} bytes)",
                s.len(),
                MAX_ALG_LENGTH
            )));
        }

        ALGORITHMS
            .iter()
            .find(|spec| spec.name == s)
            .map(|spec| spec.id)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }

    /// All registered algorithms, in registry order
    pub fn all() -> impl Iterator<Item = AlgorithmId> {
        ALGORITHMS.iter().map(|spec| spec.id)
    }

    fn spec(self) -> &'static AlgorithmEntry {
        &ALGORITHMS[self as usize]
    }

    /// Convert to string representation
    pub fn as_str(self) -> &'static str {
        self.spec().name
    }

    /// Primitive family
    pub fn family(self) -> AlgorithmFamily {
        self.spec().family
    }

    /// Message digest
    pub fn digest(self) -> DigestAlgorithm {
        self.spec().digest
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(self) -> bool {
        self.family() == AlgorithmFamily::Hmac
    }

    fn primitive(self) -> &'static dyn Algorithm {
        self.spec().primitive
    }
}

impl std::str::FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AlgorithmId::from_str(s)
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for AlgorithmId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl serde::Serialize for AlgorithmId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for AlgorithmId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        AlgorithmId::from_str(&name).map_err(serde::de::Error::custom)
    }
}

/// Whether `id` names a registered algorithm
///
/// Never fails: unknown, empty, or oversized input simply returns `false`.
pub fn exists(id: &str) -> bool {
    AlgorithmId::from_str(id).is_ok()
}

/// Sign `signing_input` with `key` under `algorithm`
///
/// Fails with `SigningFailure` when the key belongs to another family or
/// cannot be used by the primitive.
pub fn sign(algorithm: AlgorithmId, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
    if key.family() != algorithm.family() {
        return Err(Error::SigningFailure(format!(
            "{} key cannot be used with {algorithm}",
            key.key_type()
        )));
    }
    algorithm.primitive().sign(signing_input, key)
}

/// Sign under an algorithm given by name
///
/// Unknown names fail with `UnsupportedAlgorithm` before any key is touched.
pub fn sign_by_name(id: &str, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
    let algorithm = AlgorithmId::from_str(id)?;
    sign(algorithm, signing_input, key)
}

/// Verify `signature` over `signing_input`
///
/// A key of the wrong family never verifies.
pub fn verify(algorithm: AlgorithmId, signing_input: &[u8], key: &Key, signature: &[u8]) -> bool {
    if key.family() != algorithm.family() {
        tracing::debug!(
            algorithm = algorithm.as_str(),
            key_type = key.key_type(),
            "key family does not match algorithm"
        );
        return false;
    }
    algorithm.primitive().verify(signing_input, signature, key)
}

/// Verify under an algorithm given by name; unknown names never verify
pub fn verify_by_name(id: &str, signing_input: &[u8], key: &Key, signature: &[u8]) -> bool {
    match AlgorithmId::from_str(id) {
        Ok(algorithm) => verify(algorithm, signing_input, key, signature),
        Err(_) => false,
    }
}

/// Compare two byte strings without an early exit on the first mismatch
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    constant_time_eq::constant_time_eq(a, b)
}
