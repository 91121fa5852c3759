//! JOSE header record
//!
//! A header is built by the caller at encode time, or reconstructed from the
//! first token segment in two steps: the segment parses into an
//! [`UnverifiedHeader`] whose `alg` is still an arbitrary string, and
//! [`UnverifiedHeader::verify`] turns it into a [`Header`] bound to a
//! registered algorithm.

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_KID_LENGTH};
use crate::utils::base64url;
use serde::{Deserialize, Serialize};

/// Value of the `typ` header field
pub const TOKEN_TYPE: &str = "JWT";

/// Verified token header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    algorithm: AlgorithmId,
    key_id: Option<String>,
}

impl Header {
    /// Create a header for the given algorithm
    pub fn new(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm,
            key_id: None,
        }
    }

    /// Create a header from an algorithm name
    pub fn named(algorithm: &str) -> Result<Self> {
        AlgorithmId::from_str(algorithm).map(Self::new)
    }

    /// Attach a key ID hint
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.key_id = Some(kid.into());
        self
    }

    /// Signing algorithm
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Key ID if present
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Token type, always `JWT`
    pub fn token_type(&self) -> &'static str {
        TOKEN_TYPE
    }

    /// Serialize to a Base64URL segment
    ///
    /// Output is deterministic: `typ`, `alg`, then `kid` when set.
    pub fn to_compact_segment(&self) -> String {
        let record = HeaderRecord {
            typ: TOKEN_TYPE,
            alg: self.algorithm,
            kid: self.key_id.as_deref(),
        };
        let json = serde_json::to_vec(&record).expect("header record always serializes");
        base64url::encode_bytes(&json)
    }

    /// Parse and verify a Base64URL segment
    pub fn from_compact_segment(segment: &str) -> Result<Self> {
        UnverifiedHeader::from_compact_segment(segment)?.verify()
    }
}

#[derive(Serialize)]
struct HeaderRecord<'a> {
    typ: &'a str,
    alg: AlgorithmId,
    #[serde(skip_serializing_if = "Option::is_none")]
    kid: Option<&'a str>,
}

/// Header as read from an untrusted token, before algorithm verification
#[derive(Debug, Clone, Deserialize)]
pub struct UnverifiedHeader {
    /// Algorithm name as declared by the token
    #[serde(rename = "alg")]
    pub algorithm: Option<String>,

    /// Token type (typically "JWT")
    #[serde(rename = "typ")]
    pub token_type: Option<String>,

    /// Key ID
    #[serde(rename = "kid")]
    pub key_id: Option<String>,

    #[serde(rename = "crit", default)]
    critical: Option<serde_json::Value>,
}

impl UnverifiedHeader {
    /// Parse a Base64URL segment; fails with `MalformedSegment`
    pub fn from_compact_segment(segment: &str) -> Result<Self> {
        let json = base64url::decode(segment, MAX_DECODED_HEADER_SIZE)?;
        let header: UnverifiedHeader = serde_json::from_str(&json)
            .map_err(|e| Error::MalformedSegment(format!("Failed to parse header: {e}")))?;

        if let Some(typ) = header.token_type.as_deref() {
            if !typ.eq_ignore_ascii_case(TOKEN_TYPE) {
                return Err(Error::MalformedSegment(format!(
                    "Unexpected token type '{typ}'"
                )));
            }
        }

        // No header extensions are understood, so none may be critical
        if header.critical.is_some() {
            return Err(Error::MalformedSegment(
                "Critical header extensions are not supported".to_string(),
            ));
        }

        if let Some(kid) = header.key_id.as_deref() {
            if kid.len() > MAX_KID_LENGTH {
                return Err(Error::MalformedSegment(format!(
                    "Key ID too long: {} bytes (maximum: {MAX_KID_LENGTH} bytes)",
                    kid.len()
                )));
            }
        }

        Ok(header)
    }

    /// Bind the declared algorithm to the registry
    ///
    /// Fails with `UnsupportedAlgorithm` if `alg` is missing or unknown.
    pub fn verify(self) -> Result<Header> {
        let name = self
            .algorithm
            .ok_or_else(|| Error::UnsupportedAlgorithm("<missing>".to_string()))?;
        let algorithm = AlgorithmId::from_str(&name)?;

        Ok(Header {
            algorithm,
            key_id: self.key_id,
        })
    }
}
