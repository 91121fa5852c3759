pub(crate) mod validator;

pub use validator::{ClaimsValidator, Validation};

use crate::error::{Error, Result};
use crate::limits::MAX_DECODED_PAYLOAD_SIZE;
use crate::utils::base64url;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Names of the registered claims carried as typed fields
pub const REGISTERED_CLAIMS: [&str; 7] = ["iss", "sub", "aud", "jti", "iat", "nbf", "exp"];

/// Token payload: registered claims from RFC 7519 Section 4.1 plus any
/// additional claims
///
/// Registered claims serialize first in the order `iss, sub, aud, jti, iat,
/// nbf, exp`, omitting unset ones. Additional claims follow, sorted by name.
///
/// # Examples
///
/// ```
/// use jwtcodec::Payload;
///
/// let payload = Payload::new()
///     .with_issuer("svc-a")
///     .with_subject("user-1")
///     .expires_at(1700003600)
///     .with_claim("role", "admin")
///     .unwrap();
///
/// assert_eq!(payload.issuer.as_deref(), Some("svc-a"));
/// assert_eq!(payload.claim("role").and_then(|v| v.as_str()), Some("admin"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Issuer (iss) - identifies the principal that issued the token
    #[serde(rename = "iss", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Subject (sub) - identifies the principal that is the subject of the token
    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Audience (aud) - identifies the recipient the token is intended for
    #[serde(rename = "aud", default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// JWT ID (jti) - unique identifier for the token
    #[serde(rename = "jti", default, skip_serializing_if = "Option::is_none")]
    pub jwt_id: Option<String>,

    /// Issued At (iat) - seconds since Unix epoch
    #[serde(rename = "iat", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,

    /// Not Before (nbf) - seconds since Unix epoch
    #[serde(rename = "nbf", default, skip_serializing_if = "Option::is_none")]
    pub not_before: Option<i64>,

    /// Expiration Time (exp) - seconds since Unix epoch
    #[serde(rename = "exp", default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Payload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_jwt_id(mut self, jwt_id: impl Into<String>) -> Self {
        self.jwt_id = Some(jwt_id.into());
        self
    }

    pub fn issued_at(mut self, timestamp: i64) -> Self {
        self.issued_at = Some(timestamp);
        self
    }

    pub fn not_before(mut self, timestamp: i64) -> Self {
        self.not_before = Some(timestamp);
        self
    }

    pub fn expires_at(mut self, timestamp: i64) -> Self {
        self.expiration = Some(timestamp);
        self
    }

    /// Add an additional claim
    ///
    /// Registered claim names are rejected with `ConfigurationInvalid`; set
    /// those through their typed fields instead.
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Serialize) -> Result<Self> {
        let name = name.into();
        if REGISTERED_CLAIMS.contains(&name.as_str()) {
            return Err(Error::ConfigurationInvalid(format!(
                "'{name}' is a registered claim and must be set through its typed field"
            )));
        }

        let value = serde_json::to_value(value).map_err(|e| {
            Error::ConfigurationInvalid(format!("Claim '{name}' is not representable as JSON: {e}"))
        })?;
        self.extra.insert(name, value);
        Ok(self)
    }

    /// Look up an additional claim by name
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// All additional claims, sorted by name
    pub fn claims(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Serialize to a Base64URL segment
    pub fn to_compact_segment(&self) -> String {
        let json = serde_json::to_vec(self).expect("payload record always serializes");
        base64url::encode_bytes(&json)
    }

    /// Parse a Base64URL segment; fails with `MalformedSegment`
    pub fn from_compact_segment(segment: &str) -> Result<Self> {
        let json = base64url::decode(segment, MAX_DECODED_PAYLOAD_SIZE)?;
        serde_json::from_str(&json)
            .map_err(|e| Error::MalformedSegment(format!("Failed to parse payload: {e}")))
    }
}
