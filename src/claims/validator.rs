use crate::claims::Payload;
use crate::error::{Error, Result};
use crate::limits::MAX_LEEWAY_SECONDS;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration for claims validation
///
/// The default is strict: no leeway, every time claim that is present is
/// checked, and no audience or issuer is required.
///
/// Deserializes with missing fields taken from the default, so hosts can
/// embed it in their own configuration files:
///
/// ```
/// use jwtcodec::Validation;
///
/// let validation: Validation =
///     serde_json::from_str(r#"{"leeway_seconds": 30, "required_audience": "svc-b"}"#).unwrap();
/// assert_eq!(validation, Validation::new().leeway(30).require_audience("svc-b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Validation {
    /// Validate expiration time (exp claim)
    pub validate_exp: bool,

    /// Validate not-before time (nbf claim)
    pub validate_nbf: bool,

    /// Validate issued-at time (iat claim)
    pub validate_iat: bool,

    /// Leeway applied to every time claim, in seconds
    pub leeway_seconds: u64,

    /// Reject tokens without an exp claim
    pub require_exp: bool,

    /// Required audience value
    pub required_audience: Option<String>,

    /// Required issuer value
    pub required_issuer: Option<String>,
}

impl Default for Validation {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            validate_iat: true,
            leeway_seconds: 0,
            require_exp: false,
            required_audience: None,
            required_issuer: None,
        }
    }
}

impl Validation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set leeway for time claims
    ///
    /// # Security
    /// Leeway is limited to prevent effectively disabling expiration checks.
    /// Maximum allowed value is 300 seconds (5 minutes).
    /// Values exceeding the limit are rejected by [`Validation::check`].
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }

    /// Require a specific audience
    pub fn require_audience(mut self, audience: impl Into<String>) -> Self {
        self.required_audience = Some(audience.into());
        self
    }

    /// Require a specific issuer
    pub fn require_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.required_issuer = Some(issuer.into());
        self
    }

    /// Reject tokens that carry no exp claim
    pub fn require_exp(mut self) -> Self {
        self.require_exp = true;
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }

    /// Disable issued-at validation
    pub fn no_iat_validation(mut self) -> Self {
        self.validate_iat = false;
        self
    }

    /// Check configuration bounds
    pub fn check(&self) -> Result<()> {
        if self.leeway_seconds > MAX_LEEWAY_SECONDS {
            return Err(Error::ConfigurationInvalid(format!(
                "Leeway of {}s exceeds the maximum of {MAX_LEEWAY_SECONDS}s",
                self.leeway_seconds
            )));
        }
        Ok(())
    }
}

/// Claims validator
pub struct ClaimsValidator;

impl ClaimsValidator {
    /// Validate a payload at time `now` (seconds since Unix epoch)
    ///
    /// Time claims are checked first, in the order nbf, iat, exp. Claim
    /// requirements (exp presence, audience, issuer) follow.
    pub fn validate(payload: &Payload, validation: &Validation, now: i64) -> Result<()> {
        validation.check()?;

        let leeway = validation.leeway_seconds;
        // Bounded by MAX_LEEWAY_SECONDS above
        let leeway_i64 = leeway as i64;

        if validation.validate_nbf {
            if let Some(nbf) = payload.not_before {
                if nbf > now.saturating_add(leeway_i64) {
                    return Err(Error::TokenNotYetValid {
                        not_before: nbf,
                        now,
                        leeway,
                    });
                }
            }
        }

        if validation.validate_iat {
            if let Some(iat) = payload.issued_at {
                if iat > now.saturating_add(leeway_i64) {
                    return Err(Error::TokenIssuedInFuture {
                        issued_at: iat,
                        now,
                        leeway,
                    });
                }
            }
        }

        if validation.validate_exp {
            if let Some(exp) = payload.expiration {
                if now >= exp.saturating_add(leeway_i64) {
                    return Err(Error::TokenExpired {
                        expired_at: exp,
                        now,
                        leeway,
                    });
                }
            }
        }

        if validation.require_exp && payload.expiration.is_none() {
            return Err(Error::MissingClaim("exp".to_string()));
        }

        if let Some(required) = &validation.required_audience {
            match &payload.audience {
                Some(aud) if aud == required => {}
                Some(aud) => {
                    return Err(Error::AudienceMismatch {
                        expected: required.clone(),
                        found: aud.clone(),
                    });
                }
                None => return Err(Error::MissingClaim("aud".to_string())),
            }
        }

        if let Some(required) = &validation.required_issuer {
            match &payload.issuer {
                Some(iss) if iss == required => {}
                Some(iss) => {
                    return Err(Error::IssuerMismatch {
                        expected: required.clone(),
                        found: iss.clone(),
                    });
                }
                None => return Err(Error::MissingClaim("iss".to_string())),
            }
        }

        Ok(())
    }
}

/// Get current Unix timestamp
pub(crate) fn current_timestamp() -> Result<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .map_err(|_| Error::ConfigurationInvalid("System clock is before Unix epoch".to_string()))
}
