//! Errors for jwtcodec
//!
//! Every failure is terminal: retrying with the same inputs yields the same
//! error. Decode failures name the stage that rejected the token.

use thiserror::Error;

/// jwtcodec errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid token format: expected three non-empty parts separated by '.', found {found}")]
    WrongSegmentCount { found: usize },

    #[error("Malformed segment: {0}")]
    MalformedSegment(String),

    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    #[error("Algorithm mismatch: expected '{expected}', token declares '{found}'")]
    AlgorithmMismatch { expected: String, found: String },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    #[error("Signing failed: {0}")]
    SigningFailure(String),

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Token not valid until {not_before} (now: {now}, leeway: {leeway}s)")]
    TokenNotYetValid {
        not_before: i64,
        now: i64,
        leeway: u64,
    },

    #[error("Token issued in future at {issued_at} (now: {now}, leeway: {leeway}s)")]
    TokenIssuedInFuture {
        issued_at: i64,
        now: i64,
        leeway: u64,
    },

    #[error("Token expired at {expired_at} (now: {now}, leeway: {leeway}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        leeway: u64,
    },

    #[error("Token audience mismatch: expected '{expected}', found '{found}'")]
    AudienceMismatch { expected: String, found: String },

    #[error("Token issuer mismatch: expected '{expected}', found '{found}'")]
    IssuerMismatch { expected: String, found: String },

    #[error("Required token claim '{0}' is missing")]
    MissingClaim(String),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),
}

impl Error {
    /// Short, stable name of the error kind, used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            Error::TokenTooLarge { .. } => "token_too_large",
            Error::WrongSegmentCount { .. } => "wrong_segment_count",
            Error::MalformedSegment(_) => "malformed_segment",
            Error::MalformedHeader(_) => "malformed_header",
            Error::MalformedPayload(_) => "malformed_payload",
            Error::MalformedSignature(_) => "malformed_signature",
            Error::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            Error::AlgorithmMismatch { .. } => "algorithm_mismatch",
            Error::SignatureInvalid => "signature_invalid",
            Error::SigningFailure(_) => "signing_failure",
            Error::TokenNotYetValid { .. } => "token_not_yet_valid",
            Error::TokenIssuedInFuture { .. } => "token_issued_in_future",
            Error::TokenExpired { .. } => "token_expired",
            Error::AudienceMismatch { .. } => "audience_mismatch",
            Error::IssuerMismatch { .. } => "issuer_mismatch",
            Error::MissingClaim(_) => "missing_claim",
            Error::ConfigurationInvalid(_) => "configuration_invalid",
        }
    }
}

/// Result type alias for jwtcodec operations
pub type Result<T> = std::result::Result<T, Error>;
