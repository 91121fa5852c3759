//! Compact token encoding and decoding
//!
//! Decoding runs a fixed sequence of stages and stops at the first failure:
//!
//! ```text
//! SplitSegments          three non-empty segments, size bounded
//!     ▼
//! DecodeHeader           Base64URL + JSON into an UnverifiedHeader
//!     ▼
//! VerifyHeaderAlgorithm  alg registered, and equal to the expected algorithm
//!     ▼
//! DecodePayload          Base64URL + JSON into a Payload
//!     ▼
//! VerifySignature        signature over `header.payload` as received
//!     ▼
//! VerifyTimeClaims       nbf, iat, exp, then claim requirements
//!     ▼
//! Accepted
//! ```
//!
//! The expected algorithm always comes from the caller. The header only has
//! to agree with it.

use crate::algorithm::{self, AlgorithmId};
use crate::claims::validator::current_timestamp;
use crate::claims::{ClaimsValidator, Payload, Validation};
use crate::error::{Error, Result};
use crate::header::{Header, UnverifiedHeader};
use crate::keys::Key;
use crate::limits::{MAX_DECODED_SIGNATURE_SIZE, MAX_TOKEN_LENGTH};
use crate::token::ParsedToken;
use crate::utils::base64url;
use std::borrow::Borrow;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    SplitSegments,
    DecodeHeader,
    VerifyHeaderAlgorithm,
    ResolveKey,
    DecodePayload,
    VerifySignature,
    VerifyTimeClaims,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Stage::SplitSegments => "split_segments",
            Stage::DecodeHeader => "decode_header",
            Stage::VerifyHeaderAlgorithm => "verify_header_algorithm",
            Stage::ResolveKey => "resolve_key",
            Stage::DecodePayload => "decode_payload",
            Stage::VerifySignature => "verify_signature",
            Stage::VerifyTimeClaims => "verify_time_claims",
        }
    }

    fn reject(self, error: Error) -> Error {
        debug!(stage = self.as_str(), kind = error.kind(), %error, "token rejected");
        error
    }
}

/// Narrow a segment-level error to the segment it came from
fn in_segment(error: Error, wrap: fn(String) -> Error) -> Error {
    match error {
        Error::MalformedSegment(message) => wrap(message),
        other => other,
    }
}

/// Encodes and decodes compact tokens
///
/// The codec holds only its [`Validation`] settings and keeps no state
/// between calls.
///
/// # Examples
///
/// ```
/// use jwtcodec::{AlgorithmId, Error, Header, Key, Payload, TokenCodec};
///
/// let codec = TokenCodec::new();
/// let key = Key::from("secret");
/// let payload = Payload::new()
///     .with_issuer("svc-a")
///     .with_subject("user-1")
///     .with_audience("svc-b")
///     .issued_at(1700000000)
///     .expires_at(1700003600);
///
/// let token = codec
///     .encode(&payload, &Header::new(AlgorithmId::HS256), &key)
///     .unwrap();
///
/// let decoded = codec
///     .decode_at(&token, &key, AlgorithmId::HS256, 1700001000)
///     .unwrap();
/// assert_eq!(decoded, payload);
///
/// assert!(matches!(
///     codec.decode_at(&token, &key, AlgorithmId::HS256, 1700003700),
///     Err(Error::TokenExpired { .. })
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenCodec {
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec with the default (strict) validation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with custom validation
    ///
    /// Fails with `ConfigurationInvalid` if the settings are out of bounds.
    pub fn with_validation(validation: Validation) -> Result<Self> {
        validation.check()?;
        Ok(Self { validation })
    }

    /// Validation settings applied on decode
    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    /// Sign `payload` under `header` and serialize to compact form
    #[tracing::instrument(level = "debug", skip_all, fields(alg = %header.algorithm()))]
    pub fn encode(&self, payload: &Payload, header: &Header, key: &Key) -> Result<String> {
        let signing_input = format!(
            "{}.{}",
            header.to_compact_segment(),
            payload.to_compact_segment()
        );

        let signature = algorithm::sign(header.algorithm(), signing_input.as_bytes(), key)?;
        let token = format!("{signing_input}.{}", base64url::encode_bytes(&signature));

        // Keep encode and decode symmetric
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        trace!(len = token.len(), "token encoded");
        Ok(token)
    }

    /// Decode and validate a token against the current system time
    pub fn decode(&self, token: &str, key: &Key, expected: AlgorithmId) -> Result<Payload> {
        let now = current_timestamp()?;
        self.run(token, expected, now, |_| Ok(key))
    }

    /// Decode and validate a token at `now` (seconds since Unix epoch)
    pub fn decode_at(
        &self,
        token: &str,
        key: &Key,
        expected: AlgorithmId,
        now: i64,
    ) -> Result<Payload> {
        self.run(token, expected, now, |_| Ok(key))
    }

    /// Decode and validate a token, choosing the key from its header
    ///
    /// `resolver` runs once the header algorithm has been checked against
    /// `expected` and before the payload is decoded, so it only ever sees
    /// headers that passed that check. Its error is returned unchanged.
    ///
    /// ```
    /// use jwtcodec::{AlgorithmId, Error, Header, Key, Payload, TokenCodec};
    ///
    /// let codec = TokenCodec::new();
    /// let header = Header::new(AlgorithmId::HS384).with_key_id("2024-01");
    /// let token = codec
    ///     .encode(&Payload::new().with_subject("user-1"), &header, &Key::from("k1"))
    ///     .unwrap();
    ///
    /// let payload = codec
    ///     .decode_with_resolver(&token, AlgorithmId::HS384, |header| match header.key_id() {
    ///         Some("2024-01") => Ok(Key::from("k1")),
    ///         other => Err(Error::MissingClaim(format!("kid {other:?}"))),
    ///     })
    ///     .unwrap();
    /// assert_eq!(payload.subject.as_deref(), Some("user-1"));
    /// ```
    pub fn decode_with_resolver<F>(
        &self,
        token: &str,
        expected: AlgorithmId,
        resolver: F,
    ) -> Result<Payload>
    where
        F: FnOnce(&Header) -> Result<Key>,
    {
        let now = current_timestamp()?;
        self.run(token, expected, now, resolver)
    }

    /// Read the header without verifying the signature
    ///
    /// Intended for key selection (`kid`) only. Nothing in the result is
    /// authenticated.
    pub fn decode_header(&self, token: &str) -> Result<Header> {
        let parsed = ParsedToken::split(token)?;
        UnverifiedHeader::from_compact_segment(parsed.header())
            .map_err(|e| in_segment(e, Error::MalformedHeader))?
            .verify()
    }

    /// Whether `token` decodes and validates against the current system time
    pub fn is_valid(&self, token: &str, key: &Key, expected: AlgorithmId) -> bool {
        self.decode(token, key, expected).is_ok()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(expected = %expected, now = now))]
    fn run<K, F>(&self, token: &str, expected: AlgorithmId, now: i64, resolve: F) -> Result<Payload>
    where
        K: Borrow<Key>,
        F: FnOnce(&Header) -> Result<K>,
    {
        let parsed = ParsedToken::split(token).map_err(|e| Stage::SplitSegments.reject(e))?;

        let unverified = UnverifiedHeader::from_compact_segment(parsed.header())
            .map_err(|e| Stage::DecodeHeader.reject(in_segment(e, Error::MalformedHeader)))?;

        let header = unverified
            .verify()
            .map_err(|e| Stage::VerifyHeaderAlgorithm.reject(e))?;
        let declared = header.algorithm();
        if !algorithm::constant_time_eq(expected.as_str().as_bytes(), declared.as_str().as_bytes())
        {
            return Err(Stage::VerifyHeaderAlgorithm.reject(Error::AlgorithmMismatch {
                expected: expected.to_string(),
                found: declared.to_string(),
            }));
        }

        let key = resolve(&header).map_err(|e| Stage::ResolveKey.reject(e))?;

        let payload = Payload::from_compact_segment(parsed.payload())
            .map_err(|e| Stage::DecodePayload.reject(in_segment(e, Error::MalformedPayload)))?;

        let signature = base64url::decode_bytes(parsed.signature(), MAX_DECODED_SIGNATURE_SIZE)
            .map_err(|e| Stage::VerifySignature.reject(in_segment(e, Error::MalformedSignature)))?;
        if !algorithm::verify(
            declared,
            parsed.signing_input().as_bytes(),
            key.borrow(),
            &signature,
        ) {
            return Err(Stage::VerifySignature.reject(Error::SignatureInvalid));
        }

        ClaimsValidator::validate(&payload, &self.validation, now)
            .map_err(|e| Stage::VerifyTimeClaims.reject(e))?;

        trace!(alg = %declared, kid = header.key_id(), "token accepted");
        Ok(payload)
    }
}
