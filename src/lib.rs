//! # jwtcodec - Compact Signed Token Codec
//!
//! > Encode and decode JSON Web Tokens in compact serialization.
//!
//! **jwtcodec** signs a header and a claims payload into the three-segment
//! `header.payload.signature` form, and turns such a string back into a
//! validated payload. Eight algorithms are registered: HS256, HS384, HS512,
//! RS256, RS384, RS512, ES256 and ES384. Everything else, including `none`,
//! is rejected.
//!
//! ## Quick Start
//!
//! ```
//! use jwtcodec::{AlgorithmId, Header, Key, Payload, TokenCodec};
//!
//! let codec = TokenCodec::new();
//! let key = Key::from("secret");
//!
//! let payload = Payload::new()
//!     .with_issuer("svc-a")
//!     .with_subject("user-1")
//!     .issued_at(1700000000)
//!     .expires_at(1700003600);
//!
//! let token = codec.encode(&payload, &Header::new(AlgorithmId::HS256), &key)?;
//! let decoded = codec.decode_at(&token, &key, AlgorithmId::HS256, 1700001000)?;
//!
//! assert_eq!(decoded.subject.as_deref(), Some("user-1"));
//! # Ok::<(), jwtcodec::Error>(())
//! ```
//!
//! ## Decode Flow
//!
//! ```text
//! SplitSegments → DecodeHeader → VerifyHeaderAlgorithm → DecodePayload
//!               → VerifySignature → VerifyTimeClaims → Accepted
//! ```
//!
//! The first failing stage ends decoding with a typed [`Error`]. Only
//! [`TokenCodec::is_valid`] collapses the outcome to a `bool`.
//!
//! ## Keys
//!
//! ```ignore
//! Key::secret(b"shared secret")          // HS256, HS384, HS512
//! Key::rsa_private_pkcs8(pkcs8_der)      // RS* signing (and verification)
//! Key::rsa_public_der(pkcs1_der)         // RS* verification
//! Key::ec_private_pkcs8(pkcs8_der)       // ES* signing (and verification)
//! Key::ec_public_sec1(point)             // ES* verification
//! ```
//!
//! A key of the wrong family never signs and never verifies.
//!
//! ## Claims Validation
//!
//! ```
//! use jwtcodec::{TokenCodec, Validation};
//!
//! let codec = TokenCodec::with_validation(
//!     Validation::default()
//!         .leeway(30)                 // Applied to nbf, iat and exp
//!         .require_audience("svc-b")  // Validate `aud` claim
//!         .require_issuer("svc-a"),   // Validate `iss` claim
//! )?;
//! # Ok::<(), jwtcodec::Error>(())
//! ```
//!
//! ## Security
//!
//! ### Algorithm Confusion Prevention
//!
//! Every decode takes the expected algorithm from the caller and compares it
//! with the header's `alg` in constant time before any key is used. A token
//! signed with HS256 using an RSA public key as the secret is rejected with
//! `AlgorithmMismatch` when RS256 is expected.
//!
//! ### "none" Algorithm Rejection
//!
//! The `"none"` algorithm (unsigned tokens) is always rejected per [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate.
//!
//! ### Input Limits
//!
//! Tokens, decoded segments and the `alg`/`kid` header fields are size
//! bounded before they are parsed.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518): JSON Web Algorithms (JWA)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725): JSON Web Signature Best Practices

// Core modules
pub mod error;
pub(crate) mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Records
pub mod claims;
pub mod header;

// Codec (main public API)
pub mod codec;
pub(crate) mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use codec::TokenCodec;

pub use claims::{Payload, Validation};
pub use header::{Header, UnverifiedHeader};

pub use algorithm::{AlgorithmFamily, AlgorithmId};
pub use error::{Error, Result};
pub use keys::Key;

/// Encode with a default [`TokenCodec`]
pub fn encode(payload: &Payload, header: &Header, key: &Key) -> Result<String> {
    TokenCodec::new().encode(payload, header, key)
}

/// Decode against the current system time with a default [`TokenCodec`]
pub fn decode(token: &str, key: &Key, expected: AlgorithmId) -> Result<Payload> {
    TokenCodec::new().decode(token, key, expected)
}
