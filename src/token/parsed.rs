use crate::error::{Error, Result};
use crate::limits::MAX_TOKEN_LENGTH;

/// A compact token split into its three segments
///
/// Nothing has been decoded yet. The segments borrow from the input so the
/// signing input can be handed to the verifier exactly as received.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParsedToken<'a> {
    header_b64: &'a str,
    payload_b64: &'a str,
    signature_b64: &'a str,
    signing_input: &'a str,
}

impl<'a> ParsedToken<'a> {
    /// Split a compact token into `header.payload.signature`
    ///
    /// Fails with `TokenTooLarge` before looking at the content, and with
    /// `WrongSegmentCount` unless there are exactly three non-empty segments.
    pub(crate) fn split(token: &'a str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::WrongSegmentCount {
                found: token.split('.').count(),
            });
        };

        if header_b64.is_empty() || payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(Error::WrongSegmentCount {
                found: [header_b64, payload_b64, signature_b64]
                    .iter()
                    .filter(|part| !part.is_empty())
                    .count(),
            });
        }

        // header.payload, without the final dot
        let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];

        Ok(Self {
            header_b64,
            payload_b64,
            signature_b64,
            signing_input,
        })
    }

    pub(crate) fn header(&self) -> &'a str {
        self.header_b64
    }

    pub(crate) fn payload(&self) -> &'a str {
        self.payload_b64
    }

    pub(crate) fn signature(&self) -> &'a str {
        self.signature_b64
    }

    /// Get the signing input (header.payload)
    pub(crate) fn signing_input(&self) -> &'a str {
        self.signing_input
    }
}
