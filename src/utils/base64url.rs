//! Base64URL encoding/decoding per RFC 4648 §5
//!
//! Output never carries `=` padding. Input must not carry padding either;
//! it is restored to a multiple of four before handing the text to the
//! padded URL-safe engine of the `base64` crate.

use crate::error::{Error, Result};
use base64::{
    Engine,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};

/// Encode bytes to Base64URL string (no padding)
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode an unpadded Base64URL string to bytes with maximum size limit
pub fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    if input.contains('=') {
        return Err(Error::MalformedSegment(
            "Base64URL segment must not be padded".to_string(),
        ));
    }

    // Reject before allocating: every 4 characters decode to at most 3 bytes
    if input.len() / 4 * 3 > max_size {
        return Err(Error::MalformedSegment(format!(
            "Decoded size exceeds limit (max: {max_size} bytes)"
        )));
    }

    let result = URL_SAFE
        .decode(pad(input))
        .map_err(|e| Error::MalformedSegment(format!("Base64URL decode failed: {e}")))?;

    if result.len() > max_size {
        return Err(Error::MalformedSegment(format!(
            "Decoded size exceeds limit: {} bytes (max: {})",
            result.len(),
            max_size
        )));
    }

    Ok(result)
}

/// Decode Base64URL string to UTF-8 string with size limit
pub fn decode(input: &str, max_size: usize) -> Result<String> {
    decode_bytes(input, max_size).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Error::MalformedSegment(format!("Invalid UTF-8: {e}")))
    })
}

/// Restore `=` padding so the length is a multiple of four
fn pad(input: &str) -> String {
    let missing = (4 - input.len() % 4) % 4;
    let mut padded = String::with_capacity(input.len() + missing);
    padded.push_str(input);
    for _ in 0..missing {
        padded.push('=');
    }
    padded
}
