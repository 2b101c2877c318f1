//! Binary to text encoding.
//!
//! Every piece of binary crypto material is persisted as standard, padded
//! base64.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::EncodingError;

/// Encode bytes as base64 text. Empty input yields an empty string.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode base64 text back to bytes.
///
/// # Errors
///
/// Returns `EncodingError::Decode` for characters outside the alphabet or
/// bad padding. Never substitutes empty output for invalid input.
pub fn text_to_bytes(text: &str) -> std::result::Result<Vec<u8>, EncodingError> {
    Ok(BASE64.decode(text)?)
}
