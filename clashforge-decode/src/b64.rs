//! Forgiving base64 decoding shared by the link and subscription decoders.
//!
//! Share links and subscription payloads show up with stripped padding,
//! URL-safe alphabets and stray whitespace, so a strict single-engine
//! decode rejects a lot of real-world input.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;

/// Decodes base64 tolerating missing padding, either alphabet, and
/// embedded whitespace. Returns `None` when the input is not base64 at
/// all.
pub(crate) fn decode_forgiving(input: &str) -> Option<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    let padded = repad(&cleaned);
    STANDARD
        .decode(&padded)
        .or_else(|_| URL_SAFE.decode(&padded))
        .ok()
}

/// Like [`decode_forgiving`], but additionally requires the decoded bytes
/// to be UTF-8 text.
pub(crate) fn decode_forgiving_utf8(input: &str) -> Option<String> {
    decode_forgiving(input).and_then(|bytes| String::from_utf8(bytes).ok())
}

fn repad(s: &str) -> String {
    let trimmed = s.trim_end_matches('=');
    match trimmed.len() % 4 {
        0 => trimmed.to_string(),
        2 => format!("{trimmed}=="),
        3 => format!("{trimmed}="),
        // A length of 4k+1 is never valid base64; let the engine reject it.
        _ => s.to_string(),
    }
}
