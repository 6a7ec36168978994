//! Upstream credential checks.
//!
//! The credential travels as `Authorization: Bearer <key>`. Header values are
//! bytes, so every character must fit in one byte and must not be a control
//! character (TAB excepted).

use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CoreError;

/// Reported when the key cannot be sent in a header.
pub const UNENCODABLE_MESSAGE: &str =
    "Unencodable characters found in OPENAI_API_KEY/Authorization header";

/// A character of the `Authorization` value that cannot be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffendingChar {
    /// Character index within `Bearer <key>`.
    pub index: usize,
    /// Unicode code point.
    pub ord: u32,
}

/// Full `Authorization` value for a key.
pub fn authorization_value(api_key: &str) -> String {
    format!("Bearer {api_key}")
}

/// Characters of `value` that cannot be encoded in a header.
pub fn offending_chars(value: &str) -> Vec<OffendingChar> {
    value
        .chars()
        .enumerate()
        .filter(|(_, c)| !is_header_safe(*c))
        .map(|(index, c)| OffendingChar {
            index,
            ord: u32::from(c),
        })
        .collect()
}

fn is_header_safe(c: char) -> bool {
    let code = u32::from(c);
    code == 0x09 || ((0x20..=0xFF).contains(&code) && code != 0x7F)
}

/// Validates the configured key and builds the `Authorization` header.
///
/// An absent or empty key is [`CoreError::MissingCredential`]. Offending
/// characters are itemized in [`CoreError::UnencodableCredential`]; the key
/// itself is never logged.
pub fn authorization_header(api_key: Option<&str>) -> Result<HeaderValue, CoreError> {
    let api_key = api_key
        .filter(|key| !key.is_empty())
        .ok_or(CoreError::MissingCredential)?;

    let value = authorization_value(api_key);
    let offending = offending_chars(&value);
    if !offending.is_empty() {
        warn!(?offending, "credential contains unencodable characters");
        return Err(CoreError::UnencodableCredential(offending));
    }

    // Every char is now <= U+00FF, i.e. one Latin-1 byte.
    let bytes: Vec<u8> = value
        .chars()
        .filter_map(|c| u8::try_from(u32::from(c)).ok())
        .collect();
    let mut header =
        HeaderValue::from_bytes(&bytes).map_err(|_| CoreError::UnencodableCredential(Vec::new()))?;
    header.set_sensitive(true);
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_key_builds_header() {
        let header = authorization_header(Some("sk-test-123")).unwrap();
        assert_eq!(header.as_bytes(), b"Bearer sk-test-123");
        assert!(header.is_sensitive());
    }

    #[test]
    fn latin1_key_is_sent_as_single_bytes() {
        let header = authorization_header(Some("sk-é")).unwrap();
        assert_eq!(header.as_bytes(), b"Bearer sk-\xe9");
    }

    #[test]
    fn missing_or_empty_key() {
        assert!(matches!(authorization_header(None), Err(CoreError::MissingCredential)));
        assert!(matches!(authorization_header(Some("")), Err(CoreError::MissingCredential)));
    }

    #[test]
    fn astral_chars_take_one_index_each() {
        let Err(CoreError::UnencodableCredential(details)) = authorization_header(Some("sk-🦊🦊")) else {
            panic!("expected unencodable credential");
        };
        assert_eq!(
            details,
            vec![
                OffendingChar { index: 10, ord: 0x1F98A },
                OffendingChar { index: 11, ord: 0x1F98A },
            ]
        );
    }

    #[test]
    fn wide_chars_are_itemized() {
        let Err(CoreError::UnencodableCredential(details)) = authorization_header(Some("sk-✓x€")) else {
            panic!("expected unencodable credential");
        };
        assert_eq!(
            details,
            vec![
                OffendingChar { index: 10, ord: 0x2713 },
                OffendingChar { index: 12, ord: 0x20AC },
            ]
        );
    }

    #[test]
    fn control_chars_are_offending_but_tab_is_not() {
        assert_eq!(
            offending_chars("Bearer a\nb\u{7f}"),
            vec![
                OffendingChar { index: 8, ord: 0x0A },
                OffendingChar { index: 10, ord: 0x7F },
            ]
        );
        assert!(offending_chars("Bearer a\tb").is_empty());
    }

    #[test]
    fn error_text_does_not_include_key() {
        let err = authorization_header(Some("sk-secret-✓")).unwrap_err();
        assert!(!err.to_string().contains("sk-secret"));
    }
}
