//! Field validation for the ticket form
//!
//! Each text field has a pattern that is checked when the field loses focus.

use std::sync::LazyLock;

use regex::Regex;

use super::Field;

// `\s` in both patterns is Unicode White_Space, which excludes U+FEFF.

/// One or more alphabetic words separated by whitespace, first word 3+ letters
pub const NAME_PATTERN: &str = r"^[A-Za-z]{3,}(?:\s[A-Za-z]+)*$";

/// local@domain.tld with no whitespace and no extra `@`
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Longest GitHub username
pub const GITHUB_HANDLE_MAX_LEN: usize = 39;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("name pattern is valid"));

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Result of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether validation passed
    pub is_valid: bool,
    /// Error message if validation failed
    pub error: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// Create a failed validation result with an error message
    pub fn failure(message: String) -> Self {
        Self {
            is_valid: false,
            error: Some(message),
        }
    }
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// GitHub handle: 1-39 ASCII alphanumerics or hyphens, starting with an
/// alphanumeric, and every hyphen followed by an alphanumeric
///
/// Written by hand because `regex` has no look-ahead.
pub fn is_valid_github_handle(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.is_empty() || bytes.len() > GITHUB_HANDLE_MAX_LEN {
        return false;
    }
    if !bytes[0].is_ascii_alphanumeric() {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| {
        b.is_ascii_alphanumeric()
            || (b == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_alphanumeric))
    })
}

/// Message shown for a missing or malformed field
pub fn invalid_message(field: Field) -> String {
    format!("Please enter a valid {}!", field.title())
}

/// Validate a value against its field's pattern
pub fn validate_field(field: Field, value: &str) -> ValidationResult {
    let valid = match field {
        Field::Name => is_valid_name(value),
        Field::Email => is_valid_email(value),
        Field::Social => is_valid_github_handle(value),
    };
    if valid {
        ValidationResult::success()
    } else {
        ValidationResult::failure(invalid_message(field))
    }
}
