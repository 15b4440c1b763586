use crate::utils::error::{QuoteError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s().-]+$").unwrap());
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").unwrap());
static ZIP_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap());
static SESSION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap());

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(QuoteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_session_id(session_id: &str) -> Result<()> {
    if !SESSION_ID.is_match(session_id) {
        return Err(QuoteError::InvalidConfigValueError {
            field: "session_id".to_string(),
            value: session_id.to_string(),
            reason: "Use 1-64 letters, digits, '-' or '_'".to_string(),
        });
    }
    Ok(())
}

/// Normalizes a US phone number to `+1XXXXXXXXXX`.
///
/// Accepts the usual punctuation (`(541) 555-0100`, `541.555.0100`,
/// `+1 541 555 0100`). Returns `None` when the input is not a 10-digit
/// number, optionally prefixed with country code 1.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if !PHONE_CHARS.is_match(trimmed) {
        return None;
    }

    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    let national = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        _ => return None,
    };

    Some(format!("+1{}", national))
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL.is_match(raw.trim())
}

pub fn is_valid_zip(raw: &str) -> bool {
    ZIP_CODE.is_match(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("backend.endpoint", "https://example.com").is_ok());
        assert!(validate_url("backend.endpoint", "http://example.com").is_ok());
        assert!(validate_url("backend.endpoint", "").is_err());
        assert!(validate_url("backend.endpoint", "invalid-url").is_err());
        assert!(validate_url("backend.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("(541) 555-0100").as_deref(), Some("+15415550100"));
        assert_eq!(normalize_phone("541.555.0100").as_deref(), Some("+15415550100"));
        assert_eq!(normalize_phone("+1 541 555 0100").as_deref(), Some("+15415550100"));
        assert_eq!(normalize_phone("15415550100").as_deref(), Some("+15415550100"));
        assert!(normalize_phone("555-0100").is_none());
        assert!(normalize_phone("25415550100").is_none());
        assert!(normalize_phone("541-555-O100").is_none());
    }

    #[test]
    fn test_email_and_zip() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example.com"));
        assert!(is_valid_zip("97701"));
        assert!(is_valid_zip("97701-1234"));
        assert!(!is_valid_zip("9770"));
    }

    #[test]
    fn test_validate_session_id() {
        assert!(validate_session_id("sess_01-ab").is_ok());
        assert!(validate_session_id("../etc/passwd").is_err());
        assert!(validate_session_id("").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("backend.timeout_seconds", 5, 1, 60).is_ok());
        assert!(validate_range("backend.timeout_seconds", 0, 1, 60).is_err());
    }
}
