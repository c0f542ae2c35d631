//! Validation of redirect targets.
//!
//! Targets are checked but stored exactly as submitted, so a resolved link always
//! returns the same string it was created with.

use url::Url;

/// Longest target accepted, matching the width of the `links.long_url` column.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("URL must not contain control characters")]
    ControlCharacter,
}

/// Checks that `input` is an absolute HTTP or HTTPS URL with a host.
///
/// # Security
///
/// Rejects potentially dangerous schemes like `javascript:`, `data:` and `file:`.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlValidationError::MissingHost`] when the URL has no host.
/// Returns [`UrlValidationError::TooLong`] past [`MAX_URL_LENGTH`] characters.
/// Returns [`UrlValidationError::ControlCharacter`] for tabs, line breaks and other
/// control characters, which the parser would drop but a `Location` header cannot carry.
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_long_url("http://example.com").is_ok());
        assert!(validate_long_url("https://example.com/page").is_ok());
        assert!(validate_long_url("https://EXAMPLE.COM:443/Path?key=VALUE#anchor").is_ok());
    }

    #[test]
    fn test_accepts_ip_and_localhost() {
        assert!(validate_long_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_long_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            validate_long_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_long_url(""),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_long_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_other_protocols() {
        for url in [
            "ftp://example.com/file.txt",
            "file:///home/user/document.txt",
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "mailto:test@example.com",
        ] {
            assert!(
                matches!(
                    validate_long_url(url),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_over_length() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            validate_long_url(&url),
            Err(UrlValidationError::TooLong)
        ));
    }

    #[test]
    fn test_accepts_long_path_under_limit() {
        let url = format!("https://example.com/{}", "a".repeat(2000));
        assert!(validate_long_url(&url).is_ok());
    }

    #[test]
    fn test_rejects_control_characters() {
        for url in [
            "https://example.com/pa\nth",
            "https://example.com/pa\rth",
            "https://example.com/pa\tth",
            "https://example.com/\x01",
            "https://exa\nmple.com/",
            "https://example.com/\x7f",
        ] {
            assert!(
                matches!(
                    validate_long_url(url),
                    Err(UrlValidationError::ControlCharacter)
                ),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_non_ascii_path() {
        assert!(validate_long_url("https://example.com/caf\u{e9}").is_ok());
    }
}
