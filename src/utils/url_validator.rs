//! Syntactic URL validation.
//!
//! A URL is accepted iff it parses as an absolute URL with a scheme and a
//! host or path. No reachability probe and no scheme allow-list.

use url::Url;

/// Reasons a URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must not contain control characters")]
    ControlCharacter,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has neither host nor path")]
    MissingTarget,
}

/// Validates that `input` is an absolute URL.
///
/// The input is checked as given; it is not trimmed or normalized, and the
/// caller stores the original string.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for an empty or whitespace-only string
/// - [`UrlValidationError::ControlCharacter`] for tabs, newlines and other
///   ASCII control characters, which the URL parser would silently strip but
///   a `Location` header cannot carry
/// - [`UrlValidationError::InvalidFormat`] for relative URLs and grammar errors
/// - [`UrlValidationError::MissingTarget`] when the URL carries only a scheme
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path").is_ok());
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    let has_host = url.host_str().is_some_and(|h| !h.is_empty());
    let has_path = !url.path().is_empty();
    if !has_host && !has_path {
        return Err(UrlValidationError::MissingTarget);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_with_path() {
        assert!(validate_url("https://example.com/path").is_ok());
    }

    #[test]
    fn test_accepts_plain_host() {
        assert!(validate_url("https://news.ycombinator.com").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
    }

    #[test]
    fn test_accepts_query_and_fragment() {
        assert!(validate_url("https://example.com/search?q=rust#top").is_ok());
    }

    #[test]
    fn test_accepts_non_http_schemes() {
        assert!(validate_url("ftp://files.example.com/pub").is_ok());
        assert!(validate_url("mailto:someone@example.com").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(matches!(
            validate_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_url("/relative/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(validate_url(":\\//aa.ww.http").is_err());
        assert!(validate_url("https://").is_err());
        assert!(validate_url("http://[::1").is_err());
    }

    #[test]
    fn test_rejects_control_characters() {
        for input in [
            "https://exa\nmple.com/x",
            "https://example.com/a\tb",
            "\u{1}https://example.com",
            "https://example.com/\r",
            "https://example.com/\u{7f}",
        ] {
            assert_eq!(
                validate_url(input),
                Err(UrlValidationError::ControlCharacter),
                "expected ControlCharacter for {input:?}"
            );
        }
    }

    #[test]
    fn test_accepts_non_ascii_host() {
        assert!(validate_url("https://bücher.example/straße").is_ok());
    }
}
