//! Target URL validation.
//!
//! A target must parse as an absolute URL with an `http` or `https` scheme.
//! The trimmed text is what gets stored; the parsed form is only used for
//! checking and as the header-safe form of non-ASCII targets when redirecting.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a target URL and returns its parsed form.
///
/// Surrounding whitespace is ignored. Rejects relative URLs and schemes such as
/// `javascript:`, `data:`, `ftp:` or `mailto:`.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::InvalidFormat`] for unparsable input and
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url =
        Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?q=1#frag").is_ok());
        assert!(validate_url("https://localhost:3000/test").is_ok());
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_ignores_surrounding_whitespace() {
        let url = validate_url("  https://example.com  ").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(matches!(validate_url(""), Err(UrlValidationError::Empty)));
        assert!(matches!(validate_url("   "), Err(UrlValidationError::Empty)));
    }

    #[test]
    fn test_relative_urls_are_invalid() {
        assert!(matches!(
            validate_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("/just/a/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_other_schemes_are_rejected() {
        for input in [
            "ftp://example.com/file.txt",
            "file:///etc/passwd",
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "mailto:test@example.com",
        ] {
            assert!(
                matches!(
                    validate_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_unicode_host_is_accepted() {
        let url = validate_url("https://münchen.de/straße").unwrap();
        assert!(url.as_str().is_ascii());
    }
}
