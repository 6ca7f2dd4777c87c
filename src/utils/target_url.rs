//! Validation of redirect target URLs.
//!
//! Targets are checked but never rewritten: a resolved token must return the
//! exact string that was stored.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain control characters or surrounding whitespace")]
    UnsafeCharacters,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`,
/// `file:` so the redirect endpoint cannot be used to smuggle them.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`TargetUrlError::MissingHost`] when no host is present.
/// Returns [`TargetUrlError::UnsafeCharacters`] for input that the URL parser
/// would silently clean up (tabs, newlines, other ASCII controls, leading or
/// trailing whitespace); stored verbatim it could not be sent as `Location`.
pub fn validate_target_url(input: &str) -> Result<(), TargetUrlError> {
    if input.chars().any(|c| c.is_ascii_control()) || input.trim() != input {
        return Err(TargetUrlError::UnsafeCharacters);
    }

    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target_url("http://abc.com").is_ok());
        assert!(validate_target_url("https://example.com/path?q=1#frag").is_ok());
        assert!(validate_target_url("http://localhost:8080").is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            validate_target_url("abc.com/path"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        assert_eq!(
            validate_target_url("javascript:alert(1)"),
            Err(TargetUrlError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_target_url("file:///etc/passwd"),
            Err(TargetUrlError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_target_url("ftp://example.com"),
            Err(TargetUrlError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_control_characters() {
        for input in [
            "http://abc.com/a\nb",
            "http://abc.com/a\tb",
            "http://abc.com/\r\nSet-Cookie: x=1",
            "http://abc.com/\u{7f}",
            "\u{1}http://abc.com",
        ] {
            assert_eq!(
                validate_target_url(input),
                Err(TargetUrlError::UnsafeCharacters),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert_eq!(
            validate_target_url(" http://abc.com"),
            Err(TargetUrlError::UnsafeCharacters)
        );
        assert_eq!(
            validate_target_url("http://abc.com "),
            Err(TargetUrlError::UnsafeCharacters)
        );
    }

    #[test]
    fn test_accepted_urls_are_valid_location_headers() {
        for input in ["http://abc.com", "https://example.com/p?q=a%20b#f"] {
            assert!(validate_target_url(input).is_ok());
            assert!(axum::http::HeaderValue::from_str(input).is_ok());
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_target_url("").is_err());
    }
}
