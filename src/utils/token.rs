//! Short token validation.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Maximum accepted token length.
pub const MAX_TOKEN_LENGTH: usize = 64;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("token regex is valid"));

/// Segments of fixed routes; a token equal to one of them could never be
/// redirected. The configurable diagnostic segment is passed in separately.
const RESERVED_TOKENS: &[&str] = &[
    "health",
    "exists",
    "get",
    "getUrlById",
    "create",
    "update",
    "delete",
];

/// Validates a caller-supplied short token.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a fixed route segment or one of `extra_reserved`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_token("a", &[]).is_ok());
/// assert!(validate_token("promo_2025", &[]).is_ok());
///
/// assert!(validate_token("", &[]).is_err());            // Empty
/// assert!(validate_token("with space", &[]).is_err());  // Bad character
/// assert!(validate_token("health", &[]).is_err());      // Reserved
/// assert!(validate_token("go", &["go".to_string()]).is_err());
/// ```
pub fn validate_token(token: &str, extra_reserved: &[String]) -> Result<(), AppError> {
    if token.is_empty() || token.len() > MAX_TOKEN_LENGTH {
        return Err(AppError::bad_request(
            format!("Token must be 1-{MAX_TOKEN_LENGTH} characters"),
            json!({ "provided_length": token.len() }),
        ));
    }

    if !TOKEN_REGEX.is_match(token) {
        return Err(AppError::bad_request(
            "Token can only contain letters, digits, hyphens and underscores",
            json!({ "token": token }),
        ));
    }

    if RESERVED_TOKENS.contains(&token) || extra_reserved.iter().any(|r| r == token) {
        return Err(AppError::bad_request(
            "This token is reserved",
            json!({ "token": token }),
        ));
    }

    Ok(())
}
