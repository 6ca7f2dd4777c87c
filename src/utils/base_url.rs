//! Derivation of the service's own base URL from a request.
//!
//! Used as the redirect target when a token cannot be resolved.

use axum::http::{HeaderMap, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Returns the base URL the client used to reach this service.
///
/// Priority:
/// 1. `configured` (`PUBLIC_BASE_URL`), with any trailing slash removed
/// 2. `{scheme}://{Host}` where scheme comes from `X-Forwarded-Proto`
///    (`http` when absent)
/// 3. `/`, the root of the current origin, when there is no usable `Host`
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:8080".parse().unwrap());
///
/// assert_eq!(request_base_url(&headers, None), "http://localhost:8080");
/// ```
pub fn request_base_url(headers: &HeaderMap, configured: Option<&str>) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let Some(host) = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
    else {
        return "/".to_string();
    };

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https"))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "http".to_string());

    format!("{scheme}://{host}")
}
