//! Handlers for short URL redirects.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Redirect,
};
use serde_json::json;
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::request_base_url;

/// Redirects a short token to its original URL.
///
/// # Endpoint
///
/// `ANY /{token}`
///
/// # Behavior
///
/// - **Known token**: 307 Temporary Redirect to the original URL
/// - **Unknown token**: 307 Temporary Redirect to the service's own base URL
///   (`PUBLIC_BASE_URL`, or scheme and `Host` of the request)
///
/// The `enabled` flag of the record is not consulted.
///
/// # Errors
///
/// Returns 500 Internal Server Error only when the store fails.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    match state.url_service.resolve(&token).await? {
        Some(target) => {
            info!(token = %token, target = %target, "Redirecting short URL");
            Ok(Redirect::temporary(&target))
        }
        None => {
            let fallback = request_base_url(&headers, state.public_base_url.as_deref());
            warn!(token = %token, fallback = %fallback, "Short URL not found, redirecting to base URL");
            Ok(Redirect::temporary(&fallback))
        }
    }
}

/// Unconditionally redirects to the configured diagnostic target.
///
/// # Endpoint
///
/// `ANY {DIAGNOSTIC_REDIRECT_PATH}` (default `/test-id`)
///
/// # Errors
///
/// Returns 404 Not Found if no diagnostic redirect is configured.
pub async fn diagnostic_redirect_handler(
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let Some(diagnostic) = state.diagnostic_redirect.as_ref() else {
        return Err(AppError::not_found(
            "Diagnostic redirect is disabled",
            json!({}),
        ));
    };

    info!(path = %diagnostic.path, target = %diagnostic.target, "Diagnostic redirect");
    Ok(Redirect::temporary(&diagnostic.target))
}
