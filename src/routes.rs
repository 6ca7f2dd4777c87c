//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page
//! - `GET  /health`      - Health check
//! - record routes       - See [`crate::api::routes::record_routes`]
//! - `ANY  /test-id`     - Diagnostic redirect (path and target configurable)
//! - `ANY  /{token}`     - Short URL redirect
//!
//! Fixed routes take priority over `/{token}`, so those segments can never be
//! used as tokens.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    diagnostic_redirect_handler, health_handler, home_handler, redirect_handler,
};
use crate::api::middleware::trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::{any, get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// The diagnostic route is registered only when `state.diagnostic_redirect`
/// is set.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::record_routes());

    if let Some(diagnostic) = &state.diagnostic_redirect {
        router = router.route(&diagnostic.path, any(diagnostic_redirect_handler));
    }

    router
        .route("/{token}", any(redirect_handler))
        .with_state(state)
        .layer(trace::layer())
}

/// Constructs the application service: [`router`] wrapped in trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
