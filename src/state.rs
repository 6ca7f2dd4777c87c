//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::config::DiagnosticRedirect;
use crate::domain::repositories::ShortenedUrlRepository;

/// Service used by handlers, erased over the storage backend.
pub type SharedUrlService = Arc<UrlService<dyn ShortenedUrlRepository>>;

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub url_service: SharedUrlService,
    /// Redirect target for unknown tokens; derived from the request when `None`.
    pub public_base_url: Option<String>,
    pub diagnostic_redirect: Option<DiagnosticRedirect>,
}

impl AppState {
    /// Creates state over the given repository with no base URL override and
    /// no diagnostic route.
    pub fn new(repository: Arc<dyn ShortenedUrlRepository>) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository)),
            public_base_url: None,
            diagnostic_redirect: None,
        }
    }

    pub fn with_public_base_url(mut self, public_base_url: Option<String>) -> Self {
        self.public_base_url = public_base_url;
        self
    }

    /// Sets the diagnostic route and reserves its segment so no record can be
    /// created under a token the route would shadow.
    pub fn with_diagnostic_redirect(mut self, diagnostic: Option<DiagnosticRedirect>) -> Self {
        let reserved = diagnostic.iter().map(|d| d.segment().to_string());
        self.url_service = Arc::new(
            UrlService::new(self.url_service.repository()).with_reserved_tokens(reserved),
        );
        self.diagnostic_redirect = diagnostic;
        self
    }
}
