#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use shorturl::config::{DEFAULT_DIAGNOSTIC_PATH, DEFAULT_DIAGNOSTIC_URL, DiagnosticRedirect};
use shorturl::domain::entities::{NewShortenedUrl, ShortenedUrl};
use shorturl::domain::repositories::ShortenedUrlRepository;
use shorturl::infrastructure::persistence::{MemoryShortenedUrlRepository, PgShortenedUrlRepository};
use shorturl::routes::{app_router, router};
use shorturl::state::AppState;

/// State over a fresh in-memory store, with the default diagnostic route.
pub fn create_test_state() -> (AppState, Arc<MemoryShortenedUrlRepository>) {
    let repo = Arc::new(MemoryShortenedUrlRepository::new());

    let state = AppState::new(repo.clone()).with_diagnostic_redirect(Some(DiagnosticRedirect {
        path: DEFAULT_DIAGNOSTIC_PATH.to_string(),
        target: DEFAULT_DIAGNOSTIC_URL.to_string(),
    }));

    (state, repo)
}

pub fn create_pg_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgShortenedUrlRepository::new(Arc::new(pool))))
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Server over the full application service, including path normalization.
pub fn test_app_server(state: AppState) -> TestServer {
    let service = axum::ServiceExt::<axum::extract::Request>::into_make_service(app_router(state));
    TestServer::new(service).unwrap()
}

pub async fn create_test_record(
    repo: &dyn ShortenedUrlRepository,
    token: &str,
    url: &str,
) -> ShortenedUrl {
    repo.insert(NewShortenedUrl::new(token, url, 1))
        .await
        .unwrap()
}
