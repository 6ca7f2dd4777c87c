//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, migrations, sample preloading and the Axum server
//! lifecycle.

use crate::application::services::{UrlService, sample_records};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::ShortenedUrlRepository;
use crate::infrastructure::persistence::{MemoryShortenedUrlRepository, PgShortenedUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL pool + migrations, or in-memory)
/// - Sample records, when `PRELOAD_SAMPLES` is enabled
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Preloading fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_repository(&config).await?;

    if config.preload_samples {
        let service = UrlService::new(repository.clone());
        let inserted = service
            .preload(sample_records())
            .await
            .context("Failed to preload sample records")?;
        tracing::info!(inserted, "Sample records preloaded");
    }

    let state = AppState::new(repository)
        .with_public_base_url(config.public_base_url.clone())
        .with_diagnostic_redirect(config.diagnostic_redirect.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the repository selected by `STORAGE_BACKEND`.
///
/// For PostgreSQL this opens the pool and applies embedded migrations.
pub async fn connect_repository(config: &Config) -> Result<Arc<dyn ShortenedUrlRepository>> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = connect_pool(config).await?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgShortenedUrlRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on restart");
            Ok(Arc::new(MemoryShortenedUrlRepository::new()))
        }
    }
}

/// Opens a PostgreSQL pool using the pool settings from `config`.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres storage backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
