//! PostgreSQL implementation of the shortened URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::domain::repositories::{ShortenedUrlRepository, page_window};
use crate::error::AppError;

const SELECT_COLUMNS: &str =
    "id, short_token, original_url, created_at, last_modified_at, owner_id, enabled";

#[derive(sqlx::FromRow)]
struct ShortenedUrlRow {
    id: i64,
    short_token: String,
    original_url: String,
    created_at: DateTime<Utc>,
    last_modified_at: DateTime<Utc>,
    owner_id: i64,
    enabled: bool,
}

impl From<ShortenedUrlRow> for ShortenedUrl {
    fn from(r: ShortenedUrlRow) -> Self {
        ShortenedUrl::new(
            r.id,
            r.short_token,
            r.original_url,
            r.created_at,
            r.last_modified_at,
            r.owner_id,
            r.enabled,
        )
    }
}

/// PostgreSQL repository for shortened URL records.
///
/// Uses bound parameters for every query. Token uniqueness is enforced by the
/// `shortened_urls_short_token_key` constraint and surfaces as
/// [`AppError::Conflict`].
pub struct PgShortenedUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortenedUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortenedUrlRepository for PgShortenedUrlRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<ShortenedUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortenedUrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM shortened_urls WHERE short_token = $1"
        ))
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortenedUrl::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<ShortenedUrl, AppError> {
        let row = sqlx::query_as::<_, ShortenedUrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM shortened_urls WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ShortenedUrl::from).ok_or_else(|| {
            AppError::not_found("Short URL not found", json!({ "id": id }))
        })
    }

    async fn insert(&self, new_record: NewShortenedUrl) -> Result<ShortenedUrl, AppError> {
        let row = sqlx::query_as::<_, ShortenedUrlRow>(&format!(
            r#"
            INSERT INTO shortened_urls (short_token, original_url, owner_id, enabled)
            VALUES ($1, $2, $3, $4)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&new_record.short_token)
        .bind(&new_record.original_url)
        .bind(new_record.owner_id)
        .bind(new_record.enabled)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, record: ShortenedUrl) -> Result<ShortenedUrl, AppError> {
        let row = sqlx::query_as::<_, ShortenedUrlRow>(&format!(
            r#"
            UPDATE shortened_urls
            SET original_url = $2, enabled = $3, last_modified_at = $4
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(record.id)
        .bind(&record.original_url)
        .bind(record.enabled)
        .bind(record.last_modified_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ShortenedUrl::from).ok_or_else(|| {
            AppError::not_found(
                "Short URL not found",
                json!({ "id": record.id, "token": record.short_token }),
            )
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM shortened_urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shortened_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortenedUrl>, AppError> {
        let (limit, offset) = page_window(page, page_size);

        let rows = sqlx::query_as::<_, ShortenedUrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM shortened_urls ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortenedUrl::from).collect())
    }
}
