//! Repository trait for shortened URL data access.

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence gateway for shortened URL records.
///
/// Writing a record is split into [`insert`](Self::insert) for new records
/// and [`update`](Self::update) for existing ones. Uniqueness of
/// `short_token` is enforced by the store itself; callers never pre-check it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortenedUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryShortenedUrlRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenedUrlRepository: Send + Sync {
    /// Finds a record by its short token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortenedUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_token(&self, token: &str) -> Result<Option<ShortenedUrl>, AppError>;

    /// Finds a record by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<ShortenedUrl, AppError>;

    /// Inserts a new record, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short token already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_record: NewShortenedUrl) -> Result<ShortenedUrl, AppError>;

    /// Writes the mutable columns of an existing record, keyed by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record no longer exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, record: ShortenedUrl) -> Result<ShortenedUrl, AppError>;

    /// Deletes a record by id.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none matched.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all stored records.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists records ordered by id.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `page_size` - Number of items per page
    ///
    /// Out-of-range arguments are clamped with [`page_window`].
    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortenedUrl>, AppError>;
}

/// Converts 1-indexed `page` and `page_size` into a `(limit, offset)` pair.
///
/// Both arguments are clamped to at least 1 and the offset saturates, so
/// any pair of `i64` values yields a valid window.
pub fn page_window(page: i64, page_size: i64) -> (i64, i64) {
    let limit = page_size.max(1);
    let offset = (page.max(1) - 1).saturating_mul(limit);
    (limit, offset)
}
