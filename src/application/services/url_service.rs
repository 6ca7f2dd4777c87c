//! Lookup, creation and mutation of shortened URLs.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl, ShortenedUrlPatch};
use crate::domain::repositories::ShortenedUrlRepository;
use crate::error::AppError;
use crate::utils::target_url::validate_target_url;
use crate::utils::token::validate_token;

/// Service orchestrating repository calls for shortened URLs.
///
/// Lookups that find nothing return `None`; mutations against a missing
/// record return [`AppError::NotFound`] before anything is written.
pub struct UrlService<R: ShortenedUrlRepository + ?Sized> {
    repository: Arc<R>,
    /// Route segments claimed at runtime (the diagnostic redirect), refused
    /// as tokens on top of the fixed ones.
    reserved_tokens: Vec<String>,
}

impl<R: ShortenedUrlRepository + ?Sized> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            reserved_tokens: Vec::new(),
        }
    }

    /// Refuses `tokens` on create in addition to the fixed route segments.
    pub fn with_reserved_tokens(mut self, tokens: impl IntoIterator<Item = String>) -> Self {
        self.reserved_tokens = tokens.into_iter().collect();
        self
    }

    /// The repository this service writes through.
    pub fn repository(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }

    /// Translates a token into its original URL.
    ///
    /// A missing token is an expected outcome and yields `Ok(None)`.
    pub async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        match self.repository.find_by_token(token).await? {
            Some(record) => {
                info!(token, id = record.id, target = %record.original_url, "Resolved short URL");
                Ok(Some(record.original_url))
            }
            None => {
                info!(token, "No entry found for short URL");
                Ok(None)
            }
        }
    }

    /// Returns the full record for a token, if any.
    pub async fn get_by_token(&self, token: &str) -> Result<Option<ShortenedUrl>, AppError> {
        self.repository.find_by_token(token).await
    }

    /// Returns whether a record exists for a token.
    pub async fn exists(&self, token: &str) -> Result<bool, AppError> {
        Ok(self.repository.find_by_token(token).await?.is_some())
    }

    /// Retrieves a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<ShortenedUrl, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Creates a new record.
    ///
    /// Token collisions are not pre-checked; the store's uniqueness
    /// constraint decides, so concurrent creates cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the token or URL is malformed.
    /// Returns [`AppError::Conflict`] if the token is already taken.
    pub async fn create(&self, new_record: NewShortenedUrl) -> Result<ShortenedUrl, AppError> {
        validate_token(&new_record.short_token, &self.reserved_tokens)?;
        validate_url(&new_record.original_url)?;

        info!(token = %new_record.short_token, "Creating short URL");

        self.repository.insert(new_record).await
    }

    /// Applies a patch to the record identified by `token`.
    ///
    /// Only `original_url` and `enabled` can change; `last_modified_at` is
    /// stamped on every successful update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the token does not exist.
    /// Returns [`AppError::Validation`] if the new URL is malformed.
    pub async fn update(
        &self,
        token: &str,
        patch: ShortenedUrlPatch,
    ) -> Result<ShortenedUrl, AppError> {
        if let Some(url) = &patch.original_url {
            validate_url(url)?;
        }

        let Some(mut record) = self.repository.find_by_token(token).await? else {
            warn!(token, "Update requested for a short URL that does not exist");
            return Err(not_found(token));
        };

        record.apply(patch, Utc::now());
        let updated = self.repository.update(record).await?;

        info!(
            token,
            id = updated.id,
            target = %updated.original_url,
            enabled = updated.enabled,
            "Updated short URL"
        );

        Ok(updated)
    }

    /// Deletes the record identified by `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the token does not exist, including
    /// when the record disappears between lookup and delete.
    pub async fn delete(&self, token: &str) -> Result<(), AppError> {
        let Some(record) = self.repository.find_by_token(token).await? else {
            warn!(token, "Delete requested for a short URL that does not exist");
            return Err(not_found(token));
        };

        if !self.repository.delete_by_id(record.id).await? {
            return Err(not_found(token));
        }

        info!(token, id = record.id, "Deleted short URL");
        Ok(())
    }

    /// Inserts each record whose token is not yet taken.
    ///
    /// Returns the number of records inserted. Running it again is a no-op.
    pub async fn preload(&self, records: Vec<NewShortenedUrl>) -> Result<usize, AppError> {
        let mut inserted = 0;

        for record in records {
            if self.exists(&record.short_token).await? {
                continue;
            }

            match self.create(record).await {
                Ok(created) => {
                    info!(token = %created.short_token, id = created.id, "Preloaded short URL");
                    inserted += 1;
                }
                // Lost a race with another instance preloading the same token.
                Err(AppError::Conflict { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(inserted)
    }

    /// Total number of stored records.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Lists records page by page, ordered by id.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortenedUrl>, AppError> {
        self.repository.list(page, page_size).await
    }
}

/// Records inserted by [`UrlService::preload`] when `PRELOAD_SAMPLES` is on.
///
/// They double as liveness checks: `GET /a` must always redirect.
pub fn sample_records() -> Vec<NewShortenedUrl> {
    vec![
        NewShortenedUrl::new("a", "http://abc.com", 1),
        NewShortenedUrl::new("p", "http://pqr.com", 1),
    ]
}

fn validate_url(url: &str) -> Result<(), AppError> {
    validate_target_url(url).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })
}

fn not_found(token: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "token": token }))
}
