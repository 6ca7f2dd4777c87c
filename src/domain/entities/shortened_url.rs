//! Shortened URL entity.

use chrono::{DateTime, Duration, Utc};

/// A persisted mapping from a short token to an original URL.
///
/// `id`, `short_token` and `created_at` never change after creation. Only
/// `original_url`, `enabled` and `last_modified_at` are mutable, through
/// [`ShortenedUrl::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShortenedUrl {
    pub id: i64,
    pub short_token: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
    pub owner_id: i64,
    /// Stored and updatable, but not consulted when redirecting.
    pub enabled: bool,
}

impl ShortenedUrl {
    /// Creates a new ShortenedUrl instance.
    pub fn new(
        id: i64,
        short_token: String,
        original_url: String,
        created_at: DateTime<Utc>,
        last_modified_at: DateTime<Utc>,
        owner_id: i64,
        enabled: bool,
    ) -> Self {
        Self {
            id,
            short_token,
            original_url,
            created_at,
            last_modified_at,
            owner_id,
            enabled,
        }
    }

    /// Applies a patch and stamps the modification time.
    ///
    /// `last_modified_at` strictly advances even when the clock has not
    /// moved since the previous write.
    pub fn apply(&mut self, patch: ShortenedUrlPatch, now: DateTime<Utc>) {
        if let Some(url) = patch.original_url {
            self.original_url = url;
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }

        let floor = self.last_modified_at + Duration::microseconds(1);
        self.last_modified_at = now.max(floor);
    }
}

/// Input data for creating a new record.
///
/// The store assigns `id` and both timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortenedUrl {
    pub short_token: String,
    pub original_url: String,
    pub owner_id: i64,
    pub enabled: bool,
}

impl NewShortenedUrl {
    pub fn new(
        short_token: impl Into<String>,
        original_url: impl Into<String>,
        owner_id: i64,
    ) -> Self {
        Self {
            short_token: short_token.into(),
            original_url: original_url.into(),
            owner_id,
            enabled: true,
        }
    }
}

/// Partial update for an existing record.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortenedUrlPatch {
    pub original_url: Option<String>,
    pub enabled: Option<bool>,
}
