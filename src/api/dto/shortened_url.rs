//! DTOs for shortened URL endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ShortenedUrl, ShortenedUrlPatch};

/// JSON representation of a stored record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrlResponse {
    pub id: i64,
    pub short_token: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
    pub owner_id: i64,
    pub enabled: bool,
}

impl From<ShortenedUrl> for ShortenedUrlResponse {
    fn from(r: ShortenedUrl) -> Self {
        Self {
            id: r.id,
            short_token: r.short_token,
            original_url: r.original_url,
            created_at: r.created_at,
            last_modified_at: r.last_modified_at,
            owner_id: r.owner_id,
            enabled: r.enabled,
        }
    }
}

/// Request body for `POST /create/{token}`.
///
/// Clients may send a whole record; `id` and timestamps are assigned by the
/// server and ignored here. The legacy field names `shortUrl`, `userId` and
/// `isEnabled` are accepted as aliases.
///
/// ```json
/// { "shortToken": "a", "originalUrl": "http://abc.com", "ownerId": 1 }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortenedUrlRequest {
    /// Must match the path token when present.
    #[serde(default, alias = "shortUrl")]
    #[validate(length(min = 1, max = 64))]
    pub short_token: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    #[serde(default, alias = "userId")]
    pub owner_id: i64,

    /// Defaults to `true`.
    #[serde(default, alias = "isEnabled")]
    pub enabled: Option<bool>,
}

/// Request body for `PATCH /update/{token}`.
///
/// Only `originalUrl` and `enabled` are mutable. Absent fields are left
/// unchanged; everything else in the body is ignored.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShortenedUrlRequest {
    /// Must match the path token when present.
    #[serde(default, alias = "shortUrl")]
    pub short_token: Option<String>,

    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: Option<String>,

    #[serde(default, alias = "isEnabled")]
    pub enabled: Option<bool>,
}

impl UpdateShortenedUrlRequest {
    pub fn into_patch(self) -> ShortenedUrlPatch {
        ShortenedUrlPatch {
            original_url: self.original_url,
            enabled: self.enabled,
        }
    }
}
