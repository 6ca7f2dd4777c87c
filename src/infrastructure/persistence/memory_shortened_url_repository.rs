//! In-process implementation of the shortened URL repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::domain::repositories::{ShortenedUrlRepository, page_window};
use crate::error::{AppError, SHORT_TOKEN_CONSTRAINT};

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    records: BTreeMap<i64, ShortenedUrl>,
    token_index: HashMap<String, i64>,
}

/// Repository backed by process memory.
///
/// Used for local development (`STORAGE_BACKEND=memory`) and handler tests.
/// A single lock covers both maps, so id assignment and the token uniqueness
/// check happen atomically, mirroring the constraint of the SQL schema.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryShortenedUrlRepository {
    store: RwLock<Store>,
}

impl MemoryShortenedUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortenedUrlRepository for MemoryShortenedUrlRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<ShortenedUrl>, AppError> {
        let store = self.store.read().await;

        Ok(store
            .token_index
            .get(token)
            .and_then(|id| store.records.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<ShortenedUrl, AppError> {
        let store = self.store.read().await;

        store
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "id": id })))
    }

    async fn insert(&self, new_record: NewShortenedUrl) -> Result<ShortenedUrl, AppError> {
        let mut store = self.store.write().await;

        if store.token_index.contains_key(&new_record.short_token) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": SHORT_TOKEN_CONSTRAINT }),
            ));
        }

        store.next_id += 1;
        let id = store.next_id;
        let now = Utc::now();

        let record = ShortenedUrl::new(
            id,
            new_record.short_token,
            new_record.original_url,
            now,
            now,
            new_record.owner_id,
            new_record.enabled,
        );

        store.token_index.insert(record.short_token.clone(), id);
        store.records.insert(id, record.clone());

        Ok(record)
    }

    async fn update(&self, record: ShortenedUrl) -> Result<ShortenedUrl, AppError> {
        let mut store = self.store.write().await;

        let Some(existing) = store.records.get_mut(&record.id) else {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "id": record.id, "token": record.short_token }),
            ));
        };

        existing.original_url = record.original_url;
        existing.enabled = record.enabled;
        existing.last_modified_at = record.last_modified_at;

        Ok(existing.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.store.write().await;

        match store.records.remove(&id) {
            Some(removed) => {
                store.token_index.remove(&removed.short_token);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.read().await.records.len() as i64)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<ShortenedUrl>, AppError> {
        let (limit, offset) = page_window(page, page_size);
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self
            .store
            .read()
            .await
            .records
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }
}
