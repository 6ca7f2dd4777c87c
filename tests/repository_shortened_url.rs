//! PostgreSQL repository tests.
//!
//! Each test gets a fresh database from `#[sqlx::test]` with the migrations
//! applied. Run with `DATABASE_URL` set and `cargo test -- --ignored`.

mod common;

use chrono::Duration;
use sqlx::PgPool;
use std::sync::Arc;
use shorturl::domain::entities::{NewShortenedUrl, ShortenedUrlPatch};
use shorturl::domain::repositories::ShortenedUrlRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgShortenedUrlRepository;

fn repo(pool: PgPool) -> PgShortenedUrlRepository {
    PgShortenedUrlRepository::new(Arc::new(pool))
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .insert(NewShortenedUrl::new("abc123", "https://example.com", 4))
        .await
        .unwrap();

    assert_eq!(created.short_token, "abc123");
    assert_eq!(created.original_url, "https://example.com");
    assert_eq!(created.owner_id, 4);
    assert!(created.enabled);

    let by_token = repo.find_by_token("abc123").await.unwrap().unwrap();
    assert_eq!(by_token, created);

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id, created);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_missing(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.find_by_token("notfound").await.unwrap().is_none());
    assert!(matches!(
        repo.find_by_id(42).await,
        Err(AppError::NotFound { .. })
    ));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_duplicate_token_conflicts(pool: PgPool) {
    let repo = repo(pool);

    repo.insert(NewShortenedUrl::new("dup", "https://one.example.com", 1))
        .await
        .unwrap();

    let result = repo
        .insert(NewShortenedUrl::new("dup", "https://two.example.com", 2))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(repo.count().await.unwrap(), 1);

    let kept = repo.find_by_token("dup").await.unwrap().unwrap();
    assert_eq!(kept.original_url, "https://one.example.com");
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update_persists_mutable_fields(pool: PgPool) {
    let repo = repo(pool);

    let mut record = repo
        .insert(NewShortenedUrl::new("a", "http://abc.com", 1))
        .await
        .unwrap();
    let created_at = record.created_at;

    record.apply(
        ShortenedUrlPatch {
            original_url: Some("http://xyz.com".to_string()),
            enabled: Some(false),
        },
        created_at + Duration::seconds(5),
    );

    let updated = repo.update(record).await.unwrap();
    assert_eq!(updated.original_url, "http://xyz.com");
    assert!(!updated.enabled);
    assert_eq!(updated.created_at, created_at);
    assert!(updated.last_modified_at > created_at);

    let reloaded = repo.find_by_token("a").await.unwrap().unwrap();
    assert_eq!(reloaded, updated);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_delete_by_id(pool: PgPool) {
    let repo = repo(pool);

    let record = repo
        .insert(NewShortenedUrl::new("gone", "https://example.com", 1))
        .await
        .unwrap();

    assert!(repo.delete_by_id(record.id).await.unwrap());
    assert!(!repo.delete_by_id(record.id).await.unwrap());
    assert!(repo.find_by_token("gone").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_count_and_list(pool: PgPool) {
    let repo = repo(pool);

    for token in ["t1", "t2", "t3"] {
        repo.insert(NewShortenedUrl::new(token, "https://example.com", 1))
            .await
            .unwrap();
    }

    assert_eq!(repo.count().await.unwrap(), 3);

    let first = repo.list(1, 2).await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].short_token, "t1");

    let second = repo.list(2, 2).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].short_token, "t3");
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_out_of_range_arguments(pool: PgPool) {
    let repo = repo(pool);

    for token in ["t1", "t2"] {
        repo.insert(NewShortenedUrl::new(token, "https://example.com", 1))
            .await
            .unwrap();
    }

    assert!(repo.list(i64::MAX, i64::MAX).await.unwrap().is_empty());

    let clamped = repo.list(1, -5).await.unwrap();
    assert_eq!(clamped.len(), 1);
    assert_eq!(clamped[0].short_token, "t1");
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_handlers_over_postgres(pool: PgPool) {
    let server = common::test_server(common::create_pg_test_state(pool));

    server
        .post("/create/a")
        .json(&serde_json::json!({ "originalUrl": "http://abc.com" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/a").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "http://abc.com");

    let response = server
        .post("/create/a")
        .json(&serde_json::json!({ "originalUrl": "http://other.com" }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}
