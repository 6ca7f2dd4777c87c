//! Repository implementations.
//!
//! - [`PgShortenedUrlRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryShortenedUrlRepository`] - In-process storage for development and tests

pub mod memory_shortened_url_repository;
pub mod pg_shortened_url_repository;

pub use memory_shortened_url_repository::MemoryShortenedUrlRepository;
pub use pg_shortened_url_repository::PgShortenedUrlRepository;
