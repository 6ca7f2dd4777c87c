//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.

pub mod shortened_url_repository;

pub use shortened_url_repository::{ShortenedUrlRepository, page_window};

#[cfg(test)]
pub use shortened_url_repository::MockShortenedUrlRepository;
