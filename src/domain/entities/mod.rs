//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! and partial updates:
//!
//! - [`ShortenedUrl`] - A persisted token → URL mapping
//! - [`NewShortenedUrl`] - Input for creating a record
//! - [`ShortenedUrlPatch`] - The mutable subset of a record

pub mod shortened_url;

pub use shortened_url::{NewShortenedUrl, ShortenedUrl, ShortenedUrlPatch};
