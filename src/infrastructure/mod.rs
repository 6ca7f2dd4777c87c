//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`persistence`] - Repository implementations (PostgreSQL and in-memory)

pub mod persistence;
