//! Domain layer containing the shortened-URL entity and its storage contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define the contracts implemented by
//! [`crate::infrastructure::persistence`]; business rules live in
//! [`crate::application::services`].
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
