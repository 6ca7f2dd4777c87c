//! Helper functions for input validation and request handling.
//!
//! - [`token`] - Short token validation
//! - [`target_url`] - Redirect target validation
//! - [`base_url`] - Service base URL derivation from request headers

pub mod base_url;
pub mod target_url;
pub mod token;
