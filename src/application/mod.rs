//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers and the admin CLI.
//!
//! - [`services::url_service::UrlService`] - Shortened URL lookup and mutation

pub mod services;
