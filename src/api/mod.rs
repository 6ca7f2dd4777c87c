//! HTTP API layer for request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration for record management

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
