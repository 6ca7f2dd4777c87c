//! HTTP middleware for request processing.

pub mod trace;
