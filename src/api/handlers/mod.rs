//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod home;
pub mod records;
pub mod redirect;

pub use health::health_handler;
pub use home::home_handler;
pub use records::{
    create_handler, delete_handler, exists_handler, get_by_id_handler, get_handler,
    update_handler,
};
pub use redirect::{diagnostic_redirect_handler, redirect_handler};
