//! Record management route configuration.

use crate::api::handlers::{
    create_handler, delete_handler, exists_handler, get_by_id_handler, get_handler,
    update_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

/// Routes for reading and mutating records.
///
/// # Endpoints
///
/// - `GET    /exists/{token}`  - Whether a token is in use
/// - `GET    /getUrlById/{id}` - Record by id
/// - `POST   /create/{token}`  - Create a record
/// - `GET    /get/{token}`     - Record by token, or `null`
/// - `PATCH  /update/{token}`  - Update URL / enabled flag
/// - `DELETE /delete/{token}`  - Delete a record
pub fn record_routes() -> Router<AppState> {
    Router::new()
        .route("/exists/{token}", get(exists_handler))
        .route("/getUrlById/{id}", get(get_by_id_handler))
        .route("/create/{token}", post(create_handler))
        .route("/get/{token}", get(get_handler))
        .route("/update/{token}", patch(update_handler))
        .route("/delete/{token}", delete(delete_handler))
}
