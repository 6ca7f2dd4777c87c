//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::error::AppError;
use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/home.html` with the endpoint list and record count.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub version: &'static str,
    pub record_count: i64,
    pub diagnostic_path: Option<String>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let record_count = state.url_service.count().await?;

    Ok(HomeTemplate {
        version: env!("CARGO_PKG_VERSION"),
        record_count,
        diagnostic_path: state.diagnostic_redirect.map(|d| d.path),
    })
}
