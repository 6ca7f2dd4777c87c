//! Handlers for record management endpoints (exists, get, create, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shortened_url::{
    CreateShortenedUrlRequest, ShortenedUrlResponse, UpdateShortenedUrlRequest,
};
use crate::domain::entities::NewShortenedUrl;
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether a token is in use.
///
/// # Endpoint
///
/// `GET /exists/{token}`
///
/// # Response
///
/// A bare JSON boolean: `true` or `false`.
pub async fn exists_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<bool>, AppError> {
    let exists = state.url_service.exists(&token).await?;
    Ok(Json(exists))
}

/// Returns a record by id.
///
/// # Endpoint
///
/// `GET /getUrlById/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no record has this id.
pub async fn get_by_id_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ShortenedUrlResponse>, AppError> {
    let record = state.url_service.get_by_id(id).await?;
    Ok(Json(record.into()))
}

/// Returns a record by token.
///
/// # Endpoint
///
/// `GET /get/{token}`
///
/// # Response
///
/// The record, or JSON `null` with 200 OK when the token is unknown.
pub async fn get_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Option<ShortenedUrlResponse>>, AppError> {
    let record = state.url_service.get_by_token(&token).await?;
    Ok(Json(record.map(Into::into)))
}

/// Creates a record under the path token.
///
/// # Endpoint
///
/// `POST /create/{token}`
///
/// # Request Body
///
/// ```json
/// {
///   "shortToken": "a",             // optional, must equal the path token
///   "originalUrl": "http://abc.com",
///   "ownerId": 1,                  // optional, default 0
///   "enabled": true                // optional, default true
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the token already exists.
pub async fn create_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CreateShortenedUrlRequest>,
) -> Result<(StatusCode, Json<ShortenedUrlResponse>), AppError> {
    payload.validate()?;
    ensure_same_token(&token, payload.short_token.as_deref())?;

    let new_record = NewShortenedUrl {
        short_token: token,
        original_url: payload.original_url,
        owner_id: payload.owner_id,
        enabled: payload.enabled.unwrap_or(true),
    };

    let created = state.url_service.create(new_record).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Updates the mutable fields of a record.
///
/// # Endpoint
///
/// `PATCH /update/{token}`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "http://xyz.com", "enabled": false }
/// ```
///
/// Both fields are optional; `lastModifiedAt` is refreshed either way.
///
/// # Errors
///
/// Returns 404 Not Found if the token does not exist.
/// Returns 400 Bad Request if validation fails.
pub async fn update_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateShortenedUrlRequest>,
) -> Result<Json<ShortenedUrlResponse>, AppError> {
    payload.validate()?;
    ensure_same_token(&token, payload.short_token.as_deref())?;

    let updated = state
        .url_service
        .update(&token, payload.into_patch())
        .await?;

    Ok(Json(updated.into()))
}

/// Deletes a record.
///
/// # Endpoint
///
/// `DELETE /delete/{token}`
///
/// # Errors
///
/// Returns 404 Not Found if the token does not exist.
pub async fn delete_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    tracing::info!(token = %token, "Deleting short URL");
    state.url_service.delete(&token).await?;

    Ok(StatusCode::ACCEPTED)
}

/// The path token is authoritative; a body token may only repeat it.
fn ensure_same_token(path_token: &str, body_token: Option<&str>) -> Result<(), AppError> {
    match body_token {
        Some(body) if body != path_token => Err(AppError::bad_request(
            "Token in body does not match token in path",
            json!({ "path": path_token, "body": body }),
        )),
        _ => Ok(()),
    }
}
