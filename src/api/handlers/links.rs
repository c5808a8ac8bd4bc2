//! Handlers for link management endpoints (list, create, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_url;

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 2,
///     "code": "aB3xYz9",
///     "originalUrl": "https://example.com",
///     "clickCount": 4,
///     "lastClickedAt": "2026-10-18T09:12:44.120Z",
///     "createdAt": "2026-10-17T18:03:10.004Z"
///   }
/// ]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state
        .link_service
        .list_links()
        .await
        .map_err(|e| e.during("Failed to fetch links"))?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "code": "promo26"   // optional, 6-8 alphanumeric characters
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: link JSON
/// - **400 Bad Request**: `URL is required`, `Invalid URL format`,
///   `Code must be a string`, `Code must be 6-8 alphanumeric characters`
/// - **409 Conflict**: `Code already exists`
/// - **500 Internal Server Error**: `Failed to generate unique code`,
///   `Failed to create link`
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    let original_url = payload.original_url()?;
    validate_url(original_url).map_err(|_| AppError::InvalidUrl)?;
    let requested_code = payload.requested_code()?;

    let link = state
        .link_service
        .create_link(original_url, requested_code)
        .await
        .map_err(|e| e.during("Failed to create link"))?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Deletes a short link permanently.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist or was already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .link_service
        .delete_link(&code)
        .await
        .map_err(|e| e.during("Failed to delete link"))?;

    Ok(StatusCode::NO_CONTENT)
}
