//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, health_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /links`         - List all links, newest first
/// - `POST   /links`         - Create a short link
/// - `DELETE /links/{code}`  - Delete a short link
/// - `GET    /healthz`       - Liveness probe
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/{code}", delete(delete_link_handler))
        .route("/healthz", get(health_handler))
}
