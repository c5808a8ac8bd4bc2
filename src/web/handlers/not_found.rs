//! "Link Not Found" page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Template for the 404 page shown for unknown short codes and paths.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}

/// Renders the 404 page.
pub fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response()
}

/// Router fallback for paths that match no route.
pub async fn fallback_handler() -> Response {
    not_found_page()
}
