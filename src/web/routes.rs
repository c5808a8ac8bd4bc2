//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::stats_handler;
use axum::{Router, routing::get};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /code/{code}` - Statistics page for a specific link
pub fn routes() -> Router<AppState> {
    Router::new().route("/code/{code}", get(stats_handler))
}
