//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /{code}`       - Short link redirect (302) with click counting
//! - `GET  /code/{code}`  - Stats page
//! - `/api/*`             - JSON API (links, healthz)
//! - anything else        - HTML 404 page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request time limit
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{timeout, tracing as request_tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::fallback_handler;
use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path
/// normalization. Integration tests drive this directly.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .merge(web::routes::routes())
        .nest("/api", api::routes::routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(request_tracing::layer())
}

/// Constructs the application service: [`build_router`] behind trailing-slash
/// trimming.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, request_timeout))
}
