//! Handler for the liveness endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /api/healthz`
///
/// Does not touch storage, so it stays green while the database is down.
///
/// # Response
///
/// ```json
/// { "ok": true, "version": "0.1.0" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    })
}
