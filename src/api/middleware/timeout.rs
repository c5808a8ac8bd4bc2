//! Per-request time limit.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Aborts requests that run longer than `limit`, answering 408 Request Timeout.
///
/// Store calls run inside the request future, so this also bounds every
/// registry operation.
pub fn layer(limit: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, limit)
}
