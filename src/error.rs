//! Application error type shared by the registry and the HTTP layer.
//!
//! Every failure a request can hit is one [`AppError`] variant. The `Display`
//! text of the client-facing variants is exactly the message returned in the
//! JSON body, so handlers never build error strings themselves.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::db_error::is_unique_violation_on_code;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `originalUrl` missing, null, empty, or not a string.
    #[error("URL is required")]
    UrlRequired,

    #[error("Invalid URL format")]
    InvalidUrl,

    /// `code` was supplied with a non-string JSON value.
    #[error("Code must be a string")]
    CodeNotString,

    #[error("Code must be 6-8 alphanumeric characters")]
    InvalidCode,

    #[error("Code already exists")]
    CodeConflict,

    /// Every generated candidate collided with an existing code.
    #[error("Failed to generate unique code")]
    CodeGenerationExhausted,

    #[error("Link not found")]
    NotFound,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Transient storage failure. The payload is logged, never sent to clients.
    #[error("Storage unavailable: {0}")]
    StoreUnavailable(String),

    /// Storage failure inside a named API operation; `message` is what the
    /// client sees, `detail` is only logged.
    #[error("{message}: {detail}")]
    OperationFailed {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UrlRequired
            | AppError::InvalidUrl
            | AppError::CodeNotString
            | AppError::InvalidCode
            | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::CodeConflict => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::CodeGenerationExhausted
            | AppError::StoreUnavailable(_)
            | AppError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to API clients.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidBody(_) => "Invalid request body".to_string(),
            AppError::StoreUnavailable(_) => "Internal server error".to_string(),
            AppError::OperationFailed { message, .. } => (*message).to_string(),
            other => other.to_string(),
        }
    }

    /// Names the operation a storage failure happened in, e.g.
    /// `"Failed to fetch links"`. Other errors pass through unchanged.
    pub fn during(self, message: &'static str) -> Self {
        match self {
            AppError::StoreUnavailable(detail) => AppError::OperationFailed { message, detail },
            other => other,
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.public_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_code(&e) {
            return AppError::CodeConflict;
        }

        AppError::StoreUnavailable(e.to_string())
    }
}
