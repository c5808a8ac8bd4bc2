//! DTO for the liveness endpoint.

use serde::Serialize;

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
