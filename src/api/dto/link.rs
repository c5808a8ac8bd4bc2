//! DTOs for the link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::Link;
use crate::error::AppError;

/// Request body for `POST /api/links`.
///
/// Fields are kept as raw JSON values so that a wrong type produces the same
/// error messages as a missing field instead of a generic deserialization
/// failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub original_url: Option<Value>,

    #[serde(default)]
    pub code: Option<Value>,
}

impl CreateLinkRequest {
    /// Extracts the target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlRequired`] if the field is missing, null, empty,
    /// or not a string.
    pub fn original_url(&self) -> Result<&str, AppError> {
        match &self.original_url {
            Some(Value::String(url)) if !url.is_empty() => Ok(url.as_str()),
            _ => Err(AppError::UrlRequired),
        }
    }

    /// Extracts the optional requested code.
    ///
    /// Falsy values (missing, `null`, `""`, `false`, `0`) all mean
    /// "generate one".
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeNotString`] for any other non-string value.
    pub fn requested_code(&self) -> Result<Option<&str>, AppError> {
        match &self.code {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
            Some(Value::String(code)) if code.is_empty() => Ok(None),
            Some(Value::String(code)) => Ok(Some(code.as_str())),
            Some(_) => Err(AppError::CodeNotString),
        }
    }
}

/// JSON representation of a link.
///
/// Timestamps serialize as RFC 3339 (ISO-8601); `lastClickedAt` is `null`
/// until the first redirect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub click_count: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            original_url: link.original_url,
            click_count: link.click_count,
            last_clicked_at: link.last_clicked_at,
            created_at: link.created_at,
        }
    }
}
