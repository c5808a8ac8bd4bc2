//! Link entity representing a short code mapping and its click statistics.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `code` and `original_url` never change after creation. `click_count` only
/// grows, and `last_clicked_at` stays `None` until the first redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub click_count: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a link that has never been clicked.
    pub fn new(id: i64, code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            original_url,
            click_count: 0,
            last_clicked_at: None,
            created_at,
        }
    }

    /// Returns true if the link has been redirected at least once.
    pub fn has_clicks(&self) -> bool {
        self.click_count > 0
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}
