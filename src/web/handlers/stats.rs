//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found_page;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Template for the link statistics page.
///
/// Renders `templates/stats.html`. Values are preformatted so the template
/// stays free of logic.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub click_count: i64,
    pub last_clicked_at: String,
    pub created_at: String,
}

impl StatsTemplate {
    fn new(link: Link, short_url: String) -> Self {
        Self {
            code: link.code,
            short_url,
            original_url: link.original_url,
            click_count: link.click_count,
            last_clicked_at: link
                .last_clicked_at
                .map(format_timestamp)
                .unwrap_or_else(|| "Never".to_string()),
            created_at: format_timestamp(link.created_at),
        }
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// Reads the link without counting a click. Unknown codes get the 404 page.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve(&code).await {
        Ok(link) => {
            let short_url = state.short_url(&link.code);
            Ok(StatsTemplate::new(link, short_url).into_response())
        }
        Err(AppError::NotFound) => Ok(not_found_page()),
        Err(e) => Err(e),
    }
}
