//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found_page;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Atomically increment the click count and stamp the click time
/// 2. Return 302 Found with `Location` set to the original URL
///
/// Unknown codes render the HTML "Link Not Found" page with status 404.
///
/// # Errors
///
/// Returns 500 if the store is unavailable.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = match state.link_service.redirect_and_count(&code).await {
        Ok(url) => url,
        Err(AppError::NotFound) => return Ok(not_found_page()),
        Err(e) => return Err(e),
    };

    let location = location_header(&original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a stored URL.
///
/// ASCII URLs are sent verbatim. Anything else (non-ASCII paths, IDN hosts) is
/// sent in its parsed form: percent-encoded path, punycode host.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if original_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original_url)
    {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::StoreUnavailable(format!("stored target is not a valid URL: {original_url}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_keeps_ascii_url() {
        let value = location_header("https://example.com/a?b=c").unwrap();
        assert_eq!(value, "https://example.com/a?b=c");
    }

    #[test]
    fn test_location_header_does_not_add_trailing_slash() {
        let value = location_header("https://example.com").unwrap();
        assert_eq!(value, "https://example.com");
    }

    #[test]
    fn test_location_header_punycodes_idn_host() {
        let value = location_header("https://bücher.example/katalog").unwrap();
        assert_eq!(value, "https://xn--bcher-kva.example/katalog");
    }

    #[test]
    fn test_location_header_encodes_unicode() {
        let value = location_header("https://example.com/straße").unwrap();
        assert_eq!(value, "https://example.com/stra%C3%9Fe");
    }
}
