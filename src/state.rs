//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Registry type shared by the HTTP layer, independent of the storage backend.
pub type Registry = LinkService<dyn LinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<Registry>,
    /// Public base URL used to display short links, without trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            base_url,
        }
    }

    /// Full short URL for a code, e.g. `http://localhost:3000/abc123`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryLinkRepository;

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let state = AppState::new(Arc::new(InMemoryLinkRepository::new()), "https://s.test/");
        assert_eq!(state.short_url("abc123"), "https://s.test/abc123");
    }
}
