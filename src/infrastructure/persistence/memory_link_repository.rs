//! In-memory implementation of link repository.
//!
//! Used with `STORAGE_BACKEND=memory` and by the HTTP integration tests. State
//! is lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Store {
    links: HashMap<String, Link>,
    next_id: i64,
}

/// Process-local link store.
///
/// Every operation runs under a single lock acquisition, which gives the same
/// uniqueness and atomic-increment guarantees as the SQL backend.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    store: Mutex<Store>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::StoreUnavailable("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.lock()?;

        if store.links.contains_key(&new_link.code) {
            return Err(AppError::CodeConflict);
        }

        store.next_id += 1;
        let link = Link::new(
            store.next_id,
            new_link.code,
            new_link.original_url,
            Utc::now(),
        );
        store.links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.lock()?.links.get(code).cloned())
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut store = self.lock()?;

        let Some(link) = store.links.get_mut(code) else {
            return Ok(None);
        };

        link.click_count += 1;
        link.last_clicked_at = Some(Utc::now().max(link.created_at));

        Ok(Some(link.clone()))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.lock()?.links.values().cloned().collect();
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(links)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.lock()?.links.remove(code).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(code: &str, url: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            original_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryLinkRepository::new();

        let link = repo
            .insert(new_link("abc123", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(link.id, 1);
        assert_eq!(link.click_count, 0);

        let found = repo.find_by_code("abc123").await.unwrap();
        assert_eq!(found, Some(link));
    }

    #[tokio::test]
    async fn test_find_is_case_sensitive() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("AbCdEf", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.find_by_code("abcdef").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_is_conflict() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("dup123", "https://a.com"))
            .await
            .unwrap();

        let result = repo.insert(new_link("dup123", "https://b.com")).await;
        assert!(matches!(result, Err(AppError::CodeConflict)));

        let kept = repo.find_by_code("dup123").await.unwrap().unwrap();
        assert_eq!(kept.original_url, "https://a.com");
    }

    #[tokio::test]
    async fn test_record_click_missing_code() {
        let repo = InMemoryLinkRepository::new();
        assert!(repo.record_click("nothere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_record_click_updates_stats() {
        let repo = InMemoryLinkRepository::new();
        let created = repo
            .insert(new_link("click1", "https://example.com"))
            .await
            .unwrap();

        let clicked = repo.record_click("click1").await.unwrap().unwrap();
        assert_eq!(clicked.click_count, 1);
        assert!(clicked.last_clicked_at.unwrap() >= created.created_at);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_clicks_are_not_lost() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        repo.insert(new_link("hot123", "https://example.com"))
            .await
            .unwrap();

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.record_click("hot123").await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let link = repo.find_by_code("hot123").await.unwrap().unwrap();
        assert_eq!(link.click_count, 100);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryLinkRepository::new();
        for code in ["aaaaaa", "bbbbbb", "cccccc"] {
            repo.insert(new_link(code, "https://example.com"))
                .await
                .unwrap();
        }

        let codes: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(codes, vec!["cccccc", "bbbbbb", "aaaaaa"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("gone12", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.delete("gone12").await.unwrap());
        assert!(!repo.delete("gone12").await.unwrap());
        assert!(repo.find_by_code("gone12").await.unwrap().is_none());
    }
}
