//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for links.
///
/// All mutable state of the service lives behind this trait. Implementations
/// must enforce code uniqueness themselves and must apply click accounting as
/// one atomic step; the registry never does read-modify-write on top of it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code is already taken.
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by exact, case-sensitive code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click count and stamps `last_clicked_at`.
    ///
    /// Returns the updated link, or `Ok(None)` if the code does not exist.
    /// Concurrent calls against one code must each add exactly one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Deletes a link.
    ///
    /// Returns `Ok(true)` if a link was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
