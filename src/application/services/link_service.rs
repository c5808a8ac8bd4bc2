//! Code registry: link creation, lookup, redirect accounting and deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code};
use crate::utils::url_validator::validate_url;

/// Total insert attempts for a generated code (1 initial + 10 retries).
pub const MAX_GENERATION_ATTEMPTS: usize = 11;

/// Service owning code allocation and click accounting.
///
/// Holds no mutable state of its own; uniqueness and atomic counting are
/// delegated to the repository. `R` may be unsized, so the HTTP layer can share
/// a `LinkService<dyn LinkRepository>`.
pub struct LinkService<R: LinkRepository + ?Sized> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// With `requested_code`, that exact code is inserted. Without it, random
    /// codes are tried up to [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the URL is empty, relative, or not HTTP(S)
    /// - [`AppError::InvalidCode`] if the requested code is not 6-8 alphanumerics
    /// - [`AppError::CodeConflict`] if the requested code is taken
    /// - [`AppError::CodeGenerationExhausted`] if every generated code collided
    /// - [`AppError::StoreUnavailable`] on storage errors
    pub async fn create_link(
        &self,
        original_url: &str,
        requested_code: Option<&str>,
    ) -> Result<Link, AppError> {
        validate_url(original_url).map_err(|e| {
            tracing::debug!(reason = %e, "Rejected target URL");
            AppError::InvalidUrl
        })?;
        let original_url = original_url.trim().to_string();

        let link = match requested_code {
            Some(code) => {
                if !is_valid_code(code) {
                    return Err(AppError::InvalidCode);
                }

                self.link_repository
                    .insert(NewLink {
                        code: code.to_string(),
                        original_url,
                    })
                    .await?
            }
            None => self.insert_with_generated_code(original_url).await?,
        };

        tracing::info!(code = %link.code, "Short link created");
        Ok(link)
    }

    /// Looks up a link without touching its statistics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::NotFound);
        }

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Counts one click and returns the target URL.
    ///
    /// The increment and timestamp update are a single repository call, so
    /// concurrent redirects never lose counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    pub async fn redirect_and_count(&self, code: &str) -> Result<String, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::NotFound);
        }

        let link = self
            .link_repository
            .record_click(code)
            .await?
            .ok_or(AppError::NotFound)?;

        tracing::debug!(code = %link.code, clicks = link.click_count, "Redirect counted");
        Ok(link.original_url)
    }

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code, including when
    /// it was already deleted.
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !is_valid_code(code) || !self.link_repository.delete(code).await? {
            return Err(AppError::NotFound);
        }

        tracing::info!(code, "Short link deleted");
        Ok(())
    }

    /// Inserts under freshly generated codes until one does not collide.
    ///
    /// Only [`AppError::CodeConflict`] consumes an attempt; any other error is
    /// returned immediately.
    async fn insert_with_generated_code(&self, original_url: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                original_url: original_url.clone(),
            };

            match self.link_repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::CodeConflict) => {
                    tracing::debug!(attempt, "Generated code collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Gave up generating a unique code"
        );
        Err(AppError::CodeGenerationExhausted)
    }
}
