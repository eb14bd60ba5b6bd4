//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use async_trait::async_trait;

/// Failures reported by a [`LinkRepository`].
///
/// `CodeAlreadyExists` and `NotFound` are expected outcomes the caller is
/// meant to act on; `Database` is a storage failure for the current request
/// and is never retried by the store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("short code already exists: {0}")]
    CodeAlreadyExists(String),

    #[error("short code not found: {0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage contract for short links.
///
/// Every operation is atomic with respect to every other operation on the
/// same code. Uniqueness of `code` is enforced by the store, not assumed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CodeAlreadyExists`] if the code is already
    /// stored; nothing is overwritten in that case.
    ///
    /// Returns [`StoreError::Database`] on storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn get(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Atomically adds one to the click counter of `code`.
    ///
    /// Returns the counter value written by this call. Concurrent increments
    /// are never lost, and a deleted row is never incremented.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row matches `code`.
    async fn increment_clicks(&self, code: &str) -> Result<i64, StoreError>;

    /// Removes a link.
    ///
    /// Returns `Ok(true)` if a row was removed and `Ok(false)` if none
    /// existed. Absence is not an error.
    async fn delete(&self, code: &str) -> Result<bool, StoreError>;

    /// Lists at most `limit` links, newest creation time first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, StoreError>;

    /// Counts stored links, expired ones included.
    async fn count(&self) -> Result<i64, StoreError>;
}
