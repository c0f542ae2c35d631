//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage contract for the code registry.
///
/// Every method is a single atomic statement against the store. Implementations
/// must enforce code uniqueness themselves; callers treat a pre-insert existence
/// check as a hint only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Reserves a code by inserting its link row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeTaken`] if the code already exists, including when a
    /// concurrent insert won the race after the caller's pre-check.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code, regardless of its active state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns true if a row with this code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Counts a successful access: `clicks += 1`, `last_accessed = now`.
    ///
    /// Applied only while the link is active and not expired at `now`, so a
    /// click is never counted against a link that has already lapsed.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` with the updated row
    /// - `Ok(None)` if no active, unexpired row matched
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_access(&self, code: &str, now: DateTime<Utc>)
    -> Result<Option<Link>, AppError>;

    /// Flips `active` to false if it is currently true.
    ///
    /// Returns `Ok(true)` only for the call that performed the transition, so
    /// concurrent deactivations of the same code fire at most once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn deactivate(&self, code: &str) -> Result<bool, AppError>;

    /// Lists the most recently created links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
