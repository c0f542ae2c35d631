//! Redirect resolution with expiry and activation policy.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Resolves short codes to redirect targets.
///
/// Every resolution reads the current row from the store. The outcome depends
/// only on that row and the resolution instant:
///
/// | Row state                        | Outcome                                   |
/// |----------------------------------|-------------------------------------------|
/// | missing or `active = false`      | [`AppError::NotFound`]                    |
/// | active, past `expires_at`        | deactivate, then [`AppError::Expired`]    |
/// | active, not expired              | count the click, return the updated link  |
///
/// Deactivation is a conditional write, so when several requests race past the
/// expiry moment exactly one of them reports `Expired` and the others see a
/// plain `NotFound`. Clicks are counted by a conditional write as well, which
/// never matches a lapsed or inactive row.
pub struct RedirectService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> RedirectService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Resolves `code` at the current time.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_at`].
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.resolve_at(code, Utc::now()).await
    }

    /// Resolves `code` as of `now`.
    ///
    /// On success the returned link already reflects this access (`clicks`
    /// incremented, `last_accessed == now`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown or inactive codes.
    /// Returns [`AppError::Expired`] if this call deactivated an expired link.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve_at(&self, code: &str, now: DateTime<Utc>) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .filter(|link| link.active)
            .ok_or_else(|| not_found(code))?;

        if link.is_expired_at(now) {
            return Err(self.expire(code).await);
        }

        if let Some(updated) = self.link_repository.record_access(code, now).await? {
            tracing::debug!(code, clicks = updated.clicks, "Short link resolved");
            return Ok(updated);
        }

        // The row changed between the read and the conditional update.
        match self.link_repository.find_by_code(code).await? {
            Some(current) if current.active && current.is_expired_at(now) => {
                Err(self.expire(code).await)
            }
            _ => Err(not_found(code)),
        }
    }

    /// Deactivates an expired link and reports which outcome the caller sees.
    async fn expire(&self, code: &str) -> AppError {
        match self.link_repository.deactivate(code).await {
            Ok(true) => {
                tracing::info!(code, "Short link expired and deactivated");
                AppError::expired("Link expired", json!({ "code": code }))
            }
            Ok(false) => not_found(code),
            Err(e) => e,
        }
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Not found", json!({ "code": code }))
}
