//! Code registry: short code allocation, reservation and lookup.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved, validate_custom_code};
use crate::utils::url_validator::validate_long_url;

/// Attempts at drawing and reserving a generated code before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Longest note accepted, matching the width of the `links.note` column.
pub const MAX_NOTE_LENGTH: usize = 200;

/// Upper bound for [`LinkService::list_recent`].
pub const MAX_RECENT_LIMIT: i64 = 100;

/// Input for [`LinkService::shorten`].
#[derive(Debug, Clone, Default)]
pub struct ShortenParams {
    pub long_url: String,
    pub custom_code: Option<String>,
    pub expires_in_days: Option<i64>,
    pub note: Option<String>,
}

/// Service for creating and retrieving shortened links.
///
/// The store's uniqueness constraint is the authority on code ownership:
/// existence checks here only avoid pointless inserts, and a conflict reported
/// by the insert itself is handled the same way as a failed pre-check.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    base_url: String,
    code_length: usize,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` prefixes every short URL; a trailing slash is ignored.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>, code_length: usize) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            link_repository,
            base_url,
            code_length,
        }
    }

    /// Creates a short link.
    ///
    /// - `custom_code`: reserved as-is after validation; an empty string means
    ///   "generate one"
    /// - `expires_in_days`: only a positive value sets an expiry, zero and
    ///   negative values mean "never expires"
    /// - `note`: empty string is stored as no note
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the target is not an absolute HTTP/HTTPS URL.
    /// Returns [`AppError::InvalidCustomCode`] if the custom code breaks the format rules.
    /// Returns [`AppError::CodeTaken`] if the custom code is already reserved.
    /// Returns [`AppError::Validation`] for an over-long note or out-of-range expiry.
    pub async fn shorten(&self, params: ShortenParams) -> Result<Link, AppError> {
        validate_long_url(&params.long_url).map_err(|e| {
            AppError::invalid_url(
                "Please enter a valid URL (including http:// or https://)",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let note = params.note.filter(|n| !n.is_empty());
        if let Some(ref note) = note
            && note.chars().count() > MAX_NOTE_LENGTH
        {
            return Err(AppError::bad_request(
                "Note must be at most 200 characters",
                json!({ "provided_length": note.chars().count() }),
            ));
        }

        let expires_at = expiry_from_days(params.expires_in_days, Utc::now())?;

        let link = match params.custom_code.filter(|c| !c.is_empty()) {
            Some(code) => {
                self.reserve_custom(code, params.long_url, expires_at, note)
                    .await?
            }
            None => {
                self.reserve_generated(params.long_url, expires_at, note)
                    .await?
            }
        };

        tracing::info!(code = %link.code, expires_at = ?link.expires_at, "Short link created");
        Ok(link)
    }

    /// Checks a custom code's format and that no link holds it yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCustomCode`] or [`AppError::CodeTaken`].
    pub async fn validate_custom_code(&self, code: &str) -> Result<(), AppError> {
        validate_custom_code(code)?;

        if self.link_repository.exists(code).await? {
            return Err(AppError::code_taken(
                "That custom code is already taken",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    /// Draws random codes until one is not present in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] after too many consecutive collisions.
    pub async fn generate_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(self.code_length);

            if is_reserved(&code) {
                continue;
            }

            if !self.link_repository.exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Retrieves a link by its short code, whether or not it is still active.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_info(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))
    }

    /// Switches a link off so it no longer redirects.
    ///
    /// Returns `false` if the link was already inactive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn deactivate(&self, code: &str) -> Result<bool, AppError> {
        if self.link_repository.deactivate(code).await? {
            tracing::info!(code, "Short link deactivated");
            return Ok(true);
        }

        self.get_info(code).await.map(|_| false)
    }

    /// Lists the most recently created links, newest first.
    ///
    /// `limit` is clamped to `1..=100`.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        self.link_repository
            .list_recent(limit.clamp(1, MAX_RECENT_LIMIT))
            .await
    }

    /// Counts all stored links; doubles as a store connectivity probe.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn reserve_custom(
        &self,
        code: String,
        long_url: String,
        expires_at: Option<DateTime<Utc>>,
        note: Option<String>,
    ) -> Result<Link, AppError> {
        self.validate_custom_code(&code).await?;

        self.link_repository
            .create(NewLink {
                code,
                long_url,
                expires_at,
                note,
            })
            .await
    }

    /// Reserves a generated code, drawing a fresh one whenever a concurrent
    /// insert claims the candidate first.
    async fn reserve_generated(
        &self,
        long_url: String,
        expires_at: Option<DateTime<Utc>>,
        note: Option<String>,
    ) -> Result<Link, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = self.generate_code().await?;
            let new_link = NewLink {
                code,
                long_url: long_url.clone(),
                expires_at,
                note: note.clone(),
            };

            match self.link_repository.create(new_link).await {
                Err(AppError::CodeTaken { .. }) => {
                    tracing::debug!("Generated code lost the insert race, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// Turns a day count into an absolute expiry.
///
/// Only a positive count yields an expiry; `None`, zero and negative counts
/// mean the link never expires.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the resulting instant is out of range.
pub fn expiry_from_days(
    expires_in_days: Option<i64>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(days) = expires_in_days.filter(|d| *d > 0) else {
        return Ok(None);
    };

    TimeDelta::try_days(days)
        .and_then(|delta| now.checked_add_signed(delta))
        .map(Some)
        .ok_or_else(|| {
            AppError::bad_request(
                "expires_in_days is out of range",
                json!({ "expires_in_days": days }),
            )
        })
}
