//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL with its usage counters and lifecycle state.
///
/// `clicks` and `last_accessed` change only when a redirect succeeds;
/// `active` only ever goes from `true` to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    pub last_accessed: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub note: Option<String>,
}

impl Link {
    /// Creates a freshly reserved, active link with no recorded clicks.
    pub fn new(
        id: i64,
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        note: Option<String>,
    ) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
            clicks: 0,
            last_accessed: None,
            expires_at,
            active: true,
            note,
        }
    }

    /// Returns true if `now` is strictly past the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now > e)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for reserving a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}
