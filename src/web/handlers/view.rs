//! Display-ready projections of links for templates.

use chrono::{DateTime, Utc};

use crate::domain::entities::Link;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// A link with every field already rendered to text.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: String,
    pub clicks: i64,
    pub last_accessed: String,
    pub expires_at: String,
    pub status: &'static str,
    pub note: Option<String>,
}

impl LinkView {
    pub fn new(link: Link, short_url: String) -> Self {
        let status = link_status(&link, Utc::now());
        Self {
            code: link.code,
            short_url,
            long_url: link.long_url,
            created_at: format_timestamp(link.created_at),
            clicks: link.clicks,
            last_accessed: link
                .last_accessed
                .map(format_timestamp)
                .unwrap_or_else(|| "never".to_string()),
            expires_at: format_expiry(link.expires_at),
            status,
            note: link.note,
        }
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_expiry(expires_at: Option<DateTime<Utc>>) -> String {
    expires_at
        .map(format_timestamp)
        .unwrap_or_else(|| "never".to_string())
}

fn link_status(link: &Link, now: DateTime<Utc>) -> &'static str {
    if !link.active {
        "inactive"
    } else if link.is_expired_at(now) {
        "expired"
    } else {
        "active"
    }
}
