//! DTOs for link information and recent-link listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::Link;

/// Full public view of a link.
#[derive(Debug, Serialize)]
pub struct LinkInfoResponse {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    pub last_accessed: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub note: Option<String>,
}

impl LinkInfoResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            code: link.code,
            long_url: link.long_url,
            short_url,
            created_at: link.created_at,
            clicks: link.clicks,
            last_accessed: link.last_accessed,
            expires_at: link.expires_at,
            active: link.active,
            note: link.note,
        }
    }
}

/// Query parameters for `GET /api/recent`.
///
/// Uses `serde_with` to parse the limit from the query string as an integer.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Most recently created links, newest first.
#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub items: Vec<LinkInfoResponse>,
}
