//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::application::services::ShortenParams;

/// Compiled regex for custom code validation. Empty means "generate one".
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code.
    #[validate(length(max = 16), regex(path = *CUSTOM_CODE_REGEX))]
    pub custom_code: Option<String>,

    /// Days until the link expires. Zero or negative means never.
    pub expires_in_days: Option<i64>,

    /// Optional free-text annotation.
    #[validate(length(max = 200))]
    pub note: Option<String>,
}

impl From<ShortenRequest> for ShortenParams {
    fn from(request: ShortenRequest) -> Self {
        Self {
            long_url: request.url,
            custom_code: request.custom_code,
            expires_in_days: request.expires_in_days,
            note: request.note,
        }
    }
}

/// Created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}
