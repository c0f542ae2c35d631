//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "custom_code": "my-link",   // optional
///   "expires_in_days": 7,       // optional, <= 0 means never
///   "note": "campaign"          // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "my-link",
///   "short_url": "http://127.0.0.1:8000/my-link",
///   "long_url": "https://example.com/page",
///   "expires_at": "2025-01-08T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed bodies, invalid URLs or invalid custom codes.
/// Returns 409 Conflict if the custom code is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let link = state.link_service.shorten(payload.into()).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
        long_url: link.long_url,
        expires_at: link.expires_at,
    }))
}
