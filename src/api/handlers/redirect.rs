//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Always answers with 307 Temporary Redirect so clients never cache the
/// mapping: every access is counted and expiry takes effect immediately.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist or is inactive.
/// Returns 410 Gone if the link has just expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.redirect_service.resolve(&code).await?;

    Ok(Redirect::temporary(&link.long_url))
}
