//! API route configuration.

use crate::api::handlers::{info_handler, recent_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a short link
/// - `GET  /info/{code}`  - Link details and counters
/// - `GET  /recent`       - Most recently created links
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/info/{code}", get(info_handler))
        .route("/recent", get(recent_handler))
}
