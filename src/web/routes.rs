//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, shorten_form_handler, stats_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET  /`             - Home page with form and recent links
/// - `POST /shorten`      - Form submission
/// - `GET  /stats/{code}` - Statistics page for a specific link
pub fn web_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_form_handler))
        .route("/stats/{code}", get(stats_handler))
}
