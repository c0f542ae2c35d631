//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::view::LinkView;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::qr::qr_data_uri;

/// Template for the link statistics page.
///
/// Renders `templates/stats.html`.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub link: LinkView,
    pub qr_data_uri: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Inactive and expired links are shown with their status; unknown codes get
/// a 404 page. Viewing stats never counts as a click.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    match state.link_service.get_info(&code).await {
        Ok(link) => {
            let short_url = state.link_service.short_url(&link.code);
            Ok(StatsTemplate {
                qr_data_uri: qr_data_uri(&short_url)?,
                link: LinkView::new(link, short_url),
            }
            .into_response())
        }
        Err(AppError::NotFound { .. }) => {
            Ok((StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response())
        }
        Err(e) => Err(e),
    }
}
