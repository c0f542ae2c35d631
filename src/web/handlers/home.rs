//! Home page: the shortening form and recent links.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use super::view::LinkView;
use crate::error::AppError;
use crate::state::AppState;

/// Values echoed back into the form after a failed submission.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub long_url: String,
    pub custom_code: String,
    pub expires_in_days: String,
    pub note: String,
}

/// Template for the home page.
///
/// Renders `templates/index.html`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: FormValues,
    pub error: Option<String>,
    pub recent: Vec<LinkView>,
}

impl IndexTemplate {
    /// Builds the page with the configured number of recent links.
    pub async fn load(
        state: &AppState,
        form: FormValues,
        error: Option<String>,
    ) -> Result<Self, AppError> {
        let recent = state
            .link_service
            .list_recent(state.recent_limit)
            .await?
            .into_iter()
            .map(|link| {
                let short_url = state.link_service.short_url(&link.code);
                LinkView::new(link, short_url)
            })
            .collect();

        Ok(Self {
            form,
            error,
            recent,
        })
    }
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    IndexTemplate::load(&state, FormValues::default(), None).await
}
