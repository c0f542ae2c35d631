//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;

/// Handles shared by every request.
///
/// Both services hold the same store handle, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub redirect_service: Arc<RedirectService<dyn LinkRepository>>,
    /// Number of links shown on the home page.
    pub recent_limit: i64,
}

impl AppState {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        base_url: impl Into<String>,
        code_length: usize,
        recent_limit: i64,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(
                link_repository.clone(),
                base_url,
                code_length,
            )),
            redirect_service: Arc::new(RedirectService::new(link_repository)),
            recent_limit,
        }
    }
}
