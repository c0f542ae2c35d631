//! Handlers for link information endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::info::{LinkInfoResponse, RecentQuery, RecentResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns everything known about a short link, including inactive ones.
///
/// # Endpoint
///
/// `GET /api/info/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn info_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let link = state.link_service.get_info(&code).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(LinkInfoResponse::new(link, short_url)))
}

/// Lists the most recently created links.
///
/// # Endpoint
///
/// `GET /api/recent?limit=N`
///
/// `limit` defaults to the configured home-page size and is clamped to 1-100.
pub async fn recent_handler(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> Result<Json<RecentResponse>, AppError> {
    let limit = params.limit.unwrap_or(state.recent_limit);

    let items = state
        .link_service
        .list_recent(limit)
        .await?
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.code);
            LinkInfoResponse::new(link, short_url)
        })
        .collect();

    Ok(Json(RecentResponse { items }))
}
