mod common;

use async_trait::async_trait;
use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use tinyfox::api::handlers::health_handler;
use tinyfox::domain::entities::{Link, NewLink};
use tinyfox::domain::repositories::LinkRepository;
use tinyfox::error::AppError;
use tinyfox::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    common::create_test_link(&pool, "h1", "https://example.com").await;
    let server = server(common::create_test_state(pool));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["message"], "1 links stored");
}

/// Store whose every call fails, standing in for an unreachable database.
struct FailingRepository;

fn failure() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn create(&self, _: NewLink) -> Result<Link, AppError> {
        Err(failure())
    }
    async fn find_by_code(&self, _: &str) -> Result<Option<Link>, AppError> {
        Err(failure())
    }
    async fn exists(&self, _: &str) -> Result<bool, AppError> {
        Err(failure())
    }
    async fn record_access(&self, _: &str, _: DateTime<Utc>) -> Result<Option<Link>, AppError> {
        Err(failure())
    }
    async fn deactivate(&self, _: &str) -> Result<bool, AppError> {
        Err(failure())
    }
    async fn list_recent(&self, _: i64) -> Result<Vec<Link>, AppError> {
        Err(failure())
    }
    async fn count(&self) -> Result<i64, AppError> {
        Err(failure())
    }
}

#[tokio::test]
async fn test_health_degraded() {
    let state = AppState::new(Arc::new(FailingRepository), common::BASE_URL, 7, 10);
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}
