#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tinyfox::domain::repositories::LinkRepository;
use tinyfox::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
use tinyfox::state::AppState;

pub const BASE_URL: &str = "http://sho.rt";

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, long_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_expired_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO links (code, long_url, expires_at) VALUES ($1, $2, NOW() - INTERVAL '1 hour')",
    )
    .bind(code)
    .bind(url)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_future_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO links (code, long_url, expires_at) VALUES ($1, $2, NOW() + INTERVAL '1 day')",
    )
    .bind(code)
    .bind(url)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_inactive_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, long_url, active) VALUES ($1, $2, FALSE)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn fetch_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_active(pool: &PgPool, code: &str) -> bool {
    sqlx::query_scalar("SELECT active FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repo: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    AppState::new(repo, BASE_URL, 7, 10)
}

pub fn create_memory_state() -> AppState {
    let repo: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());
    AppState::new(repo, BASE_URL, 7, 10)
}
