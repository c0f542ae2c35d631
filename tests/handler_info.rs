mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use tinyfox::api::handlers::{info_handler, recent_handler, redirect_handler};
use tinyfox::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/api/info/{code}", get(info_handler))
        .route("/api/recent", get(recent_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_info_reflects_clicks(pool: PgPool) {
    common::create_test_link(&pool, "info1", "https://example.com/page").await;
    let server = server(common::create_test_state(pool));

    server.get("/info1").await;
    server.get("/info1").await;

    let response = server.get("/api/info/info1").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "info1");
    assert_eq!(json["long_url"], "https://example.com/page");
    assert_eq!(json["short_url"], format!("{}/info1", common::BASE_URL));
    assert_eq!(json["clicks"], 2);
    assert!(json["last_accessed"].is_string());
    assert!(json["expires_at"].is_null());
    assert_eq!(json["active"], true);
}

#[sqlx::test]
async fn test_info_does_not_count_click(pool: PgPool) {
    common::create_test_link(&pool, "quiet", "https://example.com").await;
    let server = server(common::create_test_state(pool.clone()));

    server.get("/api/info/quiet").await.assert_status_ok();

    assert_eq!(common::fetch_clicks(&pool, "quiet").await, 0);
}

#[sqlx::test]
async fn test_info_inactive_link_still_visible(pool: PgPool) {
    common::create_inactive_link(&pool, "off", "https://example.com").await;
    let server = server(common::create_test_state(pool));

    let response = server.get("/api/info/off").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["active"], false);
}

#[sqlx::test]
async fn test_info_not_found(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    server.get("/api/info/missing").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_recent_newest_first(pool: PgPool) {
    for i in 0..4 {
        common::create_test_link(&pool, &format!("r{i}"), "https://example.com").await;
    }
    let server = server(common::create_test_state(pool));

    let response = server.get("/api/recent").add_query_param("limit", 2).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["code"], "r3");
    assert_eq!(items[1]["code"], "r2");
}

#[sqlx::test]
async fn test_recent_default_limit(pool: PgPool) {
    for i in 0..12 {
        common::create_test_link(&pool, &format!("d{i}"), "https://example.com").await;
    }
    let server = server(common::create_test_state(pool));

    let response = server.get("/api/recent").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 10);
}

#[sqlx::test]
async fn test_recent_invalid_limit(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let response = server.get("/api/recent").add_query_param("limit", "many").await;

    response.assert_status_bad_request();
}
