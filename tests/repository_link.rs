mod common;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tinyfox::domain::entities::NewLink;
use tinyfox::domain::repositories::LinkRepository;
use tinyfox::error::AppError;
use tinyfox::infrastructure::persistence::PgLinkRepository;

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        code: code.to_string(),
        long_url: url.to_string(),
        expires_at: None,
        note: None,
    }
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(NewLink {
            note: Some("docs".to_string()),
            ..new_link("test123", "https://example.com")
        })
        .await
        .unwrap();

    assert_eq!(link.code, "test123");
    assert_eq!(link.long_url, "https://example.com");
    assert_eq!(link.clicks, 0);
    assert!(link.active);
    assert!(link.last_accessed.is_none());
    assert_eq!(link.note.as_deref(), Some("docs"));
}

#[sqlx::test]
async fn test_create_duplicate_code_is_taken(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(new_link("dup", "https://a.example.com"))
        .await
        .unwrap();
    let err = repo
        .create(new_link("dup", "https://b.example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::CodeTaken { .. }));
}

#[sqlx::test]
async fn test_concurrent_create_same_code(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create(new_link("contested", &format!("https://example.com/{i}")))
                    .await
            })
        })
        .collect();

    let mut won = 0;
    let mut taken = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => won += 1,
            Err(AppError::CodeTaken { .. }) => taken += 1,
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    assert_eq!(won, 1);
    assert_eq!(taken, 7);
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("abc123").await.unwrap();
    assert_eq!(link.unwrap().long_url, "https://example.com");

    assert!(repo.find_by_code("notfound").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_exists(pool: PgPool) {
    common::create_inactive_link(&pool, "off", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.exists("off").await.unwrap());
    assert!(!repo.exists("on").await.unwrap());
}

#[sqlx::test]
async fn test_record_access(pool: PgPool) {
    common::create_test_link(&pool, "hit", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let now = Utc::now();

    let link = repo.record_access("hit", now).await.unwrap().unwrap();
    assert_eq!(link.clicks, 1);
    assert!(link.last_accessed.is_some());

    repo.record_access("hit", now).await.unwrap().unwrap();
    assert_eq!(common::fetch_clicks(&pool, "hit").await, 2);
}

#[sqlx::test]
async fn test_record_access_skips_expired_and_inactive(pool: PgPool) {
    common::create_expired_link(&pool, "old", "https://example.com").await;
    common::create_inactive_link(&pool, "off", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let now = Utc::now();

    assert!(repo.record_access("old", now).await.unwrap().is_none());
    assert!(repo.record_access("off", now).await.unwrap().is_none());
    assert!(repo.record_access("none", now).await.unwrap().is_none());

    assert_eq!(common::fetch_clicks(&pool, "old").await, 0);
    assert_eq!(common::fetch_clicks(&pool, "off").await, 0);
}

#[sqlx::test]
async fn test_deactivate_only_once(pool: PgPool) {
    common::create_test_link(&pool, "flip", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    assert!(repo.deactivate("flip").await.unwrap());
    assert!(!repo.deactivate("flip").await.unwrap());
    assert!(!repo.deactivate("missing").await.unwrap());
    assert!(!common::fetch_active(&pool, "flip").await);
}

#[sqlx::test]
async fn test_list_recent_and_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let base = Utc::now();

    for i in 0..5 {
        repo.create(NewLink {
            expires_at: Some(base + Duration::days(i + 1)),
            ..new_link(&format!("code{i}"), "https://example.com")
        })
        .await
        .unwrap();
    }

    let recent = repo.list_recent(3).await.unwrap();
    let codes: Vec<_> = recent.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["code4", "code3", "code2"]);

    assert_eq!(repo.count().await.unwrap(), 5);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
