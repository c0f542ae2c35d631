//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str =
    "id, code, long_url, created_at, clicks, last_accessed, expires_at, active, note";

/// PostgreSQL repository for link storage and retrieval.
///
/// Code uniqueness is enforced by the `links_code_key` constraint; a violation
/// surfaces as [`AppError::CodeTaken`] through `From<sqlx::Error>`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Round-trips a trivial query to confirm the pool can reach the database.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            "INSERT INTO links (code, long_url, expires_at, note) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {LINK_COLUMNS}"
        );

        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(&new_link.code)
            .bind(&new_link.long_url)
            .bind(new_link.expires_at)
            .bind(&new_link.note)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE code = $1");

        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM links WHERE code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn record_access(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError> {
        let sql = format!(
            "UPDATE links \
             SET clicks = clicks + 1, last_accessed = $2 \
             WHERE code = $1 AND active AND (expires_at IS NULL OR expires_at >= $2) \
             RETURNING {LINK_COLUMNS}"
        );

        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(code)
            .bind(now)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn deactivate(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE links SET active = FALSE WHERE code = $1 AND active")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let sql = format!(
            "SELECT {LINK_COLUMNS} FROM links \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );

        let links = sqlx::query_as::<_, Link>(&sql)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
