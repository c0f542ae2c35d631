//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store backed by a sharded concurrent map.
///
/// Each operation holds the shard lock of its key for the whole
/// read-modify-write, which gives the same single-row atomicity as the
/// PostgreSQL statements. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, Link>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::code_taken(
                "Short code is already taken",
                json!({ "code": new_link.code }),
            )),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                let link = Link::new(
                    id,
                    new_link.code,
                    new_link.long_url,
                    Utc::now(),
                    new_link.expires_at,
                    new_link.note,
                );
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.contains_key(code))
    }

    async fn record_access(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError> {
        let Some(mut entry) = self.links.get_mut(code) else {
            return Ok(None);
        };

        let link = entry.value_mut();
        if !link.active || link.is_expired_at(now) {
            return Ok(None);
        }

        link.clicks += 1;
        link.last_accessed = Some(now);
        Ok(Some(link.clone()))
    }

    async fn deactivate(&self, code: &str) -> Result<bool, AppError> {
        let Some(mut entry) = self.links.get_mut(code) else {
            return Ok(false);
        };

        let link = entry.value_mut();
        if !link.active {
            return Ok(false);
        }

        link.active = false;
        Ok(true)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self
            .links
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        links.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }
}
