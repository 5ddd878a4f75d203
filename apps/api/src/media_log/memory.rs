//! In-memory `MediaLogStore` for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::media_log::{MediaLogStore, NewMediaLog};
use crate::models::MediaLogEntry;

#[derive(Default)]
pub struct InMemoryMediaLog {
    entries: Mutex<Vec<MediaLogEntry>>,
}

#[async_trait]
impl MediaLogStore for InMemoryMediaLog {
    async fn entries_for_user(&self, user_id: Uuid) -> Result<Vec<MediaLogEntry>, AppError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, entry: NewMediaLog) -> Result<MediaLogEntry, AppError> {
        let row = MediaLogEntry {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            catalog_item_id: entry.catalog_item_id,
            title: entry.title,
            kind: entry.kind,
            rating: entry.rating,
            tags: entry.tags,
            review: entry.review,
            release_year: entry.release_year,
            created_at: Utc::now(),
        };
        self.entries.lock().unwrap().push(row.clone());
        Ok(row)
    }
}
