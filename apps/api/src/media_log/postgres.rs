use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::media_log::{MediaLogStore, NewMediaLog};
use crate::models::MediaLogEntry;

const ENTRY_COLUMNS: &str = "id, user_id, catalog_item_id, title, kind, rating, tags, review, \
                             release_year, created_at";

/// `MediaLogStore` backed by the `media_logs` table.
#[derive(Clone)]
pub struct PgMediaLogStore {
    pool: PgPool,
}

impl PgMediaLogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaLogStore for PgMediaLogStore {
    async fn entries_for_user(&self, user_id: Uuid) -> Result<Vec<MediaLogEntry>, AppError> {
        let entries = sqlx::query_as::<_, MediaLogEntry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM media_logs WHERE user_id = $1 ORDER BY created_at, id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    async fn insert(&self, entry: NewMediaLog) -> Result<MediaLogEntry, AppError> {
        let row = sqlx::query_as::<_, MediaLogEntry>(&format!(
            r#"
            INSERT INTO media_logs
                (id, user_id, catalog_item_id, title, kind, rating, tags, review, release_year)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {ENTRY_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(entry.user_id)
        .bind(&entry.catalog_item_id)
        .bind(&entry.title)
        .bind(entry.kind.as_str())
        .bind(entry.rating)
        .bind(&entry.tags)
        .bind(&entry.review)
        .bind(entry.release_year)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
