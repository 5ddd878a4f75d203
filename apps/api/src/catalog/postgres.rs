use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::catalog::CatalogStore;
use crate::errors::AppError;
use crate::models::CatalogItem;

/// Upper bound on exact-title hits left after exclusion.
const EXACT_TITLE_LIMIT: i64 = 25;

const ITEM_COLUMNS: &str =
    "id, kind, title, description, genres, cover_image, release_date, rating, source_id";

/// `CatalogStore` backed by the `media_items` table.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<CatalogItem>, AppError> {
        let item = sqlx::query_as::<_, CatalogItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM media_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn find_by_title(
        &self,
        title: &str,
        exclude: &[String],
    ) -> Result<Vec<CatalogItem>, AppError> {
        let items = sqlx::query_as::<_, CatalogItem>(&format!(
            r#"
            SELECT {ITEM_COLUMNS} FROM media_items
            WHERE title = $1 AND id <> ALL($2)
            ORDER BY id
            LIMIT $3
            "#
        ))
        .bind(title)
        .bind(exclude)
        .bind(EXACT_TITLE_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn sample(&self, limit: usize) -> Result<Vec<CatalogItem>, AppError> {
        let items = sqlx::query_as::<_, CatalogItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM media_items ORDER BY id LIMIT $1"
        ))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn released_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        exclude: &[String],
        limit: usize,
    ) -> Result<Vec<CatalogItem>, AppError> {
        let items = sqlx::query_as::<_, CatalogItem>(&format!(
            r#"
            SELECT {ITEM_COLUMNS} FROM media_items
            WHERE release_date >= $1 AND release_date <= $2 AND id <> ALL($3)
            ORDER BY id
            LIMIT $4
            "#
        ))
        .bind(start)
        .bind(end)
        .bind(exclude)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}
