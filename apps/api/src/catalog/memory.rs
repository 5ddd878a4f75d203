//! In-memory `CatalogStore` for tests.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::catalog::CatalogStore;
use crate::errors::AppError;
use crate::models::{CatalogItem, MediaKind};

#[derive(Default)]
pub struct InMemoryCatalog {
    items: Vec<CatalogItem>,
    failing_titles: HashSet<String>,
    failing_sample: bool,
    failing_year_lookup: bool,
}

impl InMemoryCatalog {
    pub fn new(mut items: Vec<CatalogItem>) -> Self {
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            items,
            ..Self::default()
        }
    }

    /// Makes exact-title lookups for `title` fail with a database error.
    pub fn fail_on_title(mut self, title: &str) -> Self {
        self.failing_titles.insert(title.to_string());
        self
    }

    /// Makes every `sample` call fail with a database error.
    pub fn fail_on_sample(mut self) -> Self {
        self.failing_sample = true;
        self
    }

    /// Makes every `released_between` call fail with a database error.
    pub fn fail_on_year_lookup(mut self) -> Self {
        self.failing_year_lookup = true;
        self
    }
}

/// Builds a catalog row with just the fields matching cares about.
pub fn item(
    id: &str,
    kind: MediaKind,
    title: &str,
    released: Option<(i32, u32, u32)>,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: format!("{title} description"),
        genres: vec![],
        cover_image: None,
        release_date: released.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        rating: None,
        source_id: None,
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn find_by_id(&self, id: &str) -> Result<Option<CatalogItem>, AppError> {
        Ok(self.items.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_title(
        &self,
        title: &str,
        exclude: &[String],
    ) -> Result<Vec<CatalogItem>, AppError> {
        if self.failing_titles.contains(title) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self
            .items
            .iter()
            .filter(|i| i.title == title && !exclude.contains(&i.id))
            .cloned()
            .collect())
    }

    async fn sample(&self, limit: usize) -> Result<Vec<CatalogItem>, AppError> {
        if self.failing_sample {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.items.iter().take(limit).cloned().collect())
    }

    async fn released_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        exclude: &[String],
        limit: usize,
    ) -> Result<Vec<CatalogItem>, AppError> {
        if self.failing_year_lookup {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self
            .items
            .iter()
            .filter(|i| matches!(i.release_date, Some(d) if d >= start && d <= end))
            .filter(|i| !exclude.contains(&i.id))
            .take(limit)
            .cloned()
            .collect())
    }
}
