//! Catalog store — read-only access to the movies, shows and books that
//! recommendations are resolved against.
//!
//! `AppState` holds an `Arc<dyn CatalogStore>`; the Postgres store is used in
//! production and `memory::InMemoryCatalog` in tests.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::CatalogItem;

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgCatalogStore;

/// Lookups the recommendation matcher needs. Every method returns items in
/// catalog iteration order (ascending id). `exclude` ids are filtered out
/// before any limit applies.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<CatalogItem>, AppError>;

    /// Items whose title is exactly `title`.
    async fn find_by_title(
        &self,
        title: &str,
        exclude: &[String],
    ) -> Result<Vec<CatalogItem>, AppError>;

    /// The first `limit` items of the catalog, unfiltered.
    async fn sample(&self, limit: usize) -> Result<Vec<CatalogItem>, AppError>;

    /// Items released between `start` and `end`, both inclusive.
    async fn released_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        exclude: &[String],
        limit: usize,
    ) -> Result<Vec<CatalogItem>, AppError>;
}
