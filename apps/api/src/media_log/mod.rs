//! Media log — what a user has watched or read, and how they rated it.
//! The recommendation pipeline only reads from here.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::CatalogStore;
use crate::errors::AppError;
use crate::models::{MediaKind, MediaLogEntry};

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgMediaLogStore;

/// A log entry ready to be stored; `id` and `created_at` are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewMediaLog {
    pub user_id: Uuid,
    pub catalog_item_id: Option<String>,
    pub title: String,
    pub kind: MediaKind,
    pub rating: Option<f64>,
    pub tags: Option<String>,
    pub review: Option<String>,
    pub release_year: Option<i32>,
}

#[async_trait]
pub trait MediaLogStore: Send + Sync {
    /// All entries for a user, oldest first.
    async fn entries_for_user(&self, user_id: Uuid) -> Result<Vec<MediaLogEntry>, AppError>;

    async fn insert(&self, entry: NewMediaLog) -> Result<MediaLogEntry, AppError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogMediaRequest {
    pub user_id: Uuid,
    pub catalog_item_id: String,
    pub rating: Option<f64>,
    pub tags: Option<String>,
    pub review: Option<String>,
}

/// Records that a user consumed a catalog item. Title, kind and release year
/// are copied from the catalog so later reads need no join.
pub async fn log_media(
    catalog: &dyn CatalogStore,
    logs: &dyn MediaLogStore,
    request: LogMediaRequest,
) -> Result<MediaLogEntry, AppError> {
    let rating = validate_rating(request.rating)?;

    let item = catalog
        .find_by_id(&request.catalog_item_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Catalog item {} not found",
                request.catalog_item_id
            ))
        })?;

    let entry = logs
        .insert(NewMediaLog {
            user_id: request.user_id,
            catalog_item_id: Some(item.id.clone()),
            title: item.title.clone(),
            kind: item.kind,
            rating,
            tags: non_blank(request.tags),
            review: non_blank(request.review),
            release_year: item.release_year(),
        })
        .await?;

    info!(
        "User {} logged {} '{}' (rating: {:?})",
        entry.user_id, entry.kind, entry.title, entry.rating
    );
    Ok(entry)
}

/// Ratings run from 0 to 5 in half-star steps.
pub fn validate_rating(rating: Option<f64>) -> Result<Option<f64>, AppError> {
    match rating {
        None => Ok(None),
        Some(r) if (0.0..=5.0).contains(&r) && (r * 2.0).fract() == 0.0 => Ok(Some(r)),
        Some(r) => Err(AppError::Validation(format!(
            "rating must be between 0 and 5 in steps of 0.5, got {r}"
        ))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
