use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// The three kinds of media a user can log or be recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
    Book,
}

#[derive(Debug, Error)]
#[error("unknown media kind '{0}'")]
pub struct ParseMediaKindError(pub String);

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::Book => "book",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = ParseMediaKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaKind::Movie),
            "tv" => Ok(MediaKind::Tv),
            "book" => Ok(MediaKind::Book),
            _ => Err(ParseMediaKindError(s.to_string())),
        }
    }
}

impl TryFrom<String> for MediaKind {
    type Error = ParseMediaKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A catalog entry. Rows live in `media_items` and are written by the
/// catalog import jobs, never by the recommendation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CatalogItem {
    pub id: String,
    #[sqlx(try_from = "String")]
    pub kind: MediaKind,
    pub title: String,
    pub description: String,
    pub genres: Vec<String>,
    pub cover_image: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub source_id: Option<String>,
}

impl CatalogItem {
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

/// One user's record of consuming one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MediaLogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub catalog_item_id: Option<String>,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub kind: MediaKind,
    /// 0.0 – 5.0 in half-star steps
    pub rating: Option<f64>,
    pub tags: Option<String>,
    pub review: Option<String>,
    pub release_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}
