//! Catalog Matcher — resolves parsed recommendations to catalog entries.
//!
//! Per recommendation, first success wins:
//! 1. exact title match
//! 2. partial title match within a fixed sample of the catalog
//! 3. any entry released in the recommended year (kind is not checked)
//! 4. a `not-found` placeholder
//!
//! A failed lookup turns that recommendation into an `error` placeholder and
//! matching moves on. Recommendations are resolved one at a time: each step
//! skips ids already in `SeenIds`, which grows as results are produced.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::CatalogStore;
use crate::errors::AppError;
use crate::models::{CatalogItem, MediaKind};
use crate::recommendations::parser::ParsedRecommendation;

pub const PLACEHOLDER_ID_PREFIX: &str = "placeholder-";

/// Tuning knobs for matching. The two length thresholds were tuned by hand;
/// they are configurable rather than derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    pub max_results: usize,
    /// How many catalog entries the partial-match scan looks at.
    pub sample_window: usize,
    /// Minimum recommended-title length before "catalog title contains it" counts.
    pub min_title_len: usize,
    /// Minimum catalog-title length before "recommended title contains it" counts.
    pub min_reverse_len: usize,
    pub year_candidates: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            sample_window: 50,
            min_title_len: 4,
            min_reverse_len: 5,
            year_candidates: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    Exact,
    Partial,
    Year,
    NotFound,
    Error,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Exact => "exact",
            MatchStatus::Partial => "partial",
            MatchStatus::Year => "year",
            MatchStatus::NotFound => "not-found",
            MatchStatus::Error => "error",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, MatchStatus::NotFound | MatchStatus::Error)
    }
}

/// A catalog item, real or synthetic, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub status: MatchStatus,
}

/// Ids already returned in this invocation, placeholders included.
#[derive(Debug, Default)]
pub struct SeenIds(HashSet<String>);

impl SeenIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Returns `false` if the id was already present.
    pub fn insert(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    /// Snapshot for store queries that filter used ids out up front.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    /// `base`, or `base-2`, `base-3`, ... whichever is not taken yet.
    fn unused_id(&self, base: String) -> String {
        if !self.contains(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Matches `recommendations` in order with a fresh `SeenIds`.
pub async fn match_recommendations(
    store: &dyn CatalogStore,
    recommendations: &[ParsedRecommendation],
    config: &MatcherConfig,
) -> Vec<MatchResult> {
    let mut seen = SeenIds::new();
    match_with_seen(store, recommendations, config, &mut seen).await
}

/// Matches `recommendations` in order, skipping and extending `seen`.
/// Stops once `config.max_results` results exist; later recommendations are
/// not looked up at all.
pub async fn match_with_seen(
    store: &dyn CatalogStore,
    recommendations: &[ParsedRecommendation],
    config: &MatcherConfig,
    seen: &mut SeenIds,
) -> Vec<MatchResult> {
    let mut results = Vec::new();

    for (index, rec) in recommendations.iter().enumerate() {
        if results.len() >= config.max_results {
            debug!(
                "Result cap {} reached; skipping {} remaining recommendations",
                config.max_results,
                recommendations.len() - index
            );
            break;
        }

        let result = match resolve(store, rec, seen, config).await {
            Ok(Some((item, status))) => MatchResult { item, status },
            Ok(None) => placeholder(rec, MatchStatus::NotFound, index, seen),
            Err(e) => {
                warn!("Catalog lookup failed for '{}': {e}", rec.title);
                placeholder(rec, MatchStatus::Error, index, seen)
            }
        };

        debug!(
            "'{}' -> {} ({})",
            rec.title,
            result.item.id,
            result.status.as_str()
        );
        seen.insert(&result.item.id);
        results.push(result);
    }

    let unmatched = results.iter().filter(|r| r.status.is_placeholder()).count();
    info!(
        "Matched {} of {} recommendations ({} placeholders)",
        results.len() - unmatched,
        recommendations.len(),
        unmatched
    );

    results
}

async fn resolve(
    store: &dyn CatalogStore,
    rec: &ParsedRecommendation,
    seen: &SeenIds,
    config: &MatcherConfig,
) -> Result<Option<(CatalogItem, MatchStatus)>, AppError> {
    let used = seen.to_vec();

    let exact = store.find_by_title(&rec.title, &used).await?;
    if let Some(item) = exact.into_iter().next() {
        return Ok(Some((item, MatchStatus::Exact)));
    }

    let sample = store.sample(config.sample_window).await?;
    if let Some(item) = find_partial_match(&sample, &rec.title, seen, config) {
        return Ok(Some((item.clone(), MatchStatus::Partial)));
    }

    // TODO: filter year hits by rec.kind; a book recommendation can still
    // resolve to a movie released the same year.
    if let Some((start, end)) = rec.start_year().and_then(calendar_year) {
        let hits = store
            .released_between(start, end, &used, config.year_candidates)
            .await?;
        if let Some(item) = hits.into_iter().next() {
            return Ok(Some((item, MatchStatus::Year)));
        }
    }

    Ok(None)
}

/// First unseen candidate whose title contains `title` or is contained by it,
/// case-insensitively, subject to the configured length thresholds.
/// Candidates are scanned in the order given; there is no ranking.
pub fn find_partial_match<'a>(
    candidates: &'a [CatalogItem],
    title: &str,
    seen: &SeenIds,
    config: &MatcherConfig,
) -> Option<&'a CatalogItem> {
    let wanted = title.trim().to_lowercase();
    let wanted_len = wanted.chars().count();

    candidates
        .iter()
        .filter(|c| !seen.contains(&c.id))
        .find(|c| {
            let candidate = c.title.trim().to_lowercase();
            let forward = wanted_len >= config.min_title_len && candidate.contains(&wanted);
            let reverse = candidate.chars().count() >= config.min_reverse_len
                && wanted.contains(&candidate);
            forward || reverse
        })
}

fn calendar_year(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

/// Synthetic result for a recommendation with no (or a failed) catalog match.
/// Same shape as a real item so callers can render it uniformly.
fn placeholder(
    rec: &ParsedRecommendation,
    status: MatchStatus,
    index: usize,
    seen: &SeenIds,
) -> MatchResult {
    let year = rec
        .year
        .as_deref()
        .map(|y| format!(" ({y})"))
        .unwrap_or_default();
    let description = match status {
        MatchStatus::Error => format!(
            "{}: catalog lookup failed for \"{}\"{year}",
            status.as_str(),
            rec.title
        ),
        _ => format!(
            "{}: no catalog entry matched \"{}\"{year}",
            status.as_str(),
            rec.title
        ),
    };
    let id = seen.unused_id(format!(
        "{PLACEHOLDER_ID_PREFIX}{}-{}",
        status.as_str(),
        index + 1
    ));

    MatchResult {
        item: CatalogItem {
            id,
            kind: rec.kind.unwrap_or(MediaKind::Movie),
            title: rec.title.clone(),
            description,
            genres: vec![],
            cover_image: None,
            release_date: rec.start_year().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
            rating: None,
            source_id: None,
        },
        status,
    }
}
