//! Recommendation Text Parser — turns the free-text recommendation reply into
//! (title, year, kind) triples.
//!
//! Replies are prose followed by a marker and a numbered list. Everything
//! before the first marker is ignored; without a marker the whole reply is
//! scanned. Only ordinal lines (`<n>.`) are kept, and every ordinal line yields
//! exactly one `ParsedRecommendation`, so parsing cannot fail.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::MediaKind;

lazy_static! {
    static ref ORDINAL_PREFIX: Regex = Regex::new(r"^\d+\.\s*").unwrap();
    // `Title (YYYY) - kind`, year may be a range
    static ref TITLE_YEAR_KIND: Regex =
        Regex::new(r"(?i)^(.+?)\s*\((\d{4}(?:[-–]\d{4})?)\)\s*-\s*(movie|tv|book)\b").unwrap();
    // `Title (YYYY)`, `Title (YYYY-YYYY)` or `Title (YYYY–YYYY)`
    static ref TITLE_YEAR: Regex = Regex::new(r"^(.+?)\s*\((\d{4}(?:[-–]\d{4})?)\)").unwrap();
}

/// One recommended title as written by the model. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecommendation {
    pub title: String,
    /// `"2010"` or a range such as `"2008-2013"`; en-dash ranges are stored
    /// with a plain hyphen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
}

impl ParsedRecommendation {
    pub fn bare(title: &str) -> Self {
        Self {
            title: title.to_string(),
            year: None,
            kind: None,
        }
    }

    /// First year of `year`; a range resolves to where it starts.
    pub fn start_year(&self) -> Option<i32> {
        self.year.as_deref()?.get(..4)?.parse().ok()
    }
}

/// Parses every ordinal line at or after `marker` (or in the whole text when
/// the marker is absent), preserving order.
pub fn parse_recommendations(text: &str, marker: &str) -> Vec<ParsedRecommendation> {
    let list = list_section(text, marker);

    list.lines()
        .map(|line| strip_marker(line.trim(), marker))
        .filter_map(|line| {
            ORDINAL_PREFIX
                .find(line)
                .map(|prefix| parse_item(&line[prefix.end()..]))
        })
        .collect()
}

fn list_section<'a>(text: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return text;
    }
    match text.find(marker) {
        Some(idx) => &text[idx + marker.len()..],
        None => text,
    }
}

/// Handles `🔽 1. Title (Year)` where the marker shares a line with an item.
fn strip_marker<'a>(line: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return line;
    }
    line.strip_prefix(marker).map(str::trim_start).unwrap_or(line)
}

/// Parses the text after the ordinal prefix, most specific pattern first.
fn parse_item(item: &str) -> ParsedRecommendation {
    let item = item.trim();

    if let Some(caps) = TITLE_YEAR_KIND.captures(item) {
        return ParsedRecommendation {
            title: caps[1].trim().to_string(),
            year: Some(normalize_year(&caps[2])),
            kind: caps[3].parse().ok(),
        };
    }

    if let Some(caps) = TITLE_YEAR.captures(item) {
        return ParsedRecommendation {
            title: caps[1].trim().to_string(),
            year: Some(normalize_year(&caps[2])),
            kind: None,
        };
    }

    ParsedRecommendation::bare(item)
}

fn normalize_year(year: &str) -> String {
    year.replace('–', "-")
}
