//! Profile Builder — renders a user's media log as a taste-analysis prompt.
//!
//! Pure formatting, no scoring: the LLM does the analysis.

use crate::llm_client::prompts::{MEDIA_CRITIC_PERSONA, PLAIN_TEXT_INSTRUCTION};
use crate::models::MediaLogEntry;
use crate::recommendations::prompts::{TASTE_PROMPT_TEMPLATE, TASTE_SYSTEM_TEMPLATE};

pub fn taste_system_prompt() -> String {
    TASTE_SYSTEM_TEMPLATE.replace("{persona}", MEDIA_CRITIC_PERSONA)
}

/// Builds the taste-analysis prompt, one ordinal line per logged entry.
pub fn build_taste_prompt(entries: &[MediaLogEntry]) -> String {
    let history = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| render_entry(i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n");

    TASTE_PROMPT_TEMPLATE
        .replace("{entry_count}", &entries.len().to_string())
        .replace("{history}", &history)
        .replace("{plain_text_instruction}", PLAIN_TEXT_INSTRUCTION)
}

fn render_entry(ordinal: usize, entry: &MediaLogEntry) -> String {
    let year = entry
        .release_year
        .map(|y| format!(" ({y})"))
        .unwrap_or_default();
    let rating = entry
        .rating
        .map(star_rating)
        .unwrap_or_else(|| "not rated".to_string());

    let mut line = format!(
        "{ordinal}. {}{year} [{}] - {rating}",
        entry.title, entry.kind
    );

    if let Some(tags) = entry.tags.as_deref().filter(|t| !t.trim().is_empty()) {
        line.push_str(&format!("\n   Tags: {}", tags.trim()));
    }
    if let Some(review) = entry.review.as_deref().filter(|r| !r.trim().is_empty()) {
        line.push_str(&format!("\n   Review: {}", review.trim()));
    }

    line
}

/// `4.5` renders as `★★★★½ (4.5/5)`.
pub fn star_rating(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let whole = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5;

    let mut stars = "★".repeat(whole);
    if half {
        stars.push('½');
    }

    if stars.is_empty() {
        format!("({rating}/5)")
    } else {
        format!("{stars} ({rating}/5)")
    }
}
