//! Prompt Composer — wraps a taste summary in one of the two recommendation
//! prompts. Both end with the marker-delimited list the parser anchors on.

use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::MEDIA_CRITIC_PERSONA;
use crate::recommendations::prompts::{
    BROADEN_PROMPT_TEMPLATE, LIST_FORMAT_TEMPLATE, RECOMMEND_SYSTEM_TEMPLATE,
    REINFORCE_PROMPT_TEMPLATE,
};

/// How far recommendations may stray from the user's established taste.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    /// Five picks strongly aligned with prior taste.
    #[default]
    Reinforce,
    /// ~40% aligned, ~60% novel, at least one underrepresented media type.
    Broaden,
}

pub fn recommend_system_prompt() -> String {
    RECOMMEND_SYSTEM_TEMPLATE.replace("{persona}", MEDIA_CRITIC_PERSONA)
}

pub fn compose_recommendation_prompt(
    taste_summary: &str,
    mode: RecommendationMode,
    marker: &str,
) -> String {
    let template = match mode {
        RecommendationMode::Reinforce => REINFORCE_PROMPT_TEMPLATE,
        RecommendationMode::Broaden => BROADEN_PROMPT_TEMPLATE,
    };
    let list_format = LIST_FORMAT_TEMPLATE.replace("{marker}", marker);

    // list_format first: a summary that happens to contain "{list_format}" must stay verbatim
    template
        .replace("{list_format}", &list_format)
        .replace("{taste_summary}", taste_summary.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;
    use crate::recommendations::parser::parse_recommendations;

    const SUMMARY: &str = "Loves slow-burn science fiction and morally grey leads.";

    #[test]
    fn test_reinforce_prompt_asks_for_aligned_picks() {
        let prompt = compose_recommendation_prompt(SUMMARY, RecommendationMode::Reinforce, "🔽");
        assert!(prompt.contains(SUMMARY));
        assert!(prompt.contains("Recommend 5 titles this person is very likely to love"));
        assert!(!prompt.contains("40%"));
    }

    #[test]
    fn test_broaden_prompt_asks_for_novelty_split() {
        let prompt = compose_recommendation_prompt(SUMMARY, RecommendationMode::Broaden, "🔽");
        assert!(prompt.contains("40%"));
        assert!(prompt.contains("60%"));
        assert!(prompt.contains("least represented"));
    }

    #[test]
    fn test_both_modes_end_with_marker_list_format() {
        for mode in [RecommendationMode::Reinforce, RecommendationMode::Broaden] {
            let prompt = compose_recommendation_prompt(SUMMARY, mode, "@@LIST@@");
            assert!(prompt.contains("a line containing only @@LIST@@"));
            assert!(prompt.contains("@@LIST@@\n1. Title (Year) - movie"));
            assert!(!prompt.contains("{marker}"));
            assert!(!prompt.contains("{taste_summary}"));
        }
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: RecommendationMode = serde_json::from_str(r#""broaden""#).unwrap();
        assert_eq!(mode, RecommendationMode::Broaden);
        assert_eq!(RecommendationMode::default(), RecommendationMode::Reinforce);
    }

    /// A reply that follows the requested format must parse back into the
    /// titles, years and types it lists.
    #[test]
    fn test_reply_in_requested_format_parses() {
        let prompt = compose_recommendation_prompt(SUMMARY, RecommendationMode::Broaden, "🔽");
        assert!(prompt.contains("1. Title (Year) - movie"));

        let reply = "Arrival is a natural next step.\n\
                     1. This numbered prose line sits above the marker.\n\
                     🔽\n\
                     1. Arrival (2016) - movie\n\
                     2. Station Eleven (2021) - tv\n\
                     3. The Left Hand of Darkness (1969) - book\n";
        let parsed = parse_recommendations(reply, "🔽");

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].title, "Arrival");
        assert_eq!(parsed[1].kind, Some(MediaKind::Tv));
        assert_eq!(parsed[2].title, "The Left Hand of Darkness");
        assert_eq!(parsed[2].year.as_deref(), Some("1969"));
    }
}
