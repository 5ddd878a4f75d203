//! Recommendation pipeline — orchestrates one request end to end.
//!
//! Flow: load media log → build taste prompt → LLM taste summary →
//!       compose recommendation prompt → LLM reply → parse → match.
//!
//! Every step is awaited in sequence. Nothing is cached between requests and
//! neither LLM call is retried.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::CatalogStore;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::media_log::MediaLogStore;
use crate::recommendations::composer::{
    compose_recommendation_prompt, recommend_system_prompt, RecommendationMode,
};
use crate::recommendations::matcher::{match_recommendations, MatchResult, MatcherConfig};
use crate::recommendations::parser::parse_recommendations;
use crate::recommendations::profile::{build_taste_prompt, taste_system_prompt};

#[derive(Debug, Clone, Serialize)]
pub struct TasteReport {
    pub user_id: Uuid,
    pub entry_count: usize,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub user_id: Uuid,
    pub mode: RecommendationMode,
    pub taste_summary: String,
    /// Real catalog items and placeholders, in the order the model listed them.
    pub items: Vec<MatchResult>,
}

/// Borrowed collaborators for one request; built from `AppState::pipeline()`.
pub struct RecommendationPipeline<'a> {
    pub llm: &'a dyn TextGenerator,
    pub media_log: &'a dyn MediaLogStore,
    pub catalog: &'a dyn CatalogStore,
    pub marker: &'a str,
    pub matcher: &'a MatcherConfig,
}

impl RecommendationPipeline<'_> {
    /// Produces recommendations for `user_id`. Log and LLM failures are
    /// returned; catalog failures only ever show up as `error` placeholders.
    pub async fn recommend(
        &self,
        user_id: Uuid,
        mode: RecommendationMode,
    ) -> Result<RecommendationResponse, AppError> {
        let report = self.taste_report(user_id).await?;

        let prompt = compose_recommendation_prompt(&report.summary, mode, self.marker);
        let reply = self
            .llm
            .generate(&prompt, &recommend_system_prompt())
            .await
            .map_err(|e| AppError::Llm(format!("Recommendation call failed: {e}")))?;

        let parsed = parse_recommendations(&reply, self.marker);
        info!(
            "Parsed {} recommendations ({:?} mode) for user {}",
            parsed.len(),
            mode,
            user_id
        );

        let items = match_recommendations(self.catalog, &parsed, self.matcher).await;

        Ok(RecommendationResponse {
            user_id,
            mode,
            taste_summary: report.summary,
            items,
        })
    }

    /// Summarizes the user's taste from their media log.
    pub async fn taste_report(&self, user_id: Uuid) -> Result<TasteReport, AppError> {
        let entries = self.media_log.entries_for_user(user_id).await?;

        if entries.is_empty() {
            return Err(AppError::Validation(
                "No media logged yet. Log a few movies, shows or books first.".to_string(),
            ));
        }

        info!(
            "Building taste profile for user {} from {} entries",
            user_id,
            entries.len()
        );

        let prompt = build_taste_prompt(&entries);
        let summary = self
            .llm
            .generate(&prompt, &taste_system_prompt())
            .await
            .map_err(|e| AppError::Llm(format!("Taste analysis failed: {e}")))?;

        Ok(TasteReport {
            user_id,
            entry_count: entries.len(),
            summary: summary.trim().to_string(),
        })
    }
}
