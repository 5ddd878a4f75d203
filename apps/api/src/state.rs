use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::media_log::MediaLogStore;
use crate::recommendations::pipeline::RecommendationPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// LlmClient in production, a scripted generator in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub catalog: Arc<dyn CatalogStore>,
    pub media_log: Arc<dyn MediaLogStore>,
    pub config: Config,
}

impl AppState {
    /// Borrows the collaborators one recommendation request needs.
    pub fn pipeline(&self) -> RecommendationPipeline<'_> {
        RecommendationPipeline {
            llm: self.llm.as_ref(),
            media_log: self.media_log.as_ref(),
            catalog: self.catalog.as_ref(),
            marker: &self.config.recommendation_marker,
            matcher: &self.config.matcher,
        }
    }
}
