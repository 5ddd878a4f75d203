//! Axum route handlers for the Recommendations API.

use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommendations::composer::RecommendationMode;
use crate::recommendations::pipeline::{RecommendationResponse, TasteReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub mode: RecommendationMode,
}

#[derive(Debug, Deserialize)]
pub struct TasteReportRequest {
    pub user_id: Uuid,
}

/// POST /api/v1/recommendations
///
/// Full pipeline: media log → taste summary → recommendation reply → catalog items.
/// Unmatched titles come back as placeholders, never as an error.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let response = state
        .pipeline()
        .recommend(request.user_id, request.mode)
        .await?;
    Ok(Json(response))
}

/// POST /api/v1/taste-report
pub async fn handle_taste_report(
    State(state): State<AppState>,
    Json(request): Json<TasteReportRequest>,
) -> Result<Json<TasteReport>, AppError> {
    let report = state.pipeline().taste_report(request.user_id).await?;
    Ok(Json(report))
}
