use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::media_log::{log_media, LogMediaRequest};
use crate::models::MediaLogEntry;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/logs
pub async fn handle_list_logs(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<MediaLogEntry>>, AppError> {
    let entries = state.media_log.entries_for_user(params.user_id).await?;
    Ok(Json(entries))
}

/// POST /api/v1/logs
pub async fn handle_log_media(
    State(state): State<AppState>,
    Json(request): Json<LogMediaRequest>,
) -> Result<(StatusCode, Json<MediaLogEntry>), AppError> {
    let entry = log_media(state.catalog.as_ref(), state.media_log.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
