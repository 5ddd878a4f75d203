use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::CatalogItem;
use crate::state::AppState;

/// GET /api/v1/catalog/:id
pub async fn handle_get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, AppError> {
    let item = state
        .catalog
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Catalog item {id} not found")))?;
    Ok(Json(item))
}
