use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::db::ping;
use crate::state::AppState;

/// GET /health
/// Reports service version and whether PostgreSQL answers.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, database) = match ping(&state.db).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("Health check: database unreachable: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let overall = if status == StatusCode::OK { "ok" } else { "degraded" };

    (
        status,
        Json(json!({
            "status": overall,
            "version": env!("CARGO_PKG_VERSION"),
            "service": "mediamatch-api",
            "database": database
        })),
    )
}
