//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns analytics for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Expired codes are still reported, flagged with `"expired": true`.
///
/// # Response
///
/// ```json
/// {
///   "code": "abc123",
///   "url": "https://example.com",
///   "created_at": "2026-01-01T00:00:00Z",
///   "expire_at": "2026-01-01T01:00:00Z",
///   "clicks": 3,
///   "last_access": "2026-01-01T00:10:00Z",
///   "expired": false,
///   "expires_in_ms": 3000000
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code was never created.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state
        .resolve_service
        .stats(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "code": code })))?;

    Ok(Json(stats.into()))
}
