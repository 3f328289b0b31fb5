//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: the entry store answered
/// - **503 Service Unavailable**: the entry store failed
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.resolve_service.entry_count().await {
        Ok(entries) => Ok(Json(HealthResponse {
            status: "healthy".to_string(),
            version,
            entries: Some(entries),
            message: None,
        })),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "degraded".to_string(),
                version,
                entries: None,
                message: Some(format!("Store error: {}", e)),
            }),
        )),
    }
}
