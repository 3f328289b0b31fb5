//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Records a click for the code and answers `302 Found` with the stored URL
/// in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state
        .resolve_service
        .resolve_and_track(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location(&url)?)]))
}

/// Uses the stored URL verbatim when it is a valid header value, otherwise
/// its percent-encoded serialization.
fn location(url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(url) {
        return Ok(value);
    }

    Url::parse(url)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal("Stored URL cannot be used as a redirect target", json!({}))
        })
}
