//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_alias": "my-link",     // optional
///   "expire_in_seconds": 3600      // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "code": "my-link", "short": "https://sho.rt/my-link" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for malformed JSON, invalid URL or invalid alias
/// - 409 Conflict if the alias is already taken
/// - 500 Internal Server Error if no unique code could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.shorten_service.create_short(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
