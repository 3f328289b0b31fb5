//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`             - Short link redirect
//! - `GET  /health`             - Health check
//! - `POST /api/shorten`        - Create a short link
//! - `GET  /api/stats/{code}`   - Link statistics
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limiter cannot be built from `rate_limit`.
pub fn app_router(
    state: AppState,
    rate_limit: RateLimitSettings,
) -> anyhow::Result<NormalizePath<Router>> {
    let router = router(state, rate_limit)?;
    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Routes and middleware without path normalization.
///
/// # Errors
///
/// Returns an error if the rate limiter cannot be built from `rate_limit`.
pub fn router(state: AppState, rate_limit: RateLimitSettings) -> anyhow::Result<Router> {
    Ok(Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(rate_limit::layer(rate_limit)?)
        .layer(tracing::layer()))
}
