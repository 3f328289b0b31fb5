//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Token bucket parameters applied per client IP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Tokens replenished per second.
    pub per_second: u64,
    /// Bucket capacity.
    pub burst: u32,
}

impl Default for RateLimitSettings {
    /// One token per second with a burst of 60, roughly 60 requests per
    /// minute per IP.
    fn default() -> Self {
        Self {
            per_second: 1,
            burst: 60,
        }
    }
}

impl RateLimitSettings {
    /// Interval between two replenished tokens.
    fn replenish_interval_ms(&self) -> u64 {
        (1000 / self.per_second.max(1)).max(1)
    }
}

/// Creates the per-IP rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// The client IP is taken from `X-Forwarded-For`, `X-Real-IP` or
/// `Forwarded` when present, falling back to the socket peer address.
///
/// # Errors
///
/// Returns an error if the settings describe an empty bucket.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{code}", get(redirect_handler))
///     .layer(rate_limit::layer(RateLimitSettings::default())?);
/// ```
pub fn layer(
    settings: RateLimitSettings,
) -> Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(settings.replenish_interval_ms())
        .burst_size(settings.burst)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .with_context(|| format!("Invalid rate limit settings: {settings:?}"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
