//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{CreateShortRequest, ShortLink};

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Scheme and host rules are enforced by the service.
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,

    /// Optional custom code.
    #[validate(length(max = 64, message = "Alias is too long"))]
    pub custom_alias: Option<String>,

    /// Optional lifetime in seconds; zero or negative means no expiry.
    pub expire_in_seconds: Option<i64>,
}

impl From<ShortenRequest> for CreateShortRequest {
    fn from(request: ShortenRequest) -> Self {
        CreateShortRequest {
            url: request.url,
            custom_alias: request.custom_alias,
            expire_in_seconds: request.expire_in_seconds,
        }
    }
}

/// Created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short: String,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            code: link.code,
            short: link.short_url,
        }
    }
}
