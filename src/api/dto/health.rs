//! DTOs for the health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,

    /// Stored entries, expired ones included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
