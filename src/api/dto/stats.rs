//! DTOs for the statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::EntryStats;

/// Analytics and metadata for a short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
    pub clicks: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access: Option<DateTime<Utc>>,
    pub expired: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_ms: Option<i64>,
}

impl From<EntryStats> for StatsResponse {
    fn from(stats: EntryStats) -> Self {
        Self {
            code: stats.code,
            url: stats.url,
            created_at: stats.created_at,
            expire_at: stats.expire_at,
            clicks: stats.clicks,
            last_access: stats.last_access,
            expired: stats.expired,
            expires_in_ms: stats.expires_in_ms,
        }
    }
}
