//! Entry entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short code with its target and usage counters.
///
/// `code`, `original_url` and `created_at` never change after insertion.
/// Only `expire_at` and the click-tracking fields are ever mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expire_at: Option<DateTime<Utc>>,
    pub clicks: u64,
    pub last_access: Option<DateTime<Utc>>,
}

impl Entry {
    /// Creates a fresh entry with no expiry and no clicks.
    pub fn new(code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expire_at: None,
            clicks: 0,
            last_access: None,
        }
    }

    /// Returns true if the entry has an expiry strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_at.is_some_and(|at| now > at)
    }

    /// Builds the analytics view of this entry as seen at `now`.
    pub fn stats_at(&self, now: DateTime<Utc>) -> EntryStats {
        let expired = self.is_expired_at(now);
        let expires_in_ms = match self.expire_at {
            Some(at) if !expired => Some((at - now).num_milliseconds()),
            _ => None,
        };

        EntryStats {
            code: self.code.clone(),
            url: self.original_url.clone(),
            created_at: self.created_at,
            expire_at: self.expire_at,
            clicks: self.clicks,
            last_access: self.last_access,
            expired,
            expires_in_ms,
        }
    }
}

/// Where a code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeOrigin {
    /// Supplied by the caller as a custom alias.
    Alias,
    /// Produced by the code generator.
    Generated,
}

/// Input data for inserting a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub code: String,
    pub original_url: String,
    pub origin: CodeOrigin,
    /// An expiry follows the insert. Such entries are never handed out again
    /// for a repeated URL.
    pub expiring: bool,
}

impl NewEntry {
    pub fn alias(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
            origin: CodeOrigin::Alias,
            expiring: false,
        }
    }

    pub fn generated(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
            origin: CodeOrigin::Generated,
            expiring: false,
        }
    }

    /// Marks the entry as about to receive an expiry.
    pub fn expiring(mut self) -> Self {
        self.expiring = true;
        self
    }

    /// Whether the entry may back later requests for the same URL.
    pub fn is_reusable(&self) -> bool {
        self.origin == CodeOrigin::Generated && !self.expiring
    }
}

/// Analytics and metadata for a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStats {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expire_at: Option<DateTime<Utc>>,
    pub clicks: u64,
    pub last_access: Option<DateTime<Utc>>,
    pub expired: bool,
    /// Remaining lifetime; present only while an expiry is set and not reached.
    pub expires_in_ms: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry_at(now: DateTime<Utc>) -> Entry {
        Entry::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
        )
    }

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = entry_at(now);

        assert_eq!(entry.code, "abc123");
        assert_eq!(entry.original_url, "https://example.com");
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.clicks, 0);
        assert!(entry.expire_at.is_none());
        assert!(entry.last_access.is_none());
        assert!(!entry.is_expired_at(now + Duration::days(365)));
    }

    #[test]
    fn test_entry_expiry_is_strictly_after_deadline() {
        let now = Utc::now();
        let mut entry = entry_at(now);
        entry.expire_at = Some(now + Duration::seconds(10));

        assert!(!entry.is_expired_at(now));
        assert!(!entry.is_expired_at(now + Duration::seconds(10)));
        assert!(entry.is_expired_at(now + Duration::seconds(10) + Duration::milliseconds(1)));
    }

    #[test]
    fn test_stats_for_live_entry_with_expiry() {
        let now = Utc::now();
        let mut entry = entry_at(now);
        entry.expire_at = Some(now + Duration::seconds(30));
        entry.clicks = 4;

        let stats = entry.stats_at(now + Duration::seconds(10));

        assert!(!stats.expired);
        assert_eq!(stats.expires_in_ms, Some(20_000));
        assert_eq!(stats.clicks, 4);
        assert_eq!(stats.url, "https://example.com");
    }

    #[test]
    fn test_stats_for_expired_entry() {
        let now = Utc::now();
        let mut entry = entry_at(now);
        entry.expire_at = Some(now + Duration::seconds(1));

        let stats = entry.stats_at(now + Duration::seconds(2));

        assert!(stats.expired);
        assert!(stats.expires_in_ms.is_none());
        assert_eq!(stats.expire_at, entry.expire_at);
    }

    #[test]
    fn test_stats_without_expiry() {
        let now = Utc::now();
        let stats = entry_at(now).stats_at(now + Duration::days(30));

        assert!(!stats.expired);
        assert!(stats.expire_at.is_none());
        assert!(stats.expires_in_ms.is_none());
        assert!(stats.last_access.is_none());
    }

    #[test]
    fn test_new_entry_constructors() {
        let alias = NewEntry::alias("promo", "https://a.com");
        assert_eq!(alias.origin, CodeOrigin::Alias);

        let generated = NewEntry::generated("1", "https://a.com");
        assert_eq!(generated.origin, CodeOrigin::Generated);
        assert_eq!(generated.code, "1");
        assert!(generated.is_reusable());
        assert!(!alias.is_reusable());
        assert!(!generated.expiring().is_reusable());
    }
}
