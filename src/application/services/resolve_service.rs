//! Short code resolution, click tracking and statistics.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::EntryStats;
use crate::domain::error::StoreResult;
use crate::domain::repositories::EntryStore;

/// Service answering "where does this code point" and recording usage.
///
/// Expiry is evaluated against the clock on every call; nothing is cached
/// and expired entries are never removed, only hidden from resolution.
pub struct ResolveService<S: EntryStore + ?Sized> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: EntryStore + ?Sized> ResolveService<S> {
    /// Creates a new resolution service.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Returns the target URL of a live code.
    ///
    /// Unknown codes and codes whose expiry has passed both resolve to `None`.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn resolve(&self, code: &str) -> StoreResult<Option<String>> {
        let Some(entry) = self.store.get(code).await? else {
            debug!(code, "Code not found");
            return Ok(None);
        };

        if entry.is_expired_at(self.clock.now()) {
            debug!(code, "Code expired");
            return Ok(None);
        }

        Ok(Some(entry.original_url))
    }

    /// Resolves a code and records a click on success.
    ///
    /// A failed click update is logged and never turns a successful
    /// resolution into an error.
    ///
    /// # Errors
    ///
    /// Propagates store failures from the lookup itself.
    pub async fn resolve_and_track(&self, code: &str) -> StoreResult<Option<String>> {
        let Some(url) = self.resolve(code).await? else {
            return Ok(None);
        };

        match self.store.track_hit(code).await {
            Ok(true) => {}
            Ok(false) => warn!(code, "Entry vanished before the click could be recorded"),
            Err(err) => warn!(code, error = %err, "Failed to record click"),
        }

        Ok(Some(url))
    }

    /// Returns analytics for a code, including expired ones.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn stats(&self, code: &str) -> StoreResult<Option<EntryStats>> {
        let entry = self.store.get(code).await?;
        Ok(entry.map(|entry| entry.stats_at(self.clock.now())))
    }

    /// Number of stored entries, expired ones included.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn entry_count(&self) -> StoreResult<usize> {
        self.store.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::entities::{Entry, NewEntry};
    use crate::domain::error::StoreError;
    use crate::domain::repositories::MockEntryStore;
    use crate::infrastructure::persistence::MemoryEntryStore;
    use chrono::Duration;

    async fn seeded() -> (
        ResolveService<MemoryEntryStore>,
        Arc<MemoryEntryStore>,
        Arc<ManualClock>,
    ) {
        let clock = Arc::new(ManualClock::default());
        let store = Arc::new(MemoryEntryStore::with_clock(clock.clone()));
        store
            .save(NewEntry::generated("abc", "https://example.com"))
            .await
            .unwrap();
        let service = ResolveService::new(store.clone(), clock.clone());
        (service, store, clock)
    }

    #[tokio::test]
    async fn test_resolve_returns_exact_url() {
        let (service, _, _) = seeded().await;
        assert_eq!(
            service.resolve("abc").await.unwrap(),
            Some("https://example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let (service, _, _) = seeded().await;
        assert_eq!(service.resolve("never-created").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_resolve_does_not_track() {
        let (service, store, _) = seeded().await;
        service.resolve("abc").await.unwrap();
        assert_eq!(store.get("abc").await.unwrap().unwrap().clicks, 0);
    }

    #[tokio::test]
    async fn test_resolve_flips_to_absent_after_expiry() {
        let (service, store, clock) = seeded().await;
        store
            .set_expire("abc", clock.now() + Duration::seconds(10))
            .await
            .unwrap();

        assert!(service.resolve("abc").await.unwrap().is_some());

        clock.advance(Duration::seconds(11));
        assert!(service.resolve("abc").await.unwrap().is_none());
        assert!(store.exists("abc").await.unwrap());
    }

    #[tokio::test]
    async fn test_resolve_and_track_counts_clicks() {
        let (service, store, clock) = seeded().await;

        for _ in 0..3 {
            clock.advance(Duration::seconds(1));
            assert!(service.resolve_and_track("abc").await.unwrap().is_some());
        }

        let entry = store.get("abc").await.unwrap().unwrap();
        assert_eq!(entry.clicks, 3);
        assert_eq!(entry.last_access, Some(clock.now()));
    }

    #[tokio::test]
    async fn test_resolve_and_track_skips_expired() {
        let (service, store, clock) = seeded().await;
        store
            .set_expire("abc", clock.now() - Duration::seconds(1))
            .await
            .unwrap();

        assert!(service.resolve_and_track("abc").await.unwrap().is_none());
        assert_eq!(store.get("abc").await.unwrap().unwrap().clicks, 0);
    }

    #[tokio::test]
    async fn test_track_failure_still_returns_url() {
        let clock = Arc::new(ManualClock::default());
        let entry = Entry::new("abc".to_string(), "https://a.com".to_string(), clock.now());

        let mut store = MockEntryStore::new();
        store
            .expect_get()
            .returning(move |_| Ok(Some(entry.clone())));
        store
            .expect_track_hit()
            .times(1)
            .returning(|_| Err(StoreError::Backend("counter unavailable".to_string())));

        let service = ResolveService::new(Arc::new(store), clock);

        assert_eq!(
            service.resolve_and_track("abc").await.unwrap(),
            Some("https://a.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_track_on_vanished_entry_still_returns_url() {
        let clock = Arc::new(ManualClock::default());
        let entry = Entry::new("abc".to_string(), "https://a.com".to_string(), clock.now());

        let mut store = MockEntryStore::new();
        store
            .expect_get()
            .returning(move |_| Ok(Some(entry.clone())));
        store.expect_track_hit().times(1).returning(|_| Ok(false));

        let service = ResolveService::new(Arc::new(store), clock);

        assert!(service.resolve_and_track("abc").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_lookup_failure_is_propagated() {
        let mut store = MockEntryStore::new();
        store
            .expect_get()
            .returning(|_| Err(StoreError::Backend("down".to_string())));

        let service = ResolveService::new(Arc::new(store), Arc::new(ManualClock::default()));

        assert!(service.resolve("abc").await.is_err());
        assert!(service.stats("abc").await.is_err());
    }

    #[tokio::test]
    async fn test_stats_live_entry() {
        let (service, store, clock) = seeded().await;
        store
            .set_expire("abc", clock.now() + Duration::seconds(60))
            .await
            .unwrap();
        service.resolve_and_track("abc").await.unwrap();
        clock.advance(Duration::seconds(15));

        let stats = service.stats("abc").await.unwrap().unwrap();

        assert_eq!(stats.code, "abc");
        assert_eq!(stats.url, "https://example.com");
        assert_eq!(stats.clicks, 1);
        assert!(stats.last_access.is_some());
        assert!(!stats.expired);
        assert_eq!(stats.expires_in_ms, Some(45_000));
    }

    #[tokio::test]
    async fn test_stats_reports_expired_entries() {
        let (service, store, clock) = seeded().await;
        store
            .set_expire("abc", clock.now() + Duration::seconds(5))
            .await
            .unwrap();
        clock.advance(Duration::seconds(6));

        let stats = service.stats("abc").await.unwrap().unwrap();
        assert!(stats.expired);
        assert!(stats.expires_in_ms.is_none());
    }

    #[tokio::test]
    async fn test_stats_unknown_code() {
        let (service, _, _) = seeded().await;
        assert!(service.stats("zzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entry_count_includes_expired() {
        let (service, store, clock) = seeded().await;
        store
            .set_expire("abc", clock.now() - Duration::seconds(1))
            .await
            .unwrap();

        assert_eq!(service.entry_count().await.unwrap(), 1);
    }
}
