//! In-memory implementation of the entry store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::collections::hash_map::Entry as MapEntry;
use std::sync::Arc;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::{Entry, NewEntry};
use crate::domain::error::{StoreError, StoreResult};
use crate::domain::repositories::EntryStore;

/// Both maps live behind one lock so the forward map and the reverse index
/// can never disagree.
#[derive(Debug, Default)]
struct Maps {
    by_code: HashMap<String, Entry>,
    /// original URL -> first generated code saved for it without an expiry
    by_url: HashMap<String, String>,
}

/// Process-local [`EntryStore`] backed by a `HashMap`.
///
/// Reads (`exists`, `get`, lookups) share the lock; every mutation takes it
/// exclusively, which makes insert-if-absent atomic and keeps entry updates
/// all-or-nothing. Nothing is persisted: dropping the store drops all data.
pub struct MemoryEntryStore {
    maps: RwLock<Maps>,
    clock: Arc<dyn Clock>,
}

impl MemoryEntryStore {
    /// Creates an empty store using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store that timestamps entries with `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            maps: RwLock::new(Maps::default()),
            clock,
        }
    }
}

impl Default for MemoryEntryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn exists(&self, code: &str) -> StoreResult<bool> {
        Ok(self.maps.read().by_code.contains_key(code))
    }

    async fn save(&self, new_entry: NewEntry) -> StoreResult<()> {
        let reusable = new_entry.is_reusable();
        let NewEntry { code, original_url, .. } = new_entry;

        let mut guard = self.maps.write();
        let maps = &mut *guard;
        let now = self.clock.now();

        match maps.by_code.entry(code) {
            MapEntry::Occupied(occupied) => Err(StoreError::CodeExists(occupied.key().clone())),
            MapEntry::Vacant(vacant) => {
                let code = vacant.key().clone();
                vacant.insert(Entry::new(code.clone(), original_url.clone(), now));

                if reusable {
                    maps.by_url.entry(original_url).or_insert(code);
                }

                Ok(())
            }
        }
    }

    async fn get(&self, code: &str) -> StoreResult<Option<Entry>> {
        Ok(self.maps.read().by_code.get(code).cloned())
    }

    async fn set_expire(&self, code: &str, at: DateTime<Utc>) -> StoreResult<bool> {
        let mut maps = self.maps.write();
        let Some(entry) = maps.by_code.get_mut(code) else {
            return Ok(false);
        };

        entry.expire_at = Some(at);
        Ok(true)
    }

    async fn track_hit(&self, code: &str) -> StoreResult<bool> {
        let mut maps = self.maps.write();
        let Some(entry) = maps.by_code.get_mut(code) else {
            return Ok(false);
        };

        // Sampled under the write lock, and clamped, so last_access never goes backwards.
        let now = self.clock.now();
        entry.clicks += 1;
        entry.last_access = Some(entry.last_access.map_or(now, |prev| prev.max(now)));
        Ok(true)
    }

    async fn find_code_by_url(&self, original_url: &str) -> StoreResult<Option<String>> {
        Ok(self.maps.read().by_url.get(original_url).cloned())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.maps.read().by_code.len())
    }
}
