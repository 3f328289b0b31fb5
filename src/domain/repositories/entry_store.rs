//! Store trait for short code entries.

use crate::domain::entities::{Entry, NewEntry};
use crate::domain::error::StoreResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// The authoritative mapping from code to [`Entry`].
///
/// Implementations must be safe under arbitrary concurrent use. Every
/// mutation of an entry is all-or-nothing: readers never observe a partially
/// applied update.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Returns true if an entry with this code is present, expired or not.
    async fn exists(&self, code: &str) -> StoreResult<bool>;

    /// Inserts a new entry stamped with the current time, zero clicks and no
    /// expiry.
    ///
    /// Reusable entries (see [`NewEntry::is_reusable`]) are also recorded in
    /// the URL reverse index within the same critical section.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::error::StoreError::CodeExists`] if the code is
    /// already present. Of any number of concurrent saves for one code,
    /// exactly one succeeds.
    async fn save(&self, new_entry: NewEntry) -> StoreResult<()>;

    /// Returns a snapshot copy of the entry.
    async fn get(&self, code: &str) -> StoreResult<Option<Entry>>;

    /// Sets the expiry of an existing entry. Last write wins.
    ///
    /// Returns `Ok(false)` if the code is absent.
    async fn set_expire(&self, code: &str, at: DateTime<Utc>) -> StoreResult<bool>;

    /// Increments the click counter and stamps the last access time.
    ///
    /// Returns `Ok(false)` if the code is absent.
    async fn track_hit(&self, code: &str) -> StoreResult<bool>;

    /// Looks up the generated code previously saved for `original_url`.
    async fn find_code_by_url(&self, original_url: &str) -> StoreResult<Option<String>>;

    /// Number of physically stored entries, including expired ones.
    async fn count(&self) -> StoreResult<usize>;
}
