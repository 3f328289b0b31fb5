//! Storage capability definitions for the domain layer.
//!
//! The services only ever reach entries through [`EntryStore`], so a durable
//! backend can be dropped in without touching the shortening or resolution
//! logic.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::MemoryEntryStore`] - default in-memory store
//! - Test mocks are auto-generated via `mockall` under `cfg(test)`

pub mod entry_store;

pub use entry_store::EntryStore;

#[cfg(test)]
pub use entry_store::MockEntryStore;
