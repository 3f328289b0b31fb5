//! Entry store implementations.
//!
//! - [`MemoryEntryStore`] - process-local store guarded by a reader/writer lock

pub mod memory_entry_store;

pub use memory_entry_store::MemoryEntryStore;
