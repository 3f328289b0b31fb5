//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Entry`] - A stored short code mapping with its click counters
//! - [`NewEntry`] - Input for inserting a new mapping
//! - [`EntryStats`] - Point-in-time analytics view of an entry

pub mod entry;

pub use entry::{CodeOrigin, Entry, EntryStats, NewEntry};
