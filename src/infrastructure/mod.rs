//! Infrastructure layer for storage backends.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - [`crate::domain::repositories::EntryStore`] implementations
pub mod persistence;
