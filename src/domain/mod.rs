//! Domain layer containing business entities and contracts.
//!
//! This module holds the core of the shortener: what an entry is, what a
//! store must be able to do with it, and how "now" is observed. Nothing in
//! here depends on HTTP or on a concrete storage backend.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage capability trait definitions
//! - [`clock`] - Injectable time source
//! - [`error`] - Domain error kinds
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The [`repositories::EntryStore`] trait is implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod clock;
pub mod entities;
pub mod error;
pub mod repositories;
