//! # memlink
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entries, errors, the clock and the store trait
//! - **Application Layer** ([`application`]) - Shortening and resolution services
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory entry store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Generated (random or sequential base62) and custom short codes
//! - Per-link expiry, hidden from redirects but kept for statistics
//! - Click counting with last-access timestamps
//! - Optional deduplication of repeated URLs
//! - Per-IP rate limiting and request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://sho.rt"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreateShortRequest, ShortenSettings};
    pub use crate::domain::clock::{Clock, ManualClock};
    pub use crate::domain::error::ShortenError;
    pub use crate::domain::repositories::EntryStore;
    pub use crate::infrastructure::persistence::MemoryEntryStore;
    pub use crate::state::AppState;
}
