//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, code allocation and store calls. They
//! consume the [`crate::domain::repositories::EntryStore`] trait and know
//! nothing about HTTP.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short link creation
//! - [`services::resolve_service::ResolveService`] - Resolution, click tracking and stats

pub mod services;
