//! Domain error kinds.
//!
//! These are transport-agnostic; the HTTP layer translates them into status
//! codes via [`crate::error::AppError`].

use thiserror::Error;

/// Failures reported by an [`crate::domain::repositories::EntryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `save` was called for a code that is already present.
    #[error("code already exists: {0}")]
    CodeExists(String),

    /// The storage backend itself failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the shortening flow.
#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("invalid url: must be an absolute http or https URL with a host")]
    InvalidUrl,

    #[error("invalid custom alias: {0}")]
    InvalidAlias(String),

    #[error("custom alias already taken: {0}")]
    AliasTaken(String),

    #[error("could not allocate a unique code after {attempts} attempts")]
    CodeAllocationFailed { attempts: usize },

    #[error(transparent)]
    Storage(StoreError),
}

impl From<StoreError> for ShortenError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CodeExists(code) => ShortenError::AliasTaken(code),
            other => ShortenError::Storage(other),
        }
    }
}
