//! Error types for profile persistence.
//!
//! All errors are propagated via [`StorageError`], which wraps the
//! underlying [`std::io`] and [`serde_json`] errors. Storage failures are
//! always surfaced to the caller and never swallowed.

use completionist_types::ProfileId;

/// Errors that can occur while saving or loading profiles.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No profile is stored under this id.
    #[error("profile not found: {0}")]
    NotFound(ProfileId),

    /// The id cannot be used as a storage key.
    #[error("invalid profile id: {0:?}")]
    InvalidId(String),

    /// A filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
