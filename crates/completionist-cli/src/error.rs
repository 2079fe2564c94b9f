//! Error types for the `completionist` binary.
//!
//! [`CliError`] is the top-level error type that wraps every failure mode
//! a command can hit.

use completionist_types::ProfileId;

/// Top-level error for the `completionist` binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: completionist_core::ConfigError,
    },

    /// The built-in catalog failed to build.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: completionist_catalog::CatalogError,
    },

    /// Profile storage failed.
    #[error("storage error: {source}")]
    Storage {
        /// The underlying storage error.
        #[from]
        source: completionist_store::StorageError,
    },

    /// A tracker operation failed.
    #[error("{source}")]
    Tracker {
        /// The underlying tracker error.
        #[from]
        source: completionist_core::TrackerError,
    },

    /// No profile was named and none could be chosen.
    #[error("no profile selected; pass --profile or run `profiles create <name>`")]
    NoProfile,

    /// Several profiles exist and none was named.
    #[error("{count} profiles exist; pass --profile <id>")]
    AmbiguousProfile {
        /// How many profiles exist.
        count: usize,
    },

    /// The named profile does not exist.
    #[error("profile not found: {id}")]
    UnknownProfile {
        /// The requested profile.
        id: ProfileId,
    },

    /// A command argument could not be interpreted.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the problem.
        message: String,
    },
}
