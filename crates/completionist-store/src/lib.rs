//! Profile persistence for the Completionist tracker.
//!
//! Profiles are saved whole after every mutation and loaded whole at the
//! start of a session. The [`StorageService`] trait is the seam the tracker
//! is generic over; two implementations are provided.
//!
//! # Modules
//!
//! - [`json_file`] -- [`JsonFileStorage`]: one pretty-printed JSON file per
//!   profile, written atomically with a backup of the previous version.
//! - [`memory`] -- [`MemoryStorage`]: the same contract held in memory, for
//!   tests and ephemeral sessions.
//! - [`error`] -- Shared error types.

pub mod error;
pub mod json_file;
pub mod memory;

use completionist_progress::PlayerProfile;
use completionist_types::ProfileId;

// Re-export primary types for convenience.
pub use error::StorageError;
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Saves and loads whole player profiles.
///
/// A profile loaded after a save compares equal to the profile that was
/// saved, including empty notes, missing ratings, timestamps, and both mode
/// namespaces.
pub trait StorageService {
    /// Persist `profile`, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidId`] for an unusable profile id, or an
    /// I/O or serialization error if the write fails. The in-memory profile
    /// is never modified, so a failed save can be retried.
    fn save(&mut self, profile: &PlayerProfile) -> Result<(), StorageError>;

    /// Load the profile stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if nothing is stored under `id`.
    fn load(&self, id: &ProfileId) -> Result<PlayerProfile, StorageError>;

    /// Whether a profile is stored under `id`.
    fn exists(&self, id: &ProfileId) -> bool;

    /// Every stored profile id, sorted.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backing store cannot be listed.
    fn list(&self) -> Result<Vec<ProfileId>, StorageError>;

    /// Remove the profile stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if nothing is stored under `id`.
    fn delete(&mut self, id: &ProfileId) -> Result<(), StorageError>;
}

/// Reject ids that cannot safely name a file.
///
/// # Errors
///
/// Returns [`StorageError::InvalidId`] for an empty id, an id starting with
/// `.`, or an id containing a path separator.
pub fn validate_id(id: &ProfileId) -> Result<(), StorageError> {
    let raw = id.as_str();
    if raw.is_empty() || raw.starts_with('.') || raw.contains(['/', '\\']) {
        return Err(StorageError::InvalidId(raw.to_owned()));
    }
    Ok(())
}
