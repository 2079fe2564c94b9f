//! In-memory profile storage.
//!
//! Profiles are kept serialized so that a load always returns a fresh copy
//! that went through the same JSON encoding as the file backend.

use std::collections::BTreeMap;

use completionist_progress::PlayerProfile;
use completionist_types::ProfileId;

use crate::error::StorageError;
use crate::{StorageService, validate_id};

/// Profile storage held in a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    profiles: BTreeMap<ProfileId, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub const fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is stored.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl StorageService for MemoryStorage {
    fn save(&mut self, profile: &PlayerProfile) -> Result<(), StorageError> {
        validate_id(profile.id())?;
        let json = serde_json::to_string(profile)?;
        self.profiles.insert(profile.id().clone(), json);
        tracing::debug!(profile = %profile.id(), "Saved profile in memory");
        Ok(())
    }

    fn load(&self, id: &ProfileId) -> Result<PlayerProfile, StorageError> {
        let json = self
            .profiles
            .get(id)
            .ok_or_else(|| StorageError::NotFound(id.clone()))?;
        Ok(serde_json::from_str(json)?)
    }

    fn exists(&self, id: &ProfileId) -> bool {
        self.profiles.contains_key(id)
    }

    fn list(&self) -> Result<Vec<ProfileId>, StorageError> {
        Ok(self.profiles.keys().cloned().collect())
    }

    fn delete(&mut self, id: &ProfileId) -> Result<(), StorageError> {
        self.profiles
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(id.clone()))
    }
}
