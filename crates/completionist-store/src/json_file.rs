//! One JSON file per profile.
//!
//! Layout under the profiles directory:
//!
//! ```text
//! <dir>/<id>.json       current version (pretty JSON)
//! <dir>/<id>.json.bak   previous version
//! <dir>/.<id>.json.tmp  in-flight write, renamed over <id>.json
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use completionist_progress::PlayerProfile;
use completionist_types::ProfileId;

use crate::error::StorageError;
use crate::{StorageService, validate_id};

const EXTENSION: &str = "json";

/// File-backed profile storage.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "Opened profile storage");
        Ok(Self { dir })
    }

    /// The profiles directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the current version of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidId`] for an unusable id.
    pub fn profile_path(&self, id: &ProfileId) -> Result<PathBuf, StorageError> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{id}.{EXTENSION}")))
    }

    /// Path of the backup of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidId`] for an unusable id.
    pub fn backup_path(&self, id: &ProfileId) -> Result<PathBuf, StorageError> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{id}.{EXTENSION}.bak")))
    }

    fn temp_path(&self, id: &ProfileId) -> PathBuf {
        self.dir.join(format!(".{id}.{EXTENSION}.tmp"))
    }
}

impl StorageService for JsonFileStorage {
    fn save(&mut self, profile: &PlayerProfile) -> Result<(), StorageError> {
        let id = profile.id();
        let path = self.profile_path(id)?;
        let json = serde_json::to_string_pretty(profile)?;

        if path.is_file() {
            let backup = self.backup_path(id)?;
            if let Err(err) = fs::copy(&path, &backup) {
                tracing::warn!(profile = %id, error = %err, "Failed to back up profile");
            }
        }

        let temp = self.temp_path(id);
        fs::write(&temp, json)?;
        if let Err(err) = fs::rename(&temp, &path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                tracing::warn!(
                    profile = %id,
                    path = %temp.display(),
                    error = %cleanup,
                    "Failed to remove temporary profile file"
                );
            }
            return Err(err.into());
        }

        tracing::info!(profile = %id, path = %path.display(), "Saved profile");
        Ok(())
    }

    fn load(&self, id: &ProfileId) -> Result<PlayerProfile, StorageError> {
        let path = self.profile_path(id)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(id.clone()));
            }
            Err(err) => return Err(err.into()),
        };
        let profile = serde_json::from_str(&json)?;
        tracing::debug!(profile = %id, "Loaded profile");
        Ok(profile)
    }

    fn exists(&self, id: &ProfileId) -> bool {
        self.profile_path(id).is_ok_and(|path| path.is_file())
    }

    fn list(&self) -> Result<Vec<ProfileId>, StorageError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let id = ProfileId::new(stem);
            if validate_id(&id).is_ok() {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn delete(&mut self, id: &ProfileId) -> Result<(), StorageError> {
        let path = self.profile_path(id)?;
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(id.clone()));
            }
            Err(err) => return Err(err.into()),
        }

        let backup = self.backup_path(id)?;
        match fs::remove_file(&backup) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(profile = %id, error = %err, "Failed to remove profile backup");
            }
        }

        tracing::info!(profile = %id, "Deleted profile");
        Ok(())
    }
}
