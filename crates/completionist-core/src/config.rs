//! Configuration loading and typed config structures for the tracker.
//!
//! The configuration lives in `completionist.yaml` at the project root.
//! Every key is optional; a missing file or an empty document yields the
//! defaults below.
//!
//! | Key | Default |
//! |-----|---------|
//! | `storage.profiles_dir` | `data/profiles` |
//! | `storage.default_profile` | none |
//! | `modes.alternate_unlock_threshold` | 120 |
//! | `modes.primary_name` | `Mario` |
//! | `modes.alternate_name` | `Luigi` |
//! | `milestones.grand_ordinary_required` | 240 |
//! | `milestones.grand_rare_required` | 6 |
//! | `logging.level` | `info` |

use std::path::{Path, PathBuf};

use serde::Deserialize;

use completionist_catalog::{
    GRAND_ORDINARY_REQUIRED, GRAND_RARE_REQUIRED, TRIAL_PER_MODE_REQUIRED, UnlockCondition,
};
use completionist_types::CharacterMode;

/// Environment variable overriding `storage.profiles_dir`.
pub const DATA_DIR_ENV: &str = "COMPLETIONIST_DATA_DIR";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level tracker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrackerConfig {
    /// Where profiles are stored.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Character-mode names and gating.
    #[serde(default)]
    pub modes: ModesConfig,

    /// Milestone thresholds.
    #[serde(default)]
    pub milestones: MilestonesConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TrackerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `COMPLETIONIST_DATA_DIR` overrides `storage.profiles_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.storage.apply_env_overrides();
        Ok(config)
    }
}

/// Profile storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per profile.
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: PathBuf,

    /// Profile used when no `--profile` is given.
    #[serde(default)]
    pub default_profile: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profiles_dir: default_profiles_dir(),
            default_profile: None,
        }
    }
}

impl StorageConfig {
    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(DATA_DIR_ENV) {
            self.profiles_dir = PathBuf::from(val);
        }
    }
}

/// Character-mode configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModesConfig {
    /// Primary scoped count at which the alternate mode becomes selectable.
    #[serde(default = "default_alternate_unlock_threshold")]
    pub alternate_unlock_threshold: u32,

    /// Display name of the primary mode.
    #[serde(default = "default_primary_name")]
    pub primary_name: String,

    /// Display name of the alternate mode.
    #[serde(default = "default_alternate_name")]
    pub alternate_name: String,
}

impl Default for ModesConfig {
    fn default() -> Self {
        Self {
            alternate_unlock_threshold: default_alternate_unlock_threshold(),
            primary_name: default_primary_name(),
            alternate_name: default_alternate_name(),
        }
    }
}

impl ModesConfig {
    /// Display name of `mode`.
    pub fn display_name(&self, mode: CharacterMode) -> &str {
        match mode {
            CharacterMode::Primary => &self.primary_name,
            CharacterMode::Alternate => &self.alternate_name,
        }
    }
}

/// Milestone thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MilestonesConfig {
    /// Non-reserved items across both modes for full completion.
    #[serde(default = "default_grand_ordinary_required")]
    pub grand_ordinary_required: u32,

    /// Rare items across both modes for full completion.
    #[serde(default = "default_grand_rare_required")]
    pub grand_rare_required: u32,
}

impl Default for MilestonesConfig {
    fn default() -> Self {
        Self {
            grand_ordinary_required: default_grand_ordinary_required(),
            grand_rare_required: default_grand_rare_required(),
        }
    }
}

impl MilestonesConfig {
    /// The condition whose first satisfaction is the full-completion milestone.
    pub const fn full_completion(&self) -> UnlockCondition {
        UnlockCondition::GrandAggregate {
            required_ordinary: self.grand_ordinary_required,
            required_rare: self.grand_rare_required,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_profiles_dir() -> PathBuf {
    PathBuf::from("data/profiles")
}

const fn default_alternate_unlock_threshold() -> u32 {
    TRIAL_PER_MODE_REQUIRED
}

fn default_primary_name() -> String {
    "Mario".to_owned()
}

fn default_alternate_name() -> String {
    "Luigi".to_owned()
}

const fn default_grand_ordinary_required() -> u32 {
    GRAND_ORDINARY_REQUIRED
}

const fn default_grand_rare_required() -> u32 {
    GRAND_RARE_REQUIRED
}

fn default_log_level() -> String {
    "info".to_owned()
}
