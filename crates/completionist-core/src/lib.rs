//! Character-mode overlay, progression engine, and tracking session.
//!
//! This crate ties the immutable catalog to mutable progress. A session
//! ([`Tracker`]) owns one [`Collection`], one [`PlayerProfile`], and a
//! storage backend. Each user intent becomes exactly one tracker call:
//!
//! ```text
//! intent --> Tracker --> ProgressStore mutation
//!                   |--> ProgressionEngine (after a collection)
//!                   +--> StorageService::save
//! ```
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `completionist.yaml` into
//!   strongly-typed structs.
//! - [`overlay`] -- [`ModeOverlay`]: mode-scoped queries over one store.
//! - [`engine`] -- [`ProgressionEngine`]: auto-reveal, unlock
//!   notifications, and one-time milestones.
//! - [`tracker`] -- [`Tracker`]: the mutation API and persistence.
//!
//! [`Collection`]: completionist_catalog::Collection
//! [`PlayerProfile`]: completionist_progress::PlayerProfile

pub mod config;
pub mod engine;
pub mod overlay;
pub mod tracker;

// Re-export primary types at crate root.
pub use config::{ConfigError, TrackerConfig};
pub use engine::{LockSnapshot, MilestoneState, ProgressionEngine};
pub use overlay::{ModeOverlay, is_mode_available};
pub use tracker::{Tracker, TrackerError};
