//! Shared type definitions for the Completionist progression tracker.
//!
//! This crate is the single source of truth for identifiers and small
//! value types used across the workspace: the catalog, the progress store,
//! the storage layer and the tracker all speak in these types.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for every content and profile identifier
//! - [`enums`] -- Item kinds and character modes
//! - [`key`] -- The structured `(mode, item)` progress key
//! - [`notification`] -- Transient notifications and one-time milestones

pub mod enums;
pub mod ids;
pub mod key;
pub mod notification;

// Re-export all public types at crate root for convenience.
pub use enums::{CharacterMode, ItemKind};
pub use ids::{AreaId, CollectionId, ItemId, ProfileId, SectionId};
pub use key::ProgressKey;
pub use notification::{Milestone, Notification, NotificationKind};
