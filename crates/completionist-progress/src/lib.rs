//! Mutable progress state for the Completionist tracker.
//!
//! The catalog describes what can be collected; this crate records what a
//! player has actually collected. Nothing here knows about areas, sections,
//! or unlock conditions -- only item identifiers and character modes.
//!
//! # Architecture
//!
//! - [`record`] -- [`ItemProgress`]: one item's collected flag, timestamp,
//!   reveal flag, note, and difficulty rating.
//! - [`store`] -- [`ProgressStore`]: every record for one collection, split
//!   into one namespace per [`CharacterMode`].
//! - [`profile`] -- [`PlayerProfile`]: a save file holding a store per
//!   collection plus player-level settings.
//!
//! # Lazy Records
//!
//! Records are created on first mutable access with every field at its
//! default. Read-only queries observe the same defaults without creating
//! anything, so asking whether an item is collected never changes the store.
//!
//! ```
//! use completionist_progress::ProgressStore;
//! use completionist_types::{CharacterMode, ItemId, ProgressKey};
//!
//! let mut store = ProgressStore::new();
//! let key = ProgressKey::new(CharacterMode::Primary, ItemId::new("gateway-grand-star"));
//!
//! assert!(!store.is_collected(&key));
//! assert!(store.mark_collected(&key));
//! assert!(!store.mark_collected(&key));
//! assert_eq!(store.collected_count(), 1);
//! ```
//!
//! [`CharacterMode`]: completionist_types::CharacterMode

pub mod profile;
pub mod record;
pub mod store;

// Re-export primary types at crate root.
pub use profile::PlayerProfile;
pub use record::{ItemProgress, MAX_DIFFICULTY, MIN_DIFFICULTY, validate_difficulty};
pub use store::ProgressStore;

/// Errors that can occur when mutating progress records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// A difficulty rating outside the accepted range was supplied.
    #[error("difficulty rating must be between {min} and {max}, got {rating}")]
    InvalidDifficulty {
        /// The rejected rating.
        rating: u8,
        /// Smallest accepted rating.
        min: u8,
        /// Largest accepted rating.
        max: u8,
    },
}
