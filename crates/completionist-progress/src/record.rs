//! Progress for a single item in a single mode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use completionist_types::ItemId;

use crate::ProgressError;

/// Smallest accepted difficulty rating.
pub const MIN_DIFFICULTY: u8 = 1;

/// Largest accepted difficulty rating.
pub const MAX_DIFFICULTY: u8 = 5;

/// Check that `rating` lies in `[MIN_DIFFICULTY, MAX_DIFFICULTY]`.
///
/// # Errors
///
/// Returns [`ProgressError::InvalidDifficulty`] for any other value.
pub const fn validate_difficulty(rating: u8) -> Result<u8, ProgressError> {
    if rating < MIN_DIFFICULTY || rating > MAX_DIFFICULTY {
        return Err(ProgressError::InvalidDifficulty {
            rating,
            min: MIN_DIFFICULTY,
            max: MAX_DIFFICULTY,
        });
    }
    Ok(rating)
}

/// Mutable progress record for one item.
///
/// Records start uncollected, unrevealed, without a note or rating. The
/// collected timestamp is set on the false-to-true transition and cleared
/// again when the item is uncollected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProgress {
    item_id: ItemId,
    #[serde(default)]
    collected: bool,
    #[serde(default)]
    collected_at: Option<DateTime<Utc>>,
    #[serde(default)]
    revealed: bool,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    difficulty_rating: Option<u8>,
}

impl ItemProgress {
    /// Create a default record for `item_id`.
    pub const fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            collected: false,
            collected_at: None,
            revealed: false,
            note: None,
            difficulty_rating: None,
        }
    }

    /// The item this record tracks.
    pub const fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Whether the item has been collected.
    pub const fn is_collected(&self) -> bool {
        self.collected
    }

    /// When the item was collected, if it currently is.
    pub const fn collected_at(&self) -> Option<DateTime<Utc>> {
        self.collected_at
    }

    /// Whether a hidden item has been revealed.
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The player's note, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// The player's difficulty rating, if any.
    pub const fn difficulty_rating(&self) -> Option<u8> {
        self.difficulty_rating
    }

    /// Mark collected. Returns `true` only on the false-to-true transition.
    ///
    /// A repeated call leaves the timestamp, reveal flag, and note untouched.
    pub fn mark_collected(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        self.collected_at = Some(Utc::now());
        true
    }

    /// Mark uncollected. Returns `true` only on the true-to-false transition.
    pub fn mark_uncollected(&mut self) -> bool {
        if !self.collected {
            return false;
        }
        self.collected = false;
        self.collected_at = None;
        true
    }

    /// Set the reveal flag.
    pub const fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    /// Set or clear the note. The text is stored as given.
    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    /// Set or clear the difficulty rating.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::InvalidDifficulty`] when the rating is out of
    /// range. The previous rating is kept.
    pub fn set_difficulty_rating(&mut self, rating: Option<u8>) -> Result<(), ProgressError> {
        if let Some(value) = rating {
            validate_difficulty(value)?;
        }
        self.difficulty_rating = rating;
        Ok(())
    }

    /// Render the rating as filled and empty stars, e.g. `★★★☆☆`.
    pub fn difficulty_stars(&self) -> String {
        match self.difficulty_rating {
            Some(rating) => {
                let filled = rating.min(MAX_DIFFICULTY);
                let empty = MAX_DIFFICULTY.saturating_sub(filled);
                format!(
                    "{}{}",
                    "★".repeat(usize::from(filled)),
                    "☆".repeat(usize::from(empty))
                )
            }
            None => "Not rated".to_owned(),
        }
    }
}
