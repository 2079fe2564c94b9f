//! The progress store for one collection.
//!
//! A [`ProgressStore`] holds every [`ItemProgress`] record for a single
//! collection, split into one namespace per [`CharacterMode`]. The two
//! namespaces are fully independent: collecting an item in one never
//! touches the other.
//!
//! # Design
//!
//! - **Structured keys**: records are addressed by [`ProgressKey`], never
//!   by a prefixed string.
//! - **Lazy records**: [`ProgressStore::progress_for`] creates a record on
//!   first mutable access; shared reads observe defaults without creating.
//! - **Timestamps**: `last_updated` moves on every state-changing mutation.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use completionist_types::{CharacterMode, ItemId, Milestone, ProgressKey};

use crate::ProgressError;
use crate::record::{ItemProgress, validate_difficulty};

/// Every progress record for one collection, in two mode namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStore {
    /// Records for [`CharacterMode::Primary`].
    #[serde(default)]
    primary: BTreeMap<ItemId, ItemProgress>,
    /// Records for [`CharacterMode::Alternate`].
    #[serde(default)]
    alternate: BTreeMap<ItemId, ItemProgress>,
    /// Modes that have ever been active for this store.
    #[serde(default)]
    entered_modes: BTreeSet<CharacterMode>,
    /// Milestones that have already fired for this store.
    #[serde(default)]
    milestones: BTreeSet<Milestone>,
    started_at: DateTime<Utc>,
    last_updated: DateTime<Utc>,
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore {
    /// Create an empty store stamped with the current time.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            primary: BTreeMap::new(),
            alternate: BTreeMap::new(),
            entered_modes: BTreeSet::new(),
            milestones: BTreeSet::new(),
            started_at: now,
            last_updated: now,
        }
    }

    /// When tracking started.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When any record last changed.
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Refresh the last-mutated timestamp.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    // -----------------------------------------------------------------------
    // Namespaces
    // -----------------------------------------------------------------------

    /// All materialised records of one mode.
    pub const fn namespace(&self, mode: CharacterMode) -> &BTreeMap<ItemId, ItemProgress> {
        match mode {
            CharacterMode::Primary => &self.primary,
            CharacterMode::Alternate => &self.alternate,
        }
    }

    const fn namespace_mut(&mut self, mode: CharacterMode) -> &mut BTreeMap<ItemId, ItemProgress> {
        match mode {
            CharacterMode::Primary => &mut self.primary,
            CharacterMode::Alternate => &mut self.alternate,
        }
    }

    /// Iterate over the collected item ids of one mode.
    pub fn collected_ids(&self, mode: CharacterMode) -> impl Iterator<Item = &ItemId> {
        self.namespace(mode)
            .values()
            .filter(|record| record.is_collected())
            .map(ItemProgress::item_id)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The record for `key`, if it has been materialised.
    pub fn get(&self, key: &ProgressKey) -> Option<&ItemProgress> {
        self.namespace(key.mode).get(&key.item)
    }

    /// Whether the item is collected. Never creates a record.
    pub fn is_collected(&self, key: &ProgressKey) -> bool {
        self.get(key).is_some_and(ItemProgress::is_collected)
    }

    /// Whether the item has been revealed. Never creates a record.
    pub fn is_revealed(&self, key: &ProgressKey) -> bool {
        self.get(key).is_some_and(ItemProgress::is_revealed)
    }

    /// Number of collected records across both namespaces.
    pub fn collected_count(&self) -> u32 {
        CharacterMode::ALL
            .into_iter()
            .map(|mode| self.count_collected(mode, |_| true))
            .fold(0_u32, u32::saturating_add)
    }

    /// Number of collected records in `mode` whose id passes `include`.
    pub fn count_collected<F>(&self, mode: CharacterMode, include: F) -> u32
    where
        F: Fn(&ItemId) -> bool,
    {
        let count = self.collected_ids(mode).filter(|&id| include(id)).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Every non-empty note in `mode`, ordered by item id.
    pub fn notes(&self, mode: CharacterMode) -> Vec<(&ItemId, &str)> {
        self.namespace(mode)
            .values()
            .filter_map(|record| record.note().map(|note| (record.item_id(), note)))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// The record for `key`, created with defaults on first access.
    pub fn progress_for(&mut self, key: &ProgressKey) -> &mut ItemProgress {
        self.namespace_mut(key.mode)
            .entry(key.item.clone())
            .or_insert_with(|| ItemProgress::new(key.item.clone()))
    }

    /// Mark collected. Returns `true` only on the false-to-true transition.
    pub fn mark_collected(&mut self, key: &ProgressKey) -> bool {
        let changed = self.progress_for(key).mark_collected();
        if changed {
            self.touch();
        }
        changed
    }

    /// Mark uncollected. Returns `true` only on the true-to-false transition.
    pub fn mark_uncollected(&mut self, key: &ProgressKey) -> bool {
        let changed = self.progress_for(key).mark_uncollected();
        if changed {
            self.touch();
        }
        changed
    }

    /// Set the reveal flag.
    pub fn set_revealed(&mut self, key: &ProgressKey, revealed: bool) {
        self.progress_for(key).set_revealed(revealed);
        self.touch();
    }

    /// Set or clear the note.
    pub fn set_note(&mut self, key: &ProgressKey, note: Option<String>) {
        self.progress_for(key).set_note(note);
        self.touch();
    }

    /// Set or clear the difficulty rating.
    ///
    /// The rating is validated before the record is touched, so a rejected
    /// value neither creates a record nor moves `last_updated`.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::InvalidDifficulty`] when out of range.
    pub fn set_difficulty_rating(
        &mut self,
        key: &ProgressKey,
        rating: Option<u8>,
    ) -> Result<(), ProgressError> {
        if let Some(value) = rating {
            validate_difficulty(value)?;
        }
        self.progress_for(key).set_difficulty_rating(rating)?;
        self.touch();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Mode and milestone history
    // -----------------------------------------------------------------------

    /// Record that `mode` has been active. Returns `true` the first time.
    pub fn mark_entered(&mut self, mode: CharacterMode) -> bool {
        let first = self.entered_modes.insert(mode);
        if first {
            debug!(mode = %mode, "mode entered for the first time");
            self.touch();
        }
        first
    }

    /// Whether `mode` has ever been active.
    pub fn has_entered(&self, mode: CharacterMode) -> bool {
        self.entered_modes.contains(&mode)
    }

    /// Record that `milestone` fired. Returns `true` the first time.
    pub fn mark_milestone(&mut self, milestone: Milestone) -> bool {
        let first = self.milestones.insert(milestone);
        if first {
            debug!(?milestone, "milestone recorded");
            self.touch();
        }
        first
    }

    /// Whether `milestone` has ever fired.
    pub fn has_milestone(&self, milestone: Milestone) -> bool {
        self.milestones.contains(&milestone)
    }
}
