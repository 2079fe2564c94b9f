//! Player profiles: the unit of persistence.
//!
//! A [`PlayerProfile`] is one save file. It owns a [`ProgressStore`] per
//! collection plus the player-level settings that are not tied to a single
//! item: display name, spoiler visibility, the star-bit counter, logged
//! play time, and the currently active character mode.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use completionist_types::{CharacterMode, CollectionId, ProfileId};

use crate::store::ProgressStore;

/// One player's save data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    id: ProfileId,
    display_name: String,
    #[serde(default)]
    games: BTreeMap<CollectionId, ProgressStore>,
    created_at: DateTime<Utc>,
    last_played: DateTime<Utc>,
    #[serde(default)]
    spoilers_enabled: bool,
    #[serde(default)]
    star_bits: u32,
    #[serde(default)]
    play_time_minutes: u64,
    #[serde(default)]
    active_mode: CharacterMode,
}

impl PlayerProfile {
    /// Create a profile with a freshly generated identifier.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self::with_id(ProfileId::generate(), display_name)
    }

    /// Create a profile with a caller-chosen identifier.
    pub fn with_id(id: ProfileId, display_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            display_name: display_name.into(),
            games: BTreeMap::new(),
            created_at: now,
            last_played: now,
            spoilers_enabled: false,
            star_bits: 0,
            play_time_minutes: 0,
            active_mode: CharacterMode::Primary,
        }
    }

    /// The profile identifier.
    pub const fn id(&self) -> &ProfileId {
        &self.id
    }

    /// The name shown in profile pickers.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Change the display name.
    pub fn rename(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }

    /// When the profile was created.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the profile was last opened.
    pub const fn last_played(&self) -> DateTime<Utc> {
        self.last_played
    }

    /// Stamp the profile as played now.
    pub fn update_last_played(&mut self) {
        self.last_played = Utc::now();
    }

    // -----------------------------------------------------------------------
    // Per-collection progress
    // -----------------------------------------------------------------------

    /// Progress for `collection`, if any was ever recorded.
    pub fn game(&self, collection: &CollectionId) -> Option<&ProgressStore> {
        self.games.get(collection)
    }

    /// Progress for `collection`, created empty on first access.
    pub fn game_mut(&mut self, collection: &CollectionId) -> &mut ProgressStore {
        self.games.entry(collection.clone()).or_default()
    }

    /// Collections with at least one collected item.
    pub fn active_games(&self) -> impl Iterator<Item = (&CollectionId, &ProgressStore)> {
        self.games
            .iter()
            .filter(|(_, store)| store.collected_count() > 0)
    }

    /// Collected items across every collection and mode.
    pub fn total_collected(&self) -> u32 {
        self.games
            .values()
            .map(ProgressStore::collected_count)
            .fold(0_u32, u32::saturating_add)
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Whether hidden items are shown regardless of reveal state.
    pub const fn spoilers_enabled(&self) -> bool {
        self.spoilers_enabled
    }

    /// Toggle spoiler visibility.
    pub const fn set_spoilers_enabled(&mut self, enabled: bool) {
        self.spoilers_enabled = enabled;
    }

    /// The mode item operations currently read and write.
    pub const fn active_mode(&self) -> CharacterMode {
        self.active_mode
    }

    /// Change the active mode. Gating is the caller's concern.
    pub const fn set_active_mode(&mut self, mode: CharacterMode) {
        self.active_mode = mode;
    }

    // -----------------------------------------------------------------------
    // Counters
    // -----------------------------------------------------------------------

    /// Current star-bit balance.
    pub const fn star_bits(&self) -> u32 {
        self.star_bits
    }

    /// Add star bits, saturating at the counter's maximum.
    pub const fn add_star_bits(&mut self, amount: u32) {
        self.star_bits = self.star_bits.saturating_add(amount);
    }

    /// Remove star bits, saturating at zero.
    pub const fn remove_star_bits(&mut self, amount: u32) {
        self.star_bits = self.star_bits.saturating_sub(amount);
    }

    /// Logged play time in minutes.
    pub const fn play_time_minutes(&self) -> u64 {
        self.play_time_minutes
    }

    /// Add logged play time.
    pub const fn add_play_time(&mut self, minutes: u64) {
        self.play_time_minutes = self.play_time_minutes.saturating_add(minutes);
    }

    /// Play time as `"2h 30m"`, or `"45m"` under an hour.
    pub fn formatted_play_time(&self) -> String {
        let hours = self.play_time_minutes / 60;
        let minutes = self.play_time_minutes % 60;
        if hours > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{minutes}m")
        }
    }
}
