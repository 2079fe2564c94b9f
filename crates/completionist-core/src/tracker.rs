//! The session: one collection, one profile, one storage backend.
//!
//! [`Tracker`] is the mutation API the front end drives. Every operation
//! validates its target against the collection before touching progress,
//! applies the change to the active mode's namespace, runs the
//! [`ProgressionEngine`] after a collection, and saves the whole profile.
//!
//! A failed save is reported but leaves the in-memory profile as mutated,
//! so [`Tracker::save`] can retry it.

use tracing::info;

use completionist_catalog::{CatalogError, Collection, Item};
use completionist_progress::{PlayerProfile, ProgressError, ProgressStore};
use completionist_store::{StorageError, StorageService};
use completionist_types::{
    AreaId, CharacterMode, ItemId, Notification, ProfileId, ProgressKey, SectionId,
};

use crate::config::TrackerConfig;
use crate::engine::{LockSnapshot, ProgressionEngine};
use crate::overlay::{ModeOverlay, is_mode_available};

/// Errors that can occur during a tracker operation.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// A progress record rejected the change.
    #[error("progress error: {source}")]
    Progress {
        /// The underlying progress error.
        #[from]
        source: ProgressError,
    },

    /// An identifier is not part of the collection.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: CatalogError,
    },

    /// Persisting or loading the profile failed.
    #[error("storage error: {source}")]
    Storage {
        /// The underlying storage error.
        #[from]
        source: StorageError,
    },

    /// The requested mode is not selectable yet.
    #[error("{mode} mode is locked")]
    ModeLocked {
        /// The requested mode.
        mode: CharacterMode,
    },

    /// Bulk toggles need spoilers enabled.
    #[error("spoilers must be enabled for bulk toggles")]
    SpoilersDisabled,
}

/// A tracking session over one collection and one profile.
#[derive(Debug)]
pub struct Tracker<S> {
    collection: Collection,
    profile: PlayerProfile,
    storage: S,
    engine: ProgressionEngine,
    config: TrackerConfig,
    empty: ProgressStore,
}

impl<S: StorageService> Tracker<S> {
    /// Start a session for an already loaded profile.
    pub fn new(
        collection: Collection,
        mut profile: PlayerProfile,
        storage: S,
        config: TrackerConfig,
    ) -> Self {
        let store = profile.game_mut(collection.id());
        let engine = ProgressionEngine::new(&config, &collection, store);
        info!(
            profile = %profile.id(),
            collection = %collection.id(),
            mode = %profile.active_mode(),
            "Session started"
        );
        Self {
            collection,
            profile,
            storage,
            engine,
            config,
            empty: ProgressStore::new(),
        }
    }

    /// Load the profile stored under `id` and start a session.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the profile cannot be loaded.
    pub fn open(
        collection: Collection,
        storage: S,
        id: &ProfileId,
        config: TrackerConfig,
    ) -> Result<Self, TrackerError> {
        let profile = storage.load(id)?;
        Ok(Self::new(collection, profile, storage, config))
    }

    /// Create, save, and open a new profile named `display_name`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the new profile cannot be saved.
    pub fn create(
        collection: Collection,
        mut storage: S,
        display_name: &str,
        config: TrackerConfig,
    ) -> Result<Self, TrackerError> {
        let profile = PlayerProfile::new(display_name);
        storage.save(&profile)?;
        info!(profile = %profile.id(), name = display_name, "Created profile");
        Ok(Self::new(collection, profile, storage, config))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The collection being tracked.
    pub const fn collection(&self) -> &Collection {
        &self.collection
    }

    /// The player profile.
    pub const fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// The storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// The session configuration.
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// The milestone engine.
    pub const fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    /// Progress for the tracked collection.
    pub fn store(&self) -> &ProgressStore {
        self.profile
            .game(self.collection.id())
            .unwrap_or(&self.empty)
    }

    /// The active character mode.
    pub const fn active_mode(&self) -> CharacterMode {
        self.profile.active_mode()
    }

    /// Mode-scoped view of the active mode, honouring the spoilers setting.
    pub fn overlay(&self) -> ModeOverlay<'_> {
        ModeOverlay::new(&self.collection, self.store(), self.active_mode())
            .with_spoilers(self.profile.spoilers_enabled())
    }

    /// Whether `mode` can be selected.
    pub fn is_mode_available(&self, mode: CharacterMode) -> bool {
        is_mode_available(
            &self.collection,
            self.store(),
            mode,
            self.config.modes.alternate_unlock_threshold,
        )
    }

    /// Notifications from the most recent collection.
    pub fn notifications(&self) -> &[Notification] {
        self.engine.notifications()
    }

    // -----------------------------------------------------------------------
    // Item mutations
    // -----------------------------------------------------------------------

    /// Collect `item` in the active mode.
    ///
    /// Returns `false` if it was already collected; nothing is saved then.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Catalog`] for an unknown item, or
    /// [`TrackerError::Storage`] if the save fails.
    pub fn mark_collected(&mut self, item: &ItemId) -> Result<bool, TrackerError> {
        self.require_item(item)?;
        let mode = self.active_mode();
        let before = LockSnapshot::capture(&self.collection, self.store(), mode);

        let store = self.profile.game_mut(self.collection.id());
        if !store.mark_collected(&ProgressKey::new(mode, item.clone())) {
            return Ok(false);
        }
        info!(%item, %mode, "Collected");

        if let Some(next) = self
            .engine
            .on_collected(&self.collection, store, mode, &before)
        {
            self.profile.set_active_mode(next);
            info!(from = %mode, to = %next, "Switched mode automatically");
        }
        self.save()?;
        Ok(true)
    }

    /// Uncollect `item` in the active mode. Never reveals or fires
    /// milestones.
    ///
    /// Returns `false` if it was not collected.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Catalog`] for an unknown item, or
    /// [`TrackerError::Storage`] if the save fails.
    pub fn mark_uncollected(&mut self, item: &ItemId) -> Result<bool, TrackerError> {
        self.require_item(item)?;
        let key = ProgressKey::new(self.active_mode(), item.clone());
        if !self.store_mut().mark_uncollected(&key) {
            return Ok(false);
        }
        info!(%item, mode = %key.mode, "Uncollected");
        self.save()?;
        Ok(true)
    }

    /// Reveal or hide `item` in the active mode.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Catalog`] for an unknown item, or
    /// [`TrackerError::Storage`] if the save fails.
    pub fn set_revealed(&mut self, item: &ItemId, revealed: bool) -> Result<(), TrackerError> {
        self.require_item(item)?;
        let key = ProgressKey::new(self.active_mode(), item.clone());
        self.store_mut().set_revealed(&key, revealed);
        self.save()
    }

    /// Set or clear the note on `item` in the active mode.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Catalog`] for an unknown item, or
    /// [`TrackerError::Storage`] if the save fails.
    pub fn set_note(&mut self, item: &ItemId, note: Option<String>) -> Result<(), TrackerError> {
        self.require_item(item)?;
        let key = ProgressKey::new(self.active_mode(), item.clone());
        self.store_mut().set_note(&key, note);
        self.save()
    }

    /// Set or clear the difficulty rating on `item` in the active mode.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Progress`] for a rating outside 1 to 5, with
    /// the previous rating kept, [`TrackerError::Catalog`] for an unknown
    /// item, or [`TrackerError::Storage`] if the save fails.
    pub fn set_difficulty_rating(
        &mut self,
        item: &ItemId,
        rating: Option<u8>,
    ) -> Result<(), TrackerError> {
        self.require_item(item)?;
        let key = ProgressKey::new(self.active_mode(), item.clone());
        self.store_mut().set_difficulty_rating(&key, rating)?;
        self.save()
    }

    // -----------------------------------------------------------------------
    // Bulk toggles
    // -----------------------------------------------------------------------

    /// Collect every item of `area`, or uncollect them all if all are
    /// collected already. Requires spoilers.
    ///
    /// Returns `true` when the items were collected.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::SpoilersDisabled`] without spoilers,
    /// [`TrackerError::Catalog`] for an unknown area, or
    /// [`TrackerError::Storage`] if the save fails.
    pub fn toggle_area(&mut self, area: &AreaId) -> Result<bool, TrackerError> {
        self.require_spoilers()?;
        let items = self
            .collection
            .find_area(area)
            .ok_or_else(|| CatalogError::AreaNotFound(area.clone()))?
            .items()
            .iter()
            .map(Item::id)
            .cloned()
            .collect();
        self.toggle_items(items)
    }

    /// Collect every item of `section`, or uncollect them all if all are
    /// collected already. Requires spoilers.
    ///
    /// Returns `true` when the items were collected.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::SpoilersDisabled`] without spoilers,
    /// [`TrackerError::Catalog`] for an unknown section, or
    /// [`TrackerError::Storage`] if the save fails.
    pub fn toggle_section(&mut self, section: &SectionId) -> Result<bool, TrackerError> {
        self.require_spoilers()?;
        let items = self
            .collection
            .find_section(section)
            .ok_or_else(|| CatalogError::SectionNotFound(section.clone()))?
            .items()
            .map(Item::id)
            .cloned()
            .collect();
        self.toggle_items(items)
    }

    fn toggle_items(&mut self, items: Vec<ItemId>) -> Result<bool, TrackerError> {
        let mode = self.active_mode();
        let overlay = self.overlay();
        let collect = !items.iter().all(|id| overlay.is_collected(id));
        let before = LockSnapshot::capture(&self.collection, self.store(), mode);

        let store = self.profile.game_mut(self.collection.id());
        let mut changed = false;
        for id in items {
            let key = ProgressKey::new(mode, id);
            if collect {
                changed |= store.mark_collected(&key);
                if !store.is_revealed(&key) {
                    store.set_revealed(&key, true);
                }
            } else {
                changed |= store.mark_uncollected(&key);
            }
        }
        info!(%mode, collect, changed, "Bulk toggle");

        let switched = if collect && changed {
            self.engine
                .on_collected(&self.collection, store, mode, &before)
        } else {
            None
        };
        if let Some(next) = switched {
            self.profile.set_active_mode(next);
            info!(from = %mode, to = %next, "Switched mode automatically");
        }
        self.save()?;
        Ok(collect)
    }

    // -----------------------------------------------------------------------
    // Profile settings
    // -----------------------------------------------------------------------

    /// Switch the active mode.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ModeLocked`] if `mode` is not selectable yet,
    /// or [`TrackerError::Storage`] if the save fails.
    pub fn switch_mode(&mut self, mode: CharacterMode) -> Result<(), TrackerError> {
        if !self.is_mode_available(mode) {
            return Err(TrackerError::ModeLocked { mode });
        }
        self.profile.set_active_mode(mode);
        self.store_mut().mark_entered(mode);
        self.engine.mode_entered(mode);
        info!(%mode, "Switched mode");
        self.save()
    }

    /// Show or hide every hidden item.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the save fails.
    pub fn set_spoilers(&mut self, enabled: bool) -> Result<(), TrackerError> {
        self.profile.set_spoilers_enabled(enabled);
        self.save()
    }

    /// Rename the profile.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the save fails.
    pub fn rename(&mut self, display_name: &str) -> Result<(), TrackerError> {
        self.profile.rename(display_name);
        self.save()
    }

    /// Add star bits.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the save fails.
    pub fn add_star_bits(&mut self, amount: u32) -> Result<(), TrackerError> {
        self.profile.add_star_bits(amount);
        self.save()
    }

    /// Remove star bits, stopping at zero.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the save fails.
    pub fn remove_star_bits(&mut self, amount: u32) -> Result<(), TrackerError> {
        self.profile.remove_star_bits(amount);
        self.save()
    }

    /// Add `minutes` to the logged play time.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the save fails.
    pub fn log_play_time(&mut self, minutes: u64) -> Result<(), TrackerError> {
        self.profile.add_play_time(minutes);
        self.save()
    }

    /// Persist the profile.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the save fails. The in-memory
    /// state is untouched, so the call can be retried.
    pub fn save(&mut self) -> Result<(), TrackerError> {
        self.profile.update_last_played();
        self.storage.save(&self.profile)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn store_mut(&mut self) -> &mut ProgressStore {
        self.profile.game_mut(self.collection.id())
    }

    fn require_item(&self, item: &ItemId) -> Result<(), CatalogError> {
        self.collection
            .find_item(item)
            .map(|_| ())
            .ok_or_else(|| CatalogError::ItemNotFound(item.clone()))
    }

    const fn require_spoilers(&self) -> Result<(), TrackerError> {
        if self.profile.spoilers_enabled() {
            Ok(())
        } else {
            Err(TrackerError::SpoilersDisabled)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use completionist_catalog::{AreaBuilder, CollectionBuilder, SectionBuilder, UnlockCondition};
    use completionist_store::MemoryStorage;

    use super::*;

    fn collection() -> Collection {
        CollectionBuilder::new("g", "G")
            .section(
                SectionBuilder::new("s", "S").area(
                    AreaBuilder::new("a", "A")
                        .item(Item::ordinary("a1", "A1"))
                        .item(Item::ordinary("a2", "A2"))
                        .item(Item::challenge(
                            "a-comet",
                            "Comet",
                            UnlockCondition::any_of(["a2"]),
                        )),
                ),
            )
            .build()
            .unwrap()
    }

    fn tracker() -> Tracker<MemoryStorage> {
        Tracker::create(collection(), MemoryStorage::new(), "Tester", TrackerConfig::default())
            .unwrap()
    }

    /// Storage whose saves fail until `fail` is cleared.
    #[derive(Debug, Default)]
    struct FlakyStorage {
        fail: bool,
        inner: MemoryStorage,
    }

    impl StorageService for FlakyStorage {
        fn save(&mut self, profile: &PlayerProfile) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Io(std::io::Error::other("disk full")));
            }
            self.inner.save(profile)
        }

        fn load(&self, id: &ProfileId) -> Result<PlayerProfile, StorageError> {
            self.inner.load(id)
        }

        fn exists(&self, id: &ProfileId) -> bool {
            self.inner.exists(id)
        }

        fn list(&self) -> Result<Vec<ProfileId>, StorageError> {
            self.inner.list()
        }

        fn delete(&mut self, id: &ProfileId) -> Result<(), StorageError> {
            self.inner.delete(id)
        }
    }

    #[test]
    fn unknown_item_is_rejected_without_mutation() {
        let mut t = tracker();
        let result = t.mark_collected(&ItemId::new("nope"));
        assert!(matches!(
            result,
            Err(TrackerError::Catalog {
                source: CatalogError::ItemNotFound(_)
            })
        ));
        assert_eq!(t.store().collected_count(), 0);
        let missing = ProgressKey::new(CharacterMode::Primary, ItemId::new("nope"));
        assert!(t.store().get(&missing).is_none());
    }

    #[test]
    fn collect_saves_and_reveals() {
        let mut t = tracker();
        assert!(t.mark_collected(&ItemId::new("a2")).unwrap());
        assert!(!t.mark_collected(&ItemId::new("a2")).unwrap());
        assert!(t.overlay().is_revealed(&ItemId::new("a-comet")));

        let saved = t.storage().load(t.profile().id()).unwrap();
        assert_eq!(&saved, t.profile());
    }

    #[test]
    fn rating_outside_range_keeps_previous() {
        let mut t = tracker();
        let item = ItemId::new("a1");
        t.set_difficulty_rating(&item, Some(3)).unwrap();
        for bad in [0, 6] {
            assert!(matches!(
                t.set_difficulty_rating(&item, Some(bad)),
                Err(TrackerError::Progress { .. })
            ));
        }
        let key = ProgressKey::new(CharacterMode::Primary, item.clone());
        assert_eq!(t.store().get(&key).unwrap().difficulty_rating(), Some(3));
        t.set_difficulty_rating(&item, None).unwrap();
        assert_eq!(t.store().get(&key).unwrap().difficulty_rating(), None);
    }

    #[test]
    fn alternate_mode_is_locked_at_start() {
        let mut t = tracker();
        assert!(matches!(
            t.switch_mode(CharacterMode::Alternate),
            Err(TrackerError::ModeLocked {
                mode: CharacterMode::Alternate
            })
        ));
        t.switch_mode(CharacterMode::Primary).unwrap();
        assert_eq!(t.active_mode(), CharacterMode::Primary);
    }

    #[test]
    fn bulk_toggle_needs_spoilers() {
        let mut t = tracker();
        let area = AreaId::new("a");
        assert!(matches!(
            t.toggle_area(&area),
            Err(TrackerError::SpoilersDisabled)
        ));

        t.set_spoilers(true).unwrap();
        assert!(t.toggle_area(&area).unwrap());
        assert_eq!(t.store().collected_count(), 3);
        assert!(t.overlay().is_revealed(&ItemId::new("a-comet")));

        assert!(!t.toggle_section(&SectionId::new("s")).unwrap());
        assert_eq!(t.store().collected_count(), 0);
        assert!(matches!(
            t.toggle_section(&SectionId::new("missing")),
            Err(TrackerError::Catalog { .. })
        ));
    }

    #[test]
    fn failed_save_keeps_memory_state_and_retries() {
        let profile = PlayerProfile::with_id(ProfileId::new("flaky"), "Flaky");
        let storage = FlakyStorage {
            fail: true,
            inner: MemoryStorage::new(),
        };
        let mut t = Tracker::new(collection(), profile, storage, TrackerConfig::default());

        let result = t.mark_collected(&ItemId::new("a1"));
        assert!(matches!(result, Err(TrackerError::Storage { .. })));
        assert!(t.overlay().is_collected(&ItemId::new("a1")));
        assert!(!t.storage().exists(t.profile().id()));

        t.storage.fail = false;
        t.save().unwrap();
        let saved = t.storage().load(t.profile().id()).unwrap();
        assert!(saved
            .game(t.collection().id())
            .unwrap()
            .is_collected(&ProgressKey::new(CharacterMode::Primary, ItemId::new("a1"))));
    }

    #[test]
    fn profile_settings_persist() {
        let mut t = tracker();
        t.rename("Renamed").unwrap();
        t.add_star_bits(50).unwrap();
        t.remove_star_bits(80).unwrap();
        t.log_play_time(90).unwrap();
        t.set_note(&ItemId::new("a1"), Some("tricky jump".to_owned())).unwrap();

        let saved = t.storage().load(t.profile().id()).unwrap();
        assert_eq!(saved.display_name(), "Renamed");
        assert_eq!(saved.star_bits(), 0);
        assert_eq!(saved.formatted_play_time(), "1h 30m");
        let notes = t.overlay().notes();
        assert_eq!(notes.len(), 1);
    }
}
