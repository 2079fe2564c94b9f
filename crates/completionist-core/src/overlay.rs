//! Character-mode overlay: one hierarchy viewed through one mode namespace.
//!
//! A [`ModeOverlay`] pairs the immutable [`Collection`] with a read-only
//! [`ProgressStore`] and the active [`CharacterMode`]. Every item-level
//! query resolves through the structured `(mode, item)` key, and every
//! condition is evaluated in the mode's scope. Nothing here mutates.

use completionist_catalog::{
    Area, Collection, CompletionTrackable, EvalContext, Item, Section, UnlockCondition,
};
use completionist_progress::{ItemProgress, ProgressStore};
use completionist_types::{CharacterMode, ItemId, ItemKind, ProgressKey};

/// Read-only, mode-scoped view over a collection's progress.
#[derive(Debug, Clone, Copy)]
pub struct ModeOverlay<'a> {
    collection: &'a Collection,
    store: &'a ProgressStore,
    mode: CharacterMode,
    spoilers: bool,
}

impl<'a> ModeOverlay<'a> {
    /// View `store` through `mode`, with spoilers off.
    pub const fn new(
        collection: &'a Collection,
        store: &'a ProgressStore,
        mode: CharacterMode,
    ) -> Self {
        Self {
            collection,
            store,
            mode,
            spoilers: false,
        }
    }

    /// Show hidden items regardless of reveal state.
    #[must_use]
    pub const fn with_spoilers(mut self, spoilers: bool) -> Self {
        self.spoilers = spoilers;
        self
    }

    /// The active mode.
    pub const fn mode(&self) -> CharacterMode {
        self.mode
    }

    /// The collection being viewed.
    pub const fn collection(&self) -> &'a Collection {
        self.collection
    }

    /// The effective progress key of `item` in the active mode.
    pub fn key(&self, item: &ItemId) -> ProgressKey {
        ProgressKey::new(self.mode, item.clone())
    }

    /// Evaluation context scoped to the active mode.
    pub const fn context(&self) -> EvalContext<'a> {
        self.collection.context(self.store, Some(self.mode))
    }

    /// Collected non-reserved items in the active mode.
    pub fn scoped_count(&self) -> u32 {
        self.context().scoped_count(self.mode)
    }

    /// Evaluate `condition` in the active mode.
    pub fn is_met(&self, condition: &UnlockCondition) -> bool {
        condition.evaluate(&self.context())
    }

    /// Whether `item` is collected in the active mode.
    pub fn is_collected(&self, item: &ItemId) -> bool {
        self.store.is_collected(&self.key(item))
    }

    /// Whether `item` has been revealed in the active mode.
    pub fn is_revealed(&self, item: &ItemId) -> bool {
        self.store.is_revealed(&self.key(item))
    }

    /// The progress record of `item` in the active mode, if any.
    pub fn record(&self, item: &ItemId) -> Option<&'a ItemProgress> {
        self.store.get(&self.key(item))
    }

    /// Whether `item` should be shown.
    ///
    /// Visible when it is not hidden by default, was revealed, has a met
    /// condition, or spoilers are on.
    pub fn is_visible(&self, item: &Item) -> bool {
        self.spoilers
            || !item.is_hidden_by_default()
            || self.is_revealed(item.id())
            || item.unlock_condition().is_some_and(|c| self.is_met(c))
    }

    /// Whether `area` is unlocked in the active mode.
    pub fn is_area_unlocked(&self, area: &Area) -> bool {
        area.unlock_condition().is_none_or(|c| self.is_met(c))
    }

    /// Whether `section` is unlocked in the active mode.
    pub fn is_section_unlocked(&self, section: &Section) -> bool {
        section.unlock_condition().is_none_or(|c| self.is_met(c))
    }

    /// Items of `area` to display, in order.
    pub fn visible_items(&self, area: &'a Area) -> impl Iterator<Item = &'a Item> + '_ {
        area.items().iter().filter(|item| self.is_visible(item))
    }

    /// Collected and total items of `area` in the active mode.
    pub fn area_progress(&self, area: &Area) -> (u32, u32) {
        (
            area.completed_items_in(Some(self.store), self.mode),
            area.total_items(),
        )
    }

    /// Collected and total rare items of `area` in the active mode.
    pub fn rare_progress(&self, area: &Area) -> (u32, u32) {
        area.items()
            .iter()
            .filter(|item| item.kind() == ItemKind::Rare)
            .fold((0_u32, 0_u32), |(collected, total), item| {
                let collected = if self.is_collected(item.id()) {
                    collected.saturating_add(1)
                } else {
                    collected
                };
                (collected, total.saturating_add(1))
            })
    }

    /// Completion percentage of the whole collection in the active mode.
    pub fn completion_percentage(&self) -> f64 {
        self.collection
            .completion_percentage_in(Some(self.store), self.mode)
    }

    /// Every noted item in the active mode, in collection order.
    pub fn notes(&self) -> Vec<(&'a Item, &'a str)> {
        let namespace = self.store.namespace(self.mode);
        self.collection
            .items()
            .filter_map(|item| {
                let note = namespace.get(item.id())?.note()?;
                Some((item, note))
            })
            .collect()
    }
}

/// Whether `mode` can be selected.
///
/// The primary mode is always available. The alternate mode becomes
/// available once the primary scoped count reaches `threshold`, and stays
/// available after it has been entered once.
pub fn is_mode_available(
    collection: &Collection,
    store: &ProgressStore,
    mode: CharacterMode,
    threshold: u32,
) -> bool {
    match mode {
        CharacterMode::Primary => true,
        CharacterMode::Alternate => {
            store.has_entered(CharacterMode::Alternate)
                || ModeOverlay::new(collection, store, CharacterMode::Primary).scoped_count()
                    >= threshold
        }
    }
}
