//! Auto-reveal and milestone engine.
//!
//! The engine reacts to exactly one event: an item's collected flag going
//! from false to true. Uncollecting never reveals anything and never fires
//! a milestone. For each event, in order:
//!
//! 1. Clear the notifications queued by the previous event.
//! 2. Recompute the event mode's scoped count.
//! 3. Fire [`Milestone::AlternateModeUnlocked`] and switch to the alternate
//!    mode when the primary count reaches the threshold for the first time.
//! 4. Fire [`Milestone::FullCompletion`] when the grand aggregate is first
//!    met.
//! 5. Announce sections and areas that were locked before the event and
//!    are unlocked now, then reveal and announce every item whose condition
//!    is now met.
//!
//! # Milestone State
//!
//! Fired milestones are recorded in the [`ProgressStore`], next to the
//! entered modes. [`MilestoneState`] is derived from the store when a
//! session starts, so a milestone that fired in an earlier session stays
//! fired after a reload, even if the progress that triggered it was undone.

use std::collections::BTreeSet;

use tracing::{debug, info};

use completionist_catalog::{Area, Collection, Item, UnlockCondition};
use completionist_progress::ProgressStore;
use completionist_types::{
    AreaId, CharacterMode, ItemKind, Milestone, Notification, NotificationKind, ProgressKey,
    SectionId,
};

use crate::config::TrackerConfig;
use crate::overlay::ModeOverlay;

// ---------------------------------------------------------------------------
// Milestone state
// ---------------------------------------------------------------------------

/// One-time milestone flags for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MilestoneState {
    alternate_mode_used: bool,
    completion_celebrated: bool,
}

impl MilestoneState {
    /// Derive the flags from stored progress.
    ///
    /// A milestone counts as fired once the store has recorded it. Stores
    /// saved before milestones were recorded fall back to the progress:
    /// the alternate mode counts as used once it has been entered or holds
    /// any collected record, and full completion counts as celebrated when
    /// `full_completion` is already met.
    pub fn derive(
        collection: &Collection,
        store: &ProgressStore,
        full_completion: &UnlockCondition,
    ) -> Self {
        let alternate_mode_used = store.has_milestone(Milestone::AlternateModeUnlocked)
            || store.has_entered(CharacterMode::Alternate)
            || store.collected_ids(CharacterMode::Alternate).next().is_some();
        let completion_celebrated = store.has_milestone(Milestone::FullCompletion)
            || full_completion.evaluate(&collection.context(store, None));
        Self {
            alternate_mode_used,
            completion_celebrated,
        }
    }

    /// Whether the alternate mode has ever been used.
    pub const fn alternate_mode_used(self) -> bool {
        self.alternate_mode_used
    }

    /// Whether the full-completion milestone has fired.
    pub const fn completion_celebrated(self) -> bool {
        self.completion_celebrated
    }
}

// ---------------------------------------------------------------------------
// Lock snapshot
// ---------------------------------------------------------------------------

/// The sections and areas that were locked in one mode at one moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockSnapshot {
    sections: BTreeSet<SectionId>,
    areas: BTreeSet<AreaId>,
}

impl LockSnapshot {
    /// Record what is locked in `mode` right now.
    pub fn capture(collection: &Collection, store: &ProgressStore, mode: CharacterMode) -> Self {
        let overlay = ModeOverlay::new(collection, store, mode);
        let sections = collection
            .sections()
            .iter()
            .filter(|section| !overlay.is_section_unlocked(section))
            .map(|section| section.id().clone())
            .collect();
        let areas = collection
            .areas()
            .filter(|area| !overlay.is_area_unlocked(area))
            .map(|area| area.id().clone())
            .collect();
        Self { sections, areas }
    }

    /// Whether the section was locked.
    pub fn is_section_locked(&self, id: &SectionId) -> bool {
        self.sections.contains(id)
    }

    /// Whether the area was locked.
    pub fn is_area_locked(&self, id: &AreaId) -> bool {
        self.areas.contains(id)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Reacts to collection events with reveals, notifications, and milestones.
#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    alternate_threshold: u32,
    alternate_name: String,
    full_completion: UnlockCondition,
    state: MilestoneState,
    notifications: Vec<Notification>,
}

impl ProgressionEngine {
    /// Create an engine for one session, deriving milestone state from
    /// `store`.
    pub fn new(config: &TrackerConfig, collection: &Collection, store: &ProgressStore) -> Self {
        let full_completion = config.milestones.full_completion();
        let state = MilestoneState::derive(collection, store, &full_completion);
        debug!(
            alternate_mode_used = state.alternate_mode_used,
            completion_celebrated = state.completion_celebrated,
            "Derived milestone state"
        );
        Self {
            alternate_threshold: config.modes.alternate_unlock_threshold,
            alternate_name: config.modes.alternate_name.clone(),
            full_completion,
            state,
            notifications: Vec::new(),
        }
    }

    /// Current milestone flags.
    pub const fn state(&self) -> MilestoneState {
        self.state
    }

    /// Notifications produced by the most recent collection event.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take the queued notifications, leaving the queue empty.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Record that the player entered `mode` by hand.
    pub const fn mode_entered(&mut self, mode: CharacterMode) {
        if matches!(mode, CharacterMode::Alternate) {
            self.state.alternate_mode_used = true;
        }
    }

    /// Process a false-to-true collected transition that happened in `mode`.
    ///
    /// `before` must be captured in `mode` before the item was collected.
    /// Returns the mode to switch to when the alternate mode was just
    /// unlocked.
    pub fn on_collected(
        &mut self,
        collection: &Collection,
        store: &mut ProgressStore,
        mode: CharacterMode,
        before: &LockSnapshot,
    ) -> Option<CharacterMode> {
        self.notifications.clear();

        let scoped = ModeOverlay::new(collection, store, mode).scoped_count();
        let mut switch_to = None;

        if mode == CharacterMode::Primary
            && scoped >= self.alternate_threshold
            && !self.state.alternate_mode_used
        {
            self.state.alternate_mode_used = true;
            store.mark_milestone(Milestone::AlternateModeUnlocked);
            store.mark_entered(CharacterMode::Alternate);
            switch_to = Some(CharacterMode::Alternate);
            info!(scoped, threshold = self.alternate_threshold, "Alternate mode unlocked");
            let message = format!(
                "🎉 {name} mode unlocked! Switching to {name}.",
                name = self.alternate_name
            );
            self.push(
                mode,
                NotificationKind::Milestone {
                    milestone: Milestone::AlternateModeUnlocked,
                },
                message,
            );
        }

        if !self.state.completion_celebrated
            && self
                .full_completion
                .evaluate(&collection.context(store, None))
        {
            self.state.completion_celebrated = true;
            store.mark_milestone(Milestone::FullCompletion);
            info!("Full completion reached");
            self.push(
                mode,
                NotificationKind::Milestone {
                    milestone: Milestone::FullCompletion,
                },
                "🌠 100% complete! Every item collected in both modes.".to_owned(),
            );
        }

        // Unlocks are judged in the event's mode, even after an auto-switch.
        self.announce_unlocks(collection, store, mode, before);
        self.reveal_items(collection, store, mode);
        switch_to
    }

    fn announce_unlocks(
        &mut self,
        collection: &Collection,
        store: &ProgressStore,
        mode: CharacterMode,
        before: &LockSnapshot,
    ) {
        let overlay = ModeOverlay::new(collection, store, mode);
        for section in collection.sections() {
            if before.is_section_locked(section.id()) && overlay.is_section_unlocked(section) {
                debug!(section = %section.id(), %mode, "Section unlocked");
                self.push(
                    mode,
                    NotificationKind::SectionUnlocked {
                        section: section.id().clone(),
                    },
                    format!("⭐ {} has been unlocked!", section.name()),
                );
            }
            for area in section.areas() {
                if before.is_area_locked(area.id()) && overlay.is_area_unlocked(area) {
                    debug!(area = %area.id(), %mode, "Area unlocked");
                    self.push(
                        mode,
                        NotificationKind::AreaUnlocked {
                            area: area.id().clone(),
                        },
                        format!("⭐ {} has been unlocked!", area.name()),
                    );
                }
            }
        }
    }

    fn reveal_items(
        &mut self,
        collection: &Collection,
        store: &mut ProgressStore,
        mode: CharacterMode,
    ) {
        let newly_met: Vec<(&Area, &Item)> = {
            let overlay = ModeOverlay::new(collection, store, mode);
            collection
                .areas()
                .flat_map(|area| area.items().iter().map(move |item| (area, item)))
                .filter(|(_, item)| {
                    !overlay.is_revealed(item.id())
                        && item
                            .unlock_condition()
                            .is_some_and(|condition| overlay.is_met(condition))
                })
                .collect()
        };

        for (area, item) in newly_met {
            store.set_revealed(&ProgressKey::new(mode, item.id().clone()), true);
            debug!(item = %item.id(), %mode, "Item revealed");
            self.push(
                mode,
                NotificationKind::ItemRevealed {
                    item: item.id().clone(),
                    kind: item.kind(),
                    area: area.id().clone(),
                },
                reveal_message(item, area),
            );
        }
    }

    fn push(&mut self, mode: CharacterMode, kind: NotificationKind, message: String) {
        self.notifications.push(Notification {
            mode,
            kind,
            message,
        });
    }
}

/// Notification text for a revealed item, worded by kind.
fn reveal_message(item: &Item, area: &Area) -> String {
    match item.kind() {
        ItemKind::Challenge => format!("☄ {} is now in orbit over {}", item.name(), area.name()),
        ItemKind::HiddenBonus => format!("✦ A secret has been revealed in {}", area.name()),
        ItemKind::Ordinary | ItemKind::Rare | ItemKind::Finale => {
            format!("⭑ {} has been revealed in {}", item.name(), area.name())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use completionist_catalog::{AreaBuilder, CollectionBuilder, SectionBuilder};
    use completionist_types::ItemId;

    use super::*;

    fn collection() -> Collection {
        CollectionBuilder::new("g", "G")
            .section(
                SectionBuilder::new("s1", "First").area(
                    AreaBuilder::new("a", "Area A")
                        .item(Item::ordinary("a1", "A1"))
                        .item(Item::ordinary("a2", "A2"))
                        .item(Item::challenge(
                            "a-comet",
                            "Speed Run",
                            UnlockCondition::any_of(["a2"]),
                        ))
                        .item(Item::rare("a-green", "Green")),
                ),
            )
            .section(
                SectionBuilder::new("s2", "Second")
                    .condition(UnlockCondition::total_count(1))
                    .area(AreaBuilder::new("b", "Area B").item(Item::ordinary("b1", "B1")))
                    .area(
                        AreaBuilder::new("c", "Area C")
                            .condition(UnlockCondition::total_count(3))
                            .item(
                                Item::hidden_bonus("c-secret", "Secret")
                                    .with_condition(UnlockCondition::any_of(["b1"])),
                            ),
                    ),
            )
            .build()
            .unwrap()
    }

    fn config(threshold: u32, ordinary: u32, rare: u32) -> TrackerConfig {
        let mut config = TrackerConfig::default();
        config.modes.alternate_unlock_threshold = threshold;
        config.milestones.grand_ordinary_required = ordinary;
        config.milestones.grand_rare_required = rare;
        config
    }

    /// Collect `id` in `mode` and run the engine the way the tracker does.
    fn collect(
        engine: &mut ProgressionEngine,
        c: &Collection,
        store: &mut ProgressStore,
        mode: CharacterMode,
        id: &str,
    ) -> Option<CharacterMode> {
        let before = LockSnapshot::capture(c, store, mode);
        assert!(store.mark_collected(&ProgressKey::new(mode, ItemId::new(id))));
        engine.on_collected(c, store, mode, &before)
    }

    #[test]
    fn derive_reads_entered_modes_and_alternate_records() {
        let c = collection();
        let cond = UnlockCondition::total_count(1000);
        let mut store = ProgressStore::new();
        assert_eq!(MilestoneState::derive(&c, &store, &cond), MilestoneState::default());

        store.mark_entered(CharacterMode::Alternate);
        assert!(MilestoneState::derive(&c, &store, &cond).alternate_mode_used());

        let mut store = ProgressStore::new();
        store.mark_collected(&ProgressKey::new(CharacterMode::Alternate, ItemId::new("a1")));
        assert!(MilestoneState::derive(&c, &store, &cond).alternate_mode_used());
    }

    #[test]
    fn unlocks_are_announced_once() {
        let c = collection();
        let mut store = ProgressStore::new();
        let mut engine = ProgressionEngine::new(&config(100, 100, 1), &c, &store);

        collect(&mut engine, &c, &mut store, CharacterMode::Primary, "a1");
        let kinds: Vec<_> = engine.notifications().iter().map(|n| n.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![NotificationKind::SectionUnlocked {
                section: SectionId::new("s2")
            }]
        );
        assert_eq!(
            engine.notifications().first().unwrap().message,
            "⭐ Second has been unlocked!"
        );

        collect(&mut engine, &c, &mut store, CharacterMode::Primary, "b1");
        let messages: Vec<&str> = engine
            .notifications()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages, vec!["✦ A secret has been revealed in Area C"]);
        let secret = ProgressKey::new(CharacterMode::Primary, ItemId::new("c-secret"));
        assert!(store.is_revealed(&secret));

        collect(&mut engine, &c, &mut store, CharacterMode::Primary, "a2");
        let messages: Vec<&str> = engine
            .notifications()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "⭐ Area C has been unlocked!",
                "☄ Speed Run is now in orbit over Area A",
            ]
        );
    }

    #[test]
    fn reveals_are_per_mode() {
        let c = collection();
        let mut store = ProgressStore::new();
        let mut engine = ProgressionEngine::new(&config(100, 100, 1), &c, &store);

        collect(&mut engine, &c, &mut store, CharacterMode::Alternate, "a2");
        assert!(engine.notifications().iter().all(|n| n.mode == CharacterMode::Alternate));
        let comet = ItemId::new("a-comet");
        assert!(store.is_revealed(&ProgressKey::new(CharacterMode::Alternate, comet.clone())));
        assert!(!store.is_revealed(&ProgressKey::new(CharacterMode::Primary, comet)));
    }

    #[test]
    fn alternate_milestone_fires_once_and_switches() {
        let c = collection();
        let mut store = ProgressStore::new();
        let mut engine = ProgressionEngine::new(&config(2, 100, 1), &c, &store);

        assert_eq!(collect(&mut engine, &c, &mut store, CharacterMode::Primary, "a1"), None);
        let switched = collect(&mut engine, &c, &mut store, CharacterMode::Primary, "b1");
        assert_eq!(switched, Some(CharacterMode::Alternate));
        let unlocked = |engine: &ProgressionEngine| {
            engine
                .notifications()
                .iter()
                .any(|n| n.is_milestone(Milestone::AlternateModeUnlocked))
        };
        assert!(unlocked(&engine));
        assert!(store.has_entered(CharacterMode::Alternate));

        store.mark_uncollected(&ProgressKey::new(CharacterMode::Primary, ItemId::new("b1")));
        let switched = collect(&mut engine, &c, &mut store, CharacterMode::Primary, "b1");
        assert_eq!(switched, None);
        assert!(!unlocked(&engine));
    }

    #[test]
    fn full_completion_fires_once_and_survives_rederive() {
        let c = collection();
        let mut store = ProgressStore::new();
        let cfg = config(100, 2, 2);
        let mut engine = ProgressionEngine::new(&cfg, &c, &store);

        for mode in CharacterMode::ALL {
            collect(&mut engine, &c, &mut store, mode, "a1");
        }
        collect(&mut engine, &c, &mut store, CharacterMode::Primary, "a-green");
        assert!(!engine.state().completion_celebrated());

        collect(&mut engine, &c, &mut store, CharacterMode::Alternate, "a-green");
        assert!(engine.notifications().iter().any(|n| n.is_milestone(Milestone::FullCompletion)));
        assert!(engine.state().completion_celebrated());

        collect(&mut engine, &c, &mut store, CharacterMode::Primary, "a2");
        assert!(!engine.notifications().iter().any(|n| n.is_milestone(Milestone::FullCompletion)));

        let reloaded = ProgressionEngine::new(&cfg, &c, &store);
        assert!(reloaded.state().completion_celebrated());
    }

    #[test]
    fn full_completion_stays_celebrated_after_uncollect_and_reload() {
        let c = collection();
        let mut store = ProgressStore::new();
        let cfg = config(100, 2, 2);
        let mut engine = ProgressionEngine::new(&cfg, &c, &store);
        for mode in CharacterMode::ALL {
            collect(&mut engine, &c, &mut store, mode, "a1");
            collect(&mut engine, &c, &mut store, mode, "a-green");
        }
        assert!(store.has_milestone(Milestone::FullCompletion));

        let green = ProgressKey::new(CharacterMode::Alternate, ItemId::new("a-green"));
        store.mark_uncollected(&green);
        let mut reloaded = ProgressionEngine::new(&cfg, &c, &store);
        assert!(reloaded.state().completion_celebrated());

        collect(&mut reloaded, &c, &mut store, CharacterMode::Alternate, "a-green");
        assert!(
            !reloaded
                .notifications()
                .iter()
                .any(|n| n.is_milestone(Milestone::FullCompletion))
        );
    }

    #[test]
    fn derive_reads_recorded_milestones() {
        let c = collection();
        let cond = UnlockCondition::total_count(1000);
        let mut store = ProgressStore::new();
        store.mark_milestone(Milestone::AlternateModeUnlocked);
        store.mark_milestone(Milestone::FullCompletion);
        let state = MilestoneState::derive(&c, &store, &cond);
        assert!(state.alternate_mode_used());
        assert!(state.completion_celebrated());
    }

    #[test]
    fn take_notifications_empties_queue() {
        let c = collection();
        let mut store = ProgressStore::new();
        let mut engine = ProgressionEngine::new(&config(100, 100, 1), &c, &store);
        collect(&mut engine, &c, &mut store, CharacterMode::Primary, "a2");
        assert!(!engine.take_notifications().is_empty());
        assert!(engine.notifications().is_empty());
    }
}
