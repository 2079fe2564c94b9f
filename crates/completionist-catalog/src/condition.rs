//! Unlock conditions and their evaluation.
//!
//! An [`UnlockCondition`] is a declarative predicate over accumulated
//! progress that gates an item, area, or section. Every variant is
//! evaluated by one exhaustive `match` in [`UnlockCondition::evaluate`],
//! so adding a variant forces a decision about its mode-aware semantics.
//!
//! # Evaluation Scope
//!
//! Conditions are evaluated against an [`EvalContext`]: a read-only view of
//! a [`ProgressStore`] plus the collection's reserved-item classification,
//! optionally scoped to one [`CharacterMode`].
//!
//! | Variant | Global scope | Mode scope |
//! |---------|--------------|------------|
//! | `TotalCount` | every collected record | the mode's non-reserved count |
//! | `AllOfKindInArea`, `AnyOf`, `RareChallengeUnlock` | primary namespace | the mode's namespace |
//! | `ChallengeUnlock` | every collected record + primary ids | scoped count + the mode's ids |
//! | `TrialUnlock` | primary ids, or both modes at threshold | the mode's ids, or both modes at threshold |
//! | `GrandAggregate` | both namespaces | both namespaces |
//!
//! Counts are recomputed on every evaluation; nothing is cached.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use completionist_progress::{ItemProgress, ProgressStore};
use completionist_types::{AreaId, CharacterMode, ItemId, ItemKind};

use crate::error::CatalogError;

/// Collected count required before challenge items can unlock.
pub const CHALLENGE_MIN_COLLECTED: u32 = 13;

/// Non-reserved count each mode needs for the trial fallback path.
pub const TRIAL_PER_MODE_REQUIRED: u32 = 120;

/// Non-reserved count across both modes for the grand aggregate.
pub const GRAND_ORDINARY_REQUIRED: u32 = 240;

/// Rare items across both modes for the grand aggregate.
pub const GRAND_RARE_REQUIRED: u32 = 6;

// ---------------------------------------------------------------------------
// Reserved items
// ---------------------------------------------------------------------------

/// The items excluded from ordinary per-mode totals.
///
/// Rare items are summed separately for the grand aggregate; finale items
/// are excluded from every count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedItems {
    rare: BTreeSet<ItemId>,
    finale: BTreeSet<ItemId>,
}

impl ReservedItems {
    /// Create an empty classification.
    pub const fn new() -> Self {
        Self {
            rare: BTreeSet::new(),
            finale: BTreeSet::new(),
        }
    }

    /// Classify `id` by its kind. Non-reserved kinds are ignored.
    pub fn insert(&mut self, id: ItemId, kind: ItemKind) {
        match kind {
            ItemKind::Rare => {
                self.rare.insert(id);
            }
            ItemKind::Finale => {
                self.finale.insert(id);
            }
            ItemKind::Ordinary | ItemKind::HiddenBonus | ItemKind::Challenge => {}
        }
    }

    /// Whether `id` is excluded from ordinary totals.
    pub fn is_reserved(&self, id: &ItemId) -> bool {
        self.rare.contains(id) || self.finale.contains(id)
    }

    /// Whether `id` is a rare item.
    pub fn is_rare(&self, id: &ItemId) -> bool {
        self.rare.contains(id)
    }

    /// Number of rare items per mode.
    pub fn rare_len(&self) -> usize {
        self.rare.len()
    }
}

// ---------------------------------------------------------------------------
// Evaluation context
// ---------------------------------------------------------------------------

/// A read-only snapshot view that conditions are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    progress: &'a ProgressStore,
    reserved: &'a ReservedItems,
    mode: Option<CharacterMode>,
}

impl<'a> EvalContext<'a> {
    /// Unscoped context: counts cover every record, ids resolve in the
    /// primary namespace.
    pub const fn global(progress: &'a ProgressStore, reserved: &'a ReservedItems) -> Self {
        Self {
            progress,
            reserved,
            mode: None,
        }
    }

    /// Context scoped to one mode.
    pub const fn for_mode(
        progress: &'a ProgressStore,
        reserved: &'a ReservedItems,
        mode: CharacterMode,
    ) -> Self {
        Self {
            progress,
            reserved,
            mode: Some(mode),
        }
    }

    /// The scope, if any.
    pub const fn mode(&self) -> Option<CharacterMode> {
        self.mode
    }

    /// The underlying store.
    pub const fn progress(&self) -> &'a ProgressStore {
        self.progress
    }

    /// The namespace id lookups resolve in.
    fn lookup_mode(&self) -> CharacterMode {
        self.mode.unwrap_or_default()
    }

    /// Whether `item` is collected in the lookup namespace.
    pub fn is_collected(&self, item: &ItemId) -> bool {
        self.is_collected_in(self.lookup_mode(), item)
    }

    /// Whether `item` is collected in `mode`, regardless of scope.
    pub fn is_collected_in(&self, mode: CharacterMode, item: &ItemId) -> bool {
        self.progress
            .namespace(mode)
            .get(item)
            .is_some_and(ItemProgress::is_collected)
    }

    /// Collected non-reserved items in `mode`.
    pub fn scoped_count(&self, mode: CharacterMode) -> u32 {
        self.progress
            .count_collected(mode, |id| !self.reserved.is_reserved(id))
    }

    /// The count threshold conditions compare against in this scope.
    pub fn collected_count(&self) -> u32 {
        match self.mode {
            Some(mode) => self.scoped_count(mode),
            None => self.progress.collected_count(),
        }
    }

    /// Collected non-reserved items across both modes.
    pub fn ordinary_total(&self) -> u32 {
        CharacterMode::ALL
            .into_iter()
            .map(|mode| self.scoped_count(mode))
            .fold(0_u32, u32::saturating_add)
    }

    /// Collected rare items in `mode`.
    pub fn rare_count(&self, mode: CharacterMode) -> u32 {
        self.progress
            .count_collected(mode, |id| self.reserved.is_rare(id))
    }

    /// Collected rare items across both modes.
    pub fn rare_total(&self) -> u32 {
        CharacterMode::ALL
            .into_iter()
            .map(|mode| self.rare_count(mode))
            .fold(0_u32, u32::saturating_add)
    }
}

// ---------------------------------------------------------------------------
// Conditions
// ---------------------------------------------------------------------------

/// A declarative predicate over accumulated progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum UnlockCondition {
    /// At least `required` items collected.
    TotalCount {
        /// Threshold.
        required: u32,
    },

    /// Every item of `kind` in `area` collected; vacuously true if none.
    ///
    /// `required` is filled in by the collection builder from the area's
    /// items, so evaluation needs no access to the hierarchy.
    AllOfKindInArea {
        /// The area whose items are checked.
        area: AreaId,
        /// The kind of item that must be complete.
        kind: ItemKind,
        /// The resolved item ids.
        #[serde(default)]
        required: Vec<ItemId>,
    },

    /// At least one of `items` collected.
    AnyOf {
        /// Candidate items.
        items: Vec<ItemId>,
    },

    /// A count threshold plus a fixed prerequisite list.
    ChallengeUnlock {
        /// Minimum collected count.
        min_collected: u32,
        /// Items that must all be collected.
        prerequisites: Vec<ItemId>,
    },

    /// Two specific items both collected, independent of counts.
    RareChallengeUnlock {
        /// First required item.
        first: ItemId,
        /// Second required item.
        second: ItemId,
    },

    /// Either every `direct` item collected, or both modes individually
    /// at `per_mode_required` non-reserved items.
    TrialUnlock {
        /// The direct path.
        direct: Vec<ItemId>,
        /// Per-mode threshold of the fallback path.
        per_mode_required: u32,
    },

    /// Non-reserved items across both modes at `required_ordinary` and rare
    /// items across both modes at `required_rare`. Ignores the scope.
    GrandAggregate {
        /// Non-reserved threshold across both modes.
        required_ordinary: u32,
        /// Rare threshold across both modes.
        required_rare: u32,
    },
}

impl UnlockCondition {
    /// `TotalCount` with the given threshold.
    pub const fn total_count(required: u32) -> Self {
        Self::TotalCount { required }
    }

    /// `AllOfKindInArea`, resolved when the collection is built.
    pub const fn all_of_kind_in_area(area: AreaId, kind: ItemKind) -> Self {
        Self::AllOfKindInArea {
            area,
            kind,
            required: Vec::new(),
        }
    }

    /// `AnyOf` over the given ids.
    pub fn any_of<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        Self::AnyOf {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// `ChallengeUnlock` with the standard minimum of
    /// [`CHALLENGE_MIN_COLLECTED`].
    pub fn challenge<I, T>(prerequisites: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        Self::ChallengeUnlock {
            min_collected: CHALLENGE_MIN_COLLECTED,
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    /// `RareChallengeUnlock` on two ids.
    pub fn rare_challenge(first: impl Into<ItemId>, second: impl Into<ItemId>) -> Self {
        Self::RareChallengeUnlock {
            first: first.into(),
            second: second.into(),
        }
    }

    /// `TrialUnlock` with the standard per-mode threshold of
    /// [`TRIAL_PER_MODE_REQUIRED`].
    pub fn trial<I, T>(direct: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        Self::TrialUnlock {
            direct: direct.into_iter().map(Into::into).collect(),
            per_mode_required: TRIAL_PER_MODE_REQUIRED,
        }
    }

    /// `GrandAggregate` with the standard thresholds.
    pub const fn grand_aggregate() -> Self {
        Self::GrandAggregate {
            required_ordinary: GRAND_ORDINARY_REQUIRED,
            required_rare: GRAND_RARE_REQUIRED,
        }
    }

    /// Evaluate against an optional context. An absent context is `false`.
    pub fn is_met(&self, ctx: Option<&EvalContext<'_>>) -> bool {
        ctx.is_some_and(|ctx| self.evaluate(ctx))
    }

    /// Evaluate against a context, honouring its scope.
    pub fn evaluate(&self, ctx: &EvalContext<'_>) -> bool {
        match self {
            Self::TotalCount { required } => ctx.collected_count() >= *required,
            Self::AllOfKindInArea { required, .. } => {
                required.iter().all(|id| ctx.is_collected(id))
            }
            Self::AnyOf { items } => items.iter().any(|id| ctx.is_collected(id)),
            Self::ChallengeUnlock {
                min_collected,
                prerequisites,
            } => {
                ctx.collected_count() >= *min_collected
                    && prerequisites.iter().all(|id| ctx.is_collected(id))
            }
            Self::RareChallengeUnlock { first, second } => {
                ctx.is_collected(first) && ctx.is_collected(second)
            }
            Self::TrialUnlock {
                direct,
                per_mode_required,
            } => {
                let both_modes = CharacterMode::ALL
                    .into_iter()
                    .all(|mode| ctx.scoped_count(mode) >= *per_mode_required);
                both_modes || direct.iter().all(|id| ctx.is_collected(id))
            }
            Self::GrandAggregate {
                required_ordinary,
                required_rare,
            } => {
                ctx.ordinary_total() >= *required_ordinary && ctx.rare_total() >= *required_rare
            }
        }
    }

    /// Human-readable description for lock screens.
    pub fn description(&self) -> String {
        match self {
            Self::TotalCount { required } => format!("Collect {required} items"),
            Self::AllOfKindInArea { area, kind, .. } => {
                format!("Collect every {} item in {area}", kind.label())
            }
            Self::AnyOf { items } => format!("Collect any of: {}", join_ids(items)),
            Self::ChallengeUnlock {
                min_collected,
                prerequisites,
            } => {
                if prerequisites.is_empty() {
                    format!("Collect {min_collected}+ items")
                } else {
                    format!(
                        "Collect {min_collected}+ items and {}",
                        join_ids(prerequisites)
                    )
                }
            }
            Self::RareChallengeUnlock { first, second } => {
                format!("Collect {first} and {second}")
            }
            Self::TrialUnlock {
                direct,
                per_mode_required,
            } => format!(
                "Collect {}, or reach {per_mode_required} items in both modes",
                join_ids(direct)
            ),
            Self::GrandAggregate {
                required_ordinary,
                required_rare,
            } => format!(
                "Collect {required_ordinary} items across both modes plus {required_rare} rare items"
            ),
        }
    }

    /// Every item id this condition looks up directly.
    pub fn referenced_items(&self) -> Vec<&ItemId> {
        match self {
            Self::TotalCount { .. } | Self::GrandAggregate { .. } => Vec::new(),
            Self::AllOfKindInArea { required, .. } => required.iter().collect(),
            Self::AnyOf { items } => items.iter().collect(),
            Self::ChallengeUnlock { prerequisites, .. } => prerequisites.iter().collect(),
            Self::RareChallengeUnlock { first, second } => vec![first, second],
            Self::TrialUnlock { direct, .. } => direct.iter().collect(),
        }
    }

    /// Fill in ids that depend on the hierarchy.
    ///
    /// `areas` maps each area to its items in order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AreaNotFound`] when an `AllOfKindInArea`
    /// names an area that does not exist.
    pub fn resolve(
        &mut self,
        areas: &BTreeMap<AreaId, Vec<(ItemId, ItemKind)>>,
    ) -> Result<(), CatalogError> {
        if let Self::AllOfKindInArea {
            area,
            kind,
            required,
        } = self
        {
            let kind = *kind;
            let items = areas
                .get(&*area)
                .ok_or_else(|| CatalogError::AreaNotFound(area.clone()))?;
            *required = items
                .iter()
                .filter(|(_, item_kind)| *item_kind == kind)
                .map(|(id, _)| id.clone())
                .collect();
        }
        Ok(())
    }
}

fn join_ids(ids: &[ItemId]) -> String {
    ids.iter()
        .map(ItemId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use completionist_types::ProgressKey;

    use super::*;

    fn collect(store: &mut ProgressStore, mode: CharacterMode, id: &str) {
        store.mark_collected(&ProgressKey::new(mode, ItemId::new(id)));
    }

    fn collect_many(store: &mut ProgressStore, mode: CharacterMode, prefix: &str, n: u32) {
        for i in 0..n {
            collect(store, mode, &format!("{prefix}-{i}"));
        }
    }

    fn reserved() -> ReservedItems {
        let mut r = ReservedItems::new();
        r.insert(ItemId::new("green-a"), ItemKind::Rare);
        r.insert(ItemId::new("green-b"), ItemKind::Rare);
        r.insert(ItemId::new("green-c"), ItemKind::Rare);
        r.insert(ItemId::new("finale"), ItemKind::Finale);
        r.insert(ItemId::new("plain"), ItemKind::Ordinary);
        r
    }

    #[test]
    fn absent_context_is_false() {
        assert!(!UnlockCondition::total_count(0).is_met(None));
        assert!(!UnlockCondition::any_of(["a"]).is_met(None));
        assert!(!UnlockCondition::grand_aggregate().is_met(None));
    }

    #[test]
    fn reserved_classification() {
        let r = reserved();
        assert!(r.is_rare(&ItemId::new("green-a")));
        assert!(r.is_reserved(&ItemId::new("finale")));
        assert!(!r.is_rare(&ItemId::new("finale")));
        assert!(!r.is_reserved(&ItemId::new("plain")));
        assert_eq!(r.rare_len(), 3);
    }

    #[test]
    fn total_count_global_counts_everything() {
        let r = reserved();
        let mut store = ProgressStore::new();
        collect(&mut store, CharacterMode::Primary, "a");
        collect(&mut store, CharacterMode::Alternate, "b");
        collect(&mut store, CharacterMode::Primary, "finale");

        let cond = UnlockCondition::total_count(3);
        assert!(cond.is_met(Some(&EvalContext::global(&store, &r))));
    }

    #[test]
    fn total_count_scoped_excludes_reserved_and_other_mode() {
        let r = reserved();
        let mut store = ProgressStore::new();
        collect(&mut store, CharacterMode::Primary, "a");
        collect(&mut store, CharacterMode::Primary, "green-a");
        collect(&mut store, CharacterMode::Primary, "finale");
        collect(&mut store, CharacterMode::Alternate, "b");

        let ctx = EvalContext::for_mode(&store, &r, CharacterMode::Primary);
        assert_eq!(ctx.collected_count(), 1);
        assert!(UnlockCondition::total_count(1).evaluate(&ctx));
        assert!(!UnlockCondition::total_count(2).evaluate(&ctx));
    }

    #[test]
    fn all_of_kind_resolves_and_is_vacuous_when_empty() {
        let mut areas = BTreeMap::new();
        areas.insert(
            AreaId::new("good-egg"),
            vec![
                (ItemId::new("x1"), ItemKind::Ordinary),
                (ItemId::new("x2"), ItemKind::Ordinary),
                (ItemId::new("x-secret"), ItemKind::HiddenBonus),
            ],
        );
        areas.insert(AreaId::new("empty"), Vec::new());

        let mut cond =
            UnlockCondition::all_of_kind_in_area(AreaId::new("good-egg"), ItemKind::Ordinary);
        cond.resolve(&areas).unwrap();
        assert_eq!(cond.referenced_items().len(), 2);

        let mut vacuous =
            UnlockCondition::all_of_kind_in_area(AreaId::new("empty"), ItemKind::Ordinary);
        vacuous.resolve(&areas).unwrap();

        let r = reserved();
        let mut store = ProgressStore::new();
        let ctx = EvalContext::global(&store, &r);
        assert!(vacuous.evaluate(&ctx));
        assert!(!cond.evaluate(&ctx));

        collect(&mut store, CharacterMode::Primary, "x1");
        collect(&mut store, CharacterMode::Primary, "x2");
        assert!(cond.evaluate(&EvalContext::global(&store, &r)));
        assert!(!cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Alternate)));
    }

    #[test]
    fn resolve_unknown_area_fails() {
        let mut cond =
            UnlockCondition::all_of_kind_in_area(AreaId::new("nowhere"), ItemKind::Ordinary);
        let result = cond.resolve(&BTreeMap::new());
        assert_eq!(result, Err(CatalogError::AreaNotFound(AreaId::new("nowhere"))));
    }

    #[test]
    fn any_of() {
        let r = reserved();
        let mut store = ProgressStore::new();
        let cond = UnlockCondition::any_of(["a", "b"]);
        assert!(!cond.evaluate(&EvalContext::global(&store, &r)));
        collect(&mut store, CharacterMode::Alternate, "b");
        assert!(!cond.evaluate(&EvalContext::global(&store, &r)));
        assert!(cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Alternate)));
    }

    #[test]
    fn challenge_needs_count_and_prerequisites() {
        let r = reserved();
        let mut store = ProgressStore::new();
        let cond = UnlockCondition::challenge(["x1", "x2", "x3"]);

        for id in ["x1", "x2", "x3"] {
            collect(&mut store, CharacterMode::Primary, id);
        }
        assert!(!cond.evaluate(&EvalContext::global(&store, &r)));

        collect_many(&mut store, CharacterMode::Primary, "other", 10);
        assert!(cond.evaluate(&EvalContext::global(&store, &r)));
        assert!(cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Primary)));
        assert!(!cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Alternate)));
    }

    #[test]
    fn challenge_scoped_minimum_ignores_reserved() {
        let r = reserved();
        let mut store = ProgressStore::new();
        let cond = UnlockCondition::challenge(["x1"]);
        collect(&mut store, CharacterMode::Primary, "x1");
        collect_many(&mut store, CharacterMode::Primary, "other", 11);
        collect(&mut store, CharacterMode::Primary, "green-a");

        // 13 collected globally, 12 non-reserved in primary.
        assert!(cond.evaluate(&EvalContext::global(&store, &r)));
        assert!(!cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Primary)));
    }

    #[test]
    fn rare_challenge_is_count_independent() {
        let r = reserved();
        let mut store = ProgressStore::new();
        let cond = UnlockCondition::rare_challenge("reactor", "purple");
        collect(&mut store, CharacterMode::Alternate, "reactor");
        collect(&mut store, CharacterMode::Alternate, "purple");
        collect(&mut store, CharacterMode::Primary, "reactor");

        assert!(!cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Primary)));
        assert!(cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Alternate)));
    }

    #[test]
    fn trial_direct_path_is_mode_scoped() {
        let r = reserved();
        let mut store = ProgressStore::new();
        let cond = UnlockCondition::trial(["green-a", "green-b", "green-c"]);
        for id in ["green-a", "green-b", "green-c"] {
            collect(&mut store, CharacterMode::Alternate, id);
        }
        assert!(cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Alternate)));
        assert!(!cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Primary)));
        assert!(!cond.evaluate(&EvalContext::global(&store, &r)));
    }

    #[test]
    fn trial_fallback_checks_both_modes_from_any_scope() {
        let r = reserved();
        let mut store = ProgressStore::new();
        let cond = UnlockCondition::TrialUnlock {
            direct: vec![ItemId::new("green-a")],
            per_mode_required: 3,
        };
        collect_many(&mut store, CharacterMode::Primary, "p", 3);
        collect_many(&mut store, CharacterMode::Alternate, "a", 2);
        collect(&mut store, CharacterMode::Alternate, "finale");
        assert!(!cond.evaluate(&EvalContext::for_mode(&store, &r, CharacterMode::Primary)));

        collect(&mut store, CharacterMode::Alternate, "a-2");
        for mode in CharacterMode::ALL {
            assert!(cond.evaluate(&EvalContext::for_mode(&store, &r, mode)));
        }
        assert!(cond.evaluate(&EvalContext::global(&store, &r)));
    }

    #[test]
    fn grand_aggregate_is_mode_insensitive() {
        let r = reserved();
        let mut store = ProgressStore::new();
        let cond = UnlockCondition::GrandAggregate {
            required_ordinary: 4,
            required_rare: 6,
        };
        collect_many(&mut store, CharacterMode::Primary, "p", 2);
        collect_many(&mut store, CharacterMode::Alternate, "a", 2);
        for mode in CharacterMode::ALL {
            for id in ["green-a", "green-b", "green-c"] {
                collect(&mut store, mode, id);
            }
        }
        collect(&mut store, CharacterMode::Primary, "finale");

        let global = EvalContext::global(&store, &r);
        assert_eq!(global.ordinary_total(), 4);
        assert_eq!(global.rare_total(), 6);
        assert!(cond.evaluate(&global));
        for mode in CharacterMode::ALL {
            assert!(cond.evaluate(&EvalContext::for_mode(&store, &r, mode)));
        }

        store.mark_uncollected(&ProgressKey::new(CharacterMode::Alternate, ItemId::new("green-c")));
        assert!(!cond.evaluate(&EvalContext::global(&store, &r)));
    }

    #[test]
    fn descriptions() {
        assert_eq!(UnlockCondition::total_count(7).description(), "Collect 7 items");
        assert_eq!(
            UnlockCondition::rare_challenge("a", "b").description(),
            "Collect a and b"
        );
        assert_eq!(
            UnlockCondition::grand_aggregate().description(),
            "Collect 240 items across both modes plus 6 rare items"
        );
        assert!(
            UnlockCondition::challenge(["x"])
                .description()
                .starts_with("Collect 13+ items")
        );
    }

    #[test]
    fn serde_tagged_representation() {
        let cond = UnlockCondition::total_count(7);
        let json = serde_json::to_string(&cond).unwrap();
        assert_eq!(json, r#"{"type":"total_count","required":7}"#);
        let back: UnlockCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cond);
    }
}
