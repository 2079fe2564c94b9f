//! Completion arithmetic shared by every container node.
//!
//! [`CompletionTrackable`] is implemented by [`Area`], [`Section`], and
//! [`Collection`] through structural recursion: a section's totals are the
//! sums of its areas', a collection's the sums of its sections'. Absent
//! progress counts as nothing collected, and an empty node is 0% complete.

use completionist_progress::{ItemProgress, ProgressStore};
use completionist_types::CharacterMode;

use crate::hierarchy::{Area, Collection, Section};

/// Totals and percentages over a subtree of items.
pub trait CompletionTrackable {
    /// Number of items reachable under this node.
    fn total_items(&self) -> u32;

    /// Items under this node collected in `mode`. Zero when `progress` is absent.
    fn completed_items_in(&self, progress: Option<&ProgressStore>, mode: CharacterMode) -> u32;

    /// Items collected in the primary namespace.
    fn completed_items(&self, progress: Option<&ProgressStore>) -> u32 {
        self.completed_items_in(progress, CharacterMode::Primary)
    }

    /// `100 * completed / total` in `mode`, or `0.0` for an empty node.
    fn completion_percentage_in(
        &self,
        progress: Option<&ProgressStore>,
        mode: CharacterMode,
    ) -> f64 {
        let total = self.total_items();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.completed_items_in(progress, mode)) * 100.0 / f64::from(total)
    }

    /// Completion percentage in the primary namespace.
    fn completion_percentage(&self, progress: Option<&ProgressStore>) -> f64 {
        self.completion_percentage_in(progress, CharacterMode::Primary)
    }
}

impl CompletionTrackable for Area {
    fn total_items(&self) -> u32 {
        u32::try_from(self.items().len()).unwrap_or(u32::MAX)
    }

    fn completed_items_in(&self, progress: Option<&ProgressStore>, mode: CharacterMode) -> u32 {
        let Some(progress) = progress else {
            return 0;
        };
        let namespace = progress.namespace(mode);
        let count = self
            .items()
            .iter()
            .filter(|item| {
                namespace
                    .get(item.id())
                    .is_some_and(ItemProgress::is_collected)
            })
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

impl CompletionTrackable for Section {
    fn total_items(&self) -> u32 {
        self.areas()
            .iter()
            .map(Area::total_items)
            .fold(0_u32, u32::saturating_add)
    }

    fn completed_items_in(&self, progress: Option<&ProgressStore>, mode: CharacterMode) -> u32 {
        self.areas()
            .iter()
            .map(|area| area.completed_items_in(progress, mode))
            .fold(0_u32, u32::saturating_add)
    }
}

impl CompletionTrackable for Collection {
    fn total_items(&self) -> u32 {
        self.sections()
            .iter()
            .map(Section::total_items)
            .fold(0_u32, u32::saturating_add)
    }

    fn completed_items_in(&self, progress: Option<&ProgressStore>, mode: CharacterMode) -> u32 {
        self.sections()
            .iter()
            .map(|section| section.completed_items_in(progress, mode))
            .fold(0_u32, u32::saturating_add)
    }
}
