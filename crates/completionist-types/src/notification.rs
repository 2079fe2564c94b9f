//! Transient notifications and one-time milestones.
//!
//! Notifications are produced by the progression engine after an item is
//! collected and are cleared on the next collection event. Milestones are
//! notifications that fire at most once over a profile's lifetime.

use serde::{Deserialize, Serialize};

use crate::enums::{CharacterMode, ItemKind};
use crate::ids::{AreaId, ItemId, SectionId};

/// A one-time global milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    /// The primary mode reached the threshold that unlocks the alternate mode.
    AlternateModeUnlocked,
    /// The grand aggregate across both modes was reached.
    FullCompletion,
}

/// What a notification is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum NotificationKind {
    /// A hidden item was auto-revealed because its condition became true.
    ItemRevealed {
        /// The revealed item.
        item: ItemId,
        /// Its kind, which selects the wording.
        kind: ItemKind,
        /// The area that contains it.
        area: AreaId,
    },
    /// An area's unlock condition became true.
    AreaUnlocked {
        /// The unlocked area.
        area: AreaId,
    },
    /// A section's unlock condition became true.
    SectionUnlocked {
        /// The unlocked section.
        section: SectionId,
    },
    /// A one-time milestone fired.
    Milestone {
        /// Which milestone.
        milestone: Milestone,
    },
}

/// A single transient message for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// The mode in which the triggering event happened.
    pub mode: CharacterMode,
    /// Structured description of the event.
    pub kind: NotificationKind,
    /// Human-readable text.
    pub message: String,
}

impl Notification {
    /// Whether this notification announces `milestone`.
    pub fn is_milestone(&self, milestone: Milestone) -> bool {
        matches!(self.kind, NotificationKind::Milestone { milestone: m } if m == milestone)
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}
