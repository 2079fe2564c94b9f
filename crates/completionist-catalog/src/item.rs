//! Collectible items.

use serde::{Deserialize, Serialize};

use completionist_types::{ItemId, ItemKind};

use crate::condition::UnlockCondition;

/// One collectible, owned by its area. Immutable once the collection is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    kind: ItemKind,
    hidden_by_default: bool,
    #[serde(default)]
    unlock_condition: Option<UnlockCondition>,
}

impl Item {
    /// Create an item. Hidden-by-default follows the kind.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            hidden_by_default: kind.hidden_by_default(),
            unlock_condition: None,
        }
    }

    /// An always-visible ordinary objective.
    pub fn ordinary(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ItemKind::Ordinary)
    }

    /// A hidden bonus objective.
    pub fn hidden_bonus(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ItemKind::HiddenBonus)
    }

    /// A hidden challenge objective revealed by `condition`.
    pub fn challenge(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        condition: UnlockCondition,
    ) -> Self {
        Self::new(id, name, ItemKind::Challenge).with_condition(condition)
    }

    /// A rare objective, visible but hard to find.
    pub fn rare(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ItemKind::Rare)
    }

    /// The terminal objective.
    pub fn finale(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ItemKind::Finale)
    }

    /// Attach an unlock condition.
    #[must_use]
    pub fn with_condition(mut self, condition: UnlockCondition) -> Self {
        self.unlock_condition = Some(condition);
        self
    }

    /// Override the hidden-by-default flag.
    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden_by_default = hidden;
        self
    }

    /// The item identifier.
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item kind.
    pub const fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Whether the item starts hidden.
    pub const fn is_hidden_by_default(&self) -> bool {
        self.hidden_by_default
    }

    /// The unlock condition, if any.
    pub const fn unlock_condition(&self) -> Option<&UnlockCondition> {
        self.unlock_condition.as_ref()
    }

    pub(crate) const fn unlock_condition_mut(&mut self) -> Option<&mut UnlockCondition> {
        self.unlock_condition.as_mut()
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} [{}]", self.kind.glyph(), self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_decides_default_visibility() {
        assert!(!Item::ordinary("a", "A").is_hidden_by_default());
        assert!(Item::hidden_bonus("b", "B").is_hidden_by_default());
        assert!(Item::challenge("c", "C", UnlockCondition::total_count(1)).is_hidden_by_default());
        assert!(!Item::rare("d", "D").is_hidden_by_default());
        assert!(!Item::finale("e", "E").is_hidden_by_default());
        assert!(Item::ordinary("f", "F").hidden(true).is_hidden_by_default());
    }

    #[test]
    fn display_shows_glyph_name_and_id() {
        let item = Item::rare("battlerock-green-star", "Green Power Star");
        assert_eq!(item.to_string(), "💚 Green Power Star [battlerock-green-star]");
    }
}
