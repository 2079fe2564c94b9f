//! The structured progress key.
//!
//! Each item is tracked once per [`CharacterMode`]. The key pairs the mode
//! with the base item identifier instead of concatenating a prefix onto the
//! id, so a base id can never collide with another mode's namespace.

use serde::{Deserialize, Serialize};

use crate::enums::CharacterMode;
use crate::ids::ItemId;

/// Address of one progress record: an item within one mode namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProgressKey {
    /// The namespace.
    pub mode: CharacterMode,
    /// The base item identifier, shared by both namespaces.
    pub item: ItemId,
}

impl ProgressKey {
    /// Build a key for `item` in `mode`.
    pub const fn new(mode: CharacterMode, item: ItemId) -> Self {
        Self { mode, item }
    }
}

impl core::fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.mode, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_differ_by_mode() {
        let item = ItemId::new("battlerock-barrage");
        let a = ProgressKey::new(CharacterMode::Primary, item.clone());
        let b = ProgressKey::new(CharacterMode::Alternate, item);
        assert_ne!(a, b);
        assert_eq!(b.to_string(), "alternate/battlerock-barrage");
    }
}
