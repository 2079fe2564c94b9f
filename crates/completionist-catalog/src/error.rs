//! Error types for the `completionist-catalog` crate.
//!
//! All fallible operations in this crate return [`CatalogError`]. Only
//! construction and lookup can fail; condition evaluation is total.

use completionist_types::{AreaId, ItemId, SectionId};

/// Errors that can occur while building or querying a collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two items share an identifier.
    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// Two areas share an identifier.
    #[error("duplicate area id: {0}")]
    DuplicateArea(AreaId),

    /// Two sections share an identifier.
    #[error("duplicate section id: {0}")]
    DuplicateSection(SectionId),

    /// An item identifier is not part of the collection.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// An area identifier is not part of the collection.
    #[error("area not found: {0}")]
    AreaNotFound(AreaId),

    /// A section identifier is not part of the collection.
    #[error("section not found: {0}")]
    SectionNotFound(SectionId),

    /// An unlock condition references an item that does not exist.
    #[error("condition on {owner} references unknown item {item}")]
    DanglingReference {
        /// The item, area, or section carrying the condition.
        owner: String,
        /// The missing item.
        item: ItemId,
    },
}
