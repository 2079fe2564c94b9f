//! The immutable collectible hierarchy: Collection, Section, Area.
//!
//! Nodes own their children by value. Upward navigation uses parent ids
//! assigned once by [`CollectionBuilder`](crate::builder::CollectionBuilder)
//! during the single bottom-up build, so no node is ever observable without
//! its parent link. The collection keeps index maps for id lookups.

use std::collections::BTreeMap;

use completionist_progress::ProgressStore;
use completionist_types::{AreaId, CharacterMode, CollectionId, ItemId, SectionId};

use crate::condition::{EvalContext, ReservedItems, UnlockCondition};
use crate::item::Item;

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

/// An ordered group of items (a galaxy, a level).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    id: AreaId,
    name: String,
    section: SectionId,
    items: Vec<Item>,
    unlock_condition: Option<UnlockCondition>,
}

impl Area {
    pub(crate) const fn from_parts(
        id: AreaId,
        name: String,
        section: SectionId,
        items: Vec<Item>,
        unlock_condition: Option<UnlockCondition>,
    ) -> Self {
        Self {
            id,
            name,
            section,
            items,
            unlock_condition,
        }
    }

    /// The area identifier.
    pub const fn id(&self) -> &AreaId {
        &self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent section.
    pub const fn section_id(&self) -> &SectionId {
        &self.section
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The item with `id`, if this area contains it.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The unlock condition, if any.
    pub const fn unlock_condition(&self) -> Option<&UnlockCondition> {
        self.unlock_condition.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// An ordered group of areas (a dome, a world).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    name: String,
    collection: CollectionId,
    areas: Vec<Area>,
    unlock_condition: Option<UnlockCondition>,
}

impl Section {
    pub(crate) const fn from_parts(
        id: SectionId,
        name: String,
        collection: CollectionId,
        areas: Vec<Area>,
        unlock_condition: Option<UnlockCondition>,
    ) -> Self {
        Self {
            id,
            name,
            collection,
            areas,
            unlock_condition,
        }
    }

    /// The section identifier.
    pub const fn id(&self) -> &SectionId {
        &self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent collection.
    pub const fn collection_id(&self) -> &CollectionId {
        &self.collection
    }

    /// Areas in display order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Every item in this section, in display order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.areas.iter().flat_map(|area| area.items().iter())
    }

    /// The unlock condition, if any.
    pub const fn unlock_condition(&self) -> Option<&UnlockCondition> {
        self.unlock_condition.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Position of an item inside the nested vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemLocation {
    pub(crate) section: usize,
    pub(crate) area: usize,
    pub(crate) item: usize,
}

/// The root of the hierarchy: one whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    id: CollectionId,
    name: String,
    sections: Vec<Section>,
    item_index: BTreeMap<ItemId, ItemLocation>,
    area_index: BTreeMap<AreaId, (usize, usize)>,
    section_index: BTreeMap<SectionId, usize>,
    reserved: ReservedItems,
}

impl Collection {
    pub(crate) const fn from_parts(
        id: CollectionId,
        name: String,
        sections: Vec<Section>,
        item_index: BTreeMap<ItemId, ItemLocation>,
        area_index: BTreeMap<AreaId, (usize, usize)>,
        section_index: BTreeMap<SectionId, usize>,
        reserved: ReservedItems,
    ) -> Self {
        Self {
            id,
            name,
            sections,
            item_index,
            area_index,
            section_index,
            reserved,
        }
    }

    /// The collection identifier.
    pub const fn id(&self) -> &CollectionId {
        &self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every area, in display order.
    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.sections.iter().flat_map(|section| section.areas().iter())
    }

    /// Every item, in display order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.areas().flat_map(|area| area.items().iter())
    }

    /// The reserved-item classification used by count-based conditions.
    pub const fn reserved(&self) -> &ReservedItems {
        &self.reserved
    }

    /// Look up an item by identifier.
    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        let loc = self.item_index.get(id)?;
        self.sections
            .get(loc.section)?
            .areas()
            .get(loc.area)?
            .items()
            .get(loc.item)
    }

    /// The area containing the item with `id`.
    pub fn area_of_item(&self, id: &ItemId) -> Option<&Area> {
        let loc = self.item_index.get(id)?;
        self.sections.get(loc.section)?.areas().get(loc.area)
    }

    /// Look up an area by identifier.
    pub fn find_area(&self, id: &AreaId) -> Option<&Area> {
        let (section, area) = *self.area_index.get(id)?;
        self.sections.get(section)?.areas().get(area)
    }

    /// Look up a section by identifier.
    pub fn find_section(&self, id: &SectionId) -> Option<&Section> {
        let index = *self.section_index.get(id)?;
        self.sections.get(index)
    }

    /// The section containing the area with `id`.
    pub fn section_of_area(&self, id: &AreaId) -> Option<&Section> {
        let area = self.find_area(id)?;
        self.find_section(area.section_id())
    }

    /// An evaluation context over `progress`, optionally scoped to `mode`.
    pub const fn context<'a>(
        &'a self,
        progress: &'a ProgressStore,
        mode: Option<CharacterMode>,
    ) -> EvalContext<'a> {
        match mode {
            Some(mode) => EvalContext::for_mode(progress, &self.reserved, mode),
            None => EvalContext::global(progress, &self.reserved),
        }
    }
}
