//! Builders that assemble a [`Collection`] in one bottom-up pass.
//!
//! Content is described top-down with [`CollectionBuilder`],
//! [`SectionBuilder`], and [`AreaBuilder`]. [`CollectionBuilder::build`]
//! then:
//!
//! 1. Checks that item, area, and section ids are unique.
//! 2. Resolves hierarchy-dependent conditions (`AllOfKindInArea`).
//! 3. Checks that every id a condition references exists.
//! 4. Creates each node with its parent id already set, and the indexes.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use completionist_types::{AreaId, CollectionId, ItemId, ItemKind, SectionId};

use crate::condition::{ReservedItems, UnlockCondition};
use crate::error::CatalogError;
use crate::hierarchy::{Area, Collection, ItemLocation, Section};
use crate::item::Item;

/// Describes one area.
#[derive(Debug, Clone)]
pub struct AreaBuilder {
    id: AreaId,
    name: String,
    items: Vec<Item>,
    condition: Option<UnlockCondition>,
}

impl AreaBuilder {
    /// Start an area.
    pub fn new(id: impl Into<AreaId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
            condition: None,
        }
    }

    /// Append an item.
    #[must_use]
    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Append several items.
    #[must_use]
    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Gate the area behind `condition`.
    #[must_use]
    pub fn condition(mut self, condition: UnlockCondition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Describes one section.
#[derive(Debug, Clone)]
pub struct SectionBuilder {
    id: SectionId,
    name: String,
    areas: Vec<AreaBuilder>,
    condition: Option<UnlockCondition>,
}

impl SectionBuilder {
    /// Start a section.
    pub fn new(id: impl Into<SectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            areas: Vec::new(),
            condition: None,
        }
    }

    /// Append an area.
    #[must_use]
    pub fn area(mut self, area: AreaBuilder) -> Self {
        self.areas.push(area);
        self
    }

    /// Gate the section behind `condition`.
    #[must_use]
    pub fn condition(mut self, condition: UnlockCondition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Describes a whole collection.
#[derive(Debug, Clone)]
pub struct CollectionBuilder {
    id: CollectionId,
    name: String,
    sections: Vec<SectionBuilder>,
}

impl CollectionBuilder {
    /// Start a collection.
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section.
    #[must_use]
    pub fn section(mut self, section: SectionBuilder) -> Self {
        self.sections.push(section);
        self
    }

    /// Validate and assemble the collection.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-id error if any identifier repeats,
    /// [`CatalogError::AreaNotFound`] for an unresolvable area reference, or
    /// [`CatalogError::DanglingReference`] when a condition names an item
    /// that is not in the collection.
    pub fn build(mut self) -> Result<Collection, CatalogError> {
        let area_items = self.check_unique_ids()?;
        self.resolve_conditions(&area_items)?;
        self.check_references(&area_items)?;

        let mut item_index = BTreeMap::new();
        let mut area_index = BTreeMap::new();
        let mut section_index = BTreeMap::new();
        let mut reserved = ReservedItems::new();
        let mut sections = Vec::with_capacity(self.sections.len());

        for (s, section) in self.sections.into_iter().enumerate() {
            section_index.insert(section.id.clone(), s);
            let mut areas = Vec::with_capacity(section.areas.len());
            for (a, area) in section.areas.into_iter().enumerate() {
                area_index.insert(area.id.clone(), (s, a));
                for (i, item) in area.items.iter().enumerate() {
                    item_index.insert(
                        item.id().clone(),
                        ItemLocation {
                            section: s,
                            area: a,
                            item: i,
                        },
                    );
                    reserved.insert(item.id().clone(), item.kind());
                }
                areas.push(Area::from_parts(
                    area.id,
                    area.name,
                    section.id.clone(),
                    area.items,
                    area.condition,
                ));
            }
            sections.push(Section::from_parts(
                section.id,
                section.name,
                self.id.clone(),
                areas,
                section.condition,
            ));
        }

        debug!(
            collection = %self.id,
            sections = sections.len(),
            areas = area_index.len(),
            items = item_index.len(),
            "collection built"
        );

        Ok(Collection::from_parts(
            self.id,
            self.name,
            sections,
            item_index,
            area_index,
            section_index,
            reserved,
        ))
    }

    /// Reject repeated ids and return each area's items in order.
    fn check_unique_ids(&self) -> Result<BTreeMap<AreaId, Vec<(ItemId, ItemKind)>>, CatalogError> {
        let mut section_ids = BTreeSet::new();
        let mut item_ids = BTreeSet::new();
        let mut area_items = BTreeMap::new();

        for section in &self.sections {
            if !section_ids.insert(section.id.clone()) {
                return Err(CatalogError::DuplicateSection(section.id.clone()));
            }
            for area in &section.areas {
                if area_items.contains_key(&area.id) {
                    return Err(CatalogError::DuplicateArea(area.id.clone()));
                }
                let mut items = Vec::with_capacity(area.items.len());
                for item in &area.items {
                    if !item_ids.insert(item.id().clone()) {
                        return Err(CatalogError::DuplicateItem(item.id().clone()));
                    }
                    items.push((item.id().clone(), item.kind()));
                }
                area_items.insert(area.id.clone(), items);
            }
        }
        Ok(area_items)
    }

    fn resolve_conditions(
        &mut self,
        area_items: &BTreeMap<AreaId, Vec<(ItemId, ItemKind)>>,
    ) -> Result<(), CatalogError> {
        for section in &mut self.sections {
            if let Some(condition) = section.condition.as_mut() {
                condition.resolve(area_items)?;
            }
            for area in &mut section.areas {
                if let Some(condition) = area.condition.as_mut() {
                    condition.resolve(area_items)?;
                }
                for item in &mut area.items {
                    if let Some(condition) = item.unlock_condition_mut() {
                        condition.resolve(area_items)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn check_references(
        &self,
        area_items: &BTreeMap<AreaId, Vec<(ItemId, ItemKind)>>,
    ) -> Result<(), CatalogError> {
        let known: BTreeSet<&ItemId> = area_items
            .values()
            .flat_map(|items| items.iter().map(|(id, _)| id))
            .collect();

        let check = |owner: &str, condition: Option<&UnlockCondition>| {
            condition
                .into_iter()
                .flat_map(UnlockCondition::referenced_items)
                .find(|id| !known.contains(id))
                .map_or(Ok(()), |id| {
                    Err(CatalogError::DanglingReference {
                        owner: owner.to_owned(),
                        item: id.clone(),
                    })
                })
        };

        for section in &self.sections {
            check(section.id.as_str(), section.condition.as_ref())?;
            for area in &section.areas {
                check(area.id.as_str(), area.condition.as_ref())?;
                for item in &area.items {
                    check(item.id().as_str(), item.unlock_condition())?;
                }
            }
        }
        Ok(())
    }
}
