// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The local collection tree and its active selection.

use crate::error::{Error, Result};
use crate::model::{Collection, Item};

/// In-memory collection tree.
///
/// Every item belongs to exactly one collection. Mutations that mirror a
/// remote write go through the coordinator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shelf {
    collections: Vec<Collection>,
    active: Option<String>,
}

impl Shelf {
    /// Builds a shelf selecting the first collection.
    pub fn new(collections: Vec<Collection>) -> Self {
        Self::with_active(collections, None)
    }

    /// Builds a shelf with a preferred selection.
    ///
    /// Falls back to the first collection when `active` is absent or stale.
    pub fn with_active(collections: Vec<Collection>, active: Option<String>) -> Self {
        let active = active
            .filter(|id| collections.iter().any(|c| c.id == id.as_str()))
            .or_else(|| collections.first().map(|c| c.id.to_string()));
        Shelf { collections, active }
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn into_collections(self) -> Vec<Collection> {
        self.collections
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&Collection> {
        self.active.as_deref().and_then(|id| self.collection(id))
    }

    pub fn select(&mut self, id: &str) -> Result<()> {
        if self.collection(id).is_none() {
            return Err(Error::CollectionNotFound(id.to_string()));
        }
        self.active = Some(id.to_string());
        Ok(())
    }

    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    fn collection_mut(&mut self, id: &str) -> Result<&mut Collection> {
        self.collections
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::CollectionNotFound(id.to_string()))
    }

    /// Finds an item anywhere in the tree along with its collection.
    pub fn find_item(&self, item_id: &str) -> Option<(&Collection, &Item)> {
        self.collections.iter().find_map(|c| c.find_item(item_id).map(|i| (c, i)))
    }

    pub fn total_items(&self) -> usize {
        self.collections.iter().map(|c| c.items.len()).sum()
    }

    /// Items of a collection whose title, note or tags contain `query`, ignoring case.
    ///
    /// An empty query matches every item.
    pub fn filter_items(&self, collection_id: &str, query: &str) -> Result<Vec<&Item>> {
        let col = self
            .collection(collection_id)
            .ok_or_else(|| Error::CollectionNotFound(collection_id.to_string()))?;
        let needle = query.trim().to_lowercase();
        Ok(col.items.iter().filter(|i| needle.is_empty() || i.matches(&needle)).collect())
    }

    /// Appends a collection, selects it and returns its position.
    pub(crate) fn push_collection(&mut self, collection: Collection) -> usize {
        self.active = Some(collection.id.to_string());
        self.collections.push(collection);
        self.collections.len() - 1
    }

    /// Appends an item and returns its position within the collection.
    pub(crate) fn push_item(&mut self, collection_id: &str, item: Item) -> Result<usize> {
        let items = &mut self.collection_mut(collection_id)?.items;
        items.push(item);
        Ok(items.len() - 1)
    }

    /// Removes an item, returning it.
    pub(crate) fn remove_item(&mut self, item_id: &str) -> Result<Item> {
        for col in &mut self.collections {
            if let Some(pos) = col.items.iter().position(|i| i.id == item_id) {
                return Ok(col.items.remove(pos));
            }
        }
        Err(Error::ItemNotFound(item_id.to_string()))
    }

    /// Removes a collection and its items.
    ///
    /// If it was selected, selection moves to the first remaining collection.
    pub(crate) fn remove_collection(&mut self, id: &str) -> Result<Collection> {
        let pos = self
            .collections
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::CollectionNotFound(id.to_string()))?;
        let removed = self.collections.remove(pos);
        if self.active.as_deref() == Some(id) {
            self.active = self.collections.first().map(|c| c.id.to_string());
        }
        Ok(removed)
    }

    /// Replaces the temporary id of the collection at `pos` with its record key.
    ///
    /// The selection follows the collection.
    pub(crate) fn promote_collection_at(&mut self, pos: usize, rkey: &str) -> Result<()> {
        let col = self
            .collections
            .get_mut(pos)
            .ok_or_else(|| Error::CollectionNotFound(format!("#{pos}")))?;
        let temp_id = col.id.to_string();
        col.id.promote(rkey)?;
        if self.active.as_deref() == Some(temp_id.as_str()) {
            self.active = Some(rkey.to_string());
        }
        Ok(())
    }

    /// Replaces the temporary id of the item at `pos` in a collection with its record key.
    pub(crate) fn promote_item_at(
        &mut self,
        collection_id: &str,
        pos: usize,
        rkey: &str,
    ) -> Result<()> {
        let item = self
            .collection_mut(collection_id)?
            .items
            .get_mut(pos)
            .ok_or_else(|| Error::ItemNotFound(format!("{collection_id}#{pos}")))?;
        item.id.promote(rkey)
    }
}
