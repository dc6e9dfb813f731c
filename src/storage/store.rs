use super::seed::seed_items;
use crate::{
    error::{ItemDeskError, Result},
    model::{Item, ItemCategory, ItemId, ItemPatch, ItemStatus, NewItem},
    query::{ListQuery, Page},
    validation,
};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, VecDeque};

/// The single in-memory collection of items.
///
/// Lookups go through `items`; `order` keeps insertion order with the most
/// recently created item at the front. Ids come from `next_id` and are never
/// handed out twice, even after a delete.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: HashMap<ItemId, Item>,
    order: VecDeque<ItemId>,
    next_id: ItemId,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Builds a store holding `items` in the given order.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut store = Self::new();
        for item in items {
            let id = item.id;
            store.next_id = store.next_id.max(id + 1);
            if store.items.insert(id, item).is_none() {
                store.order.push_back(id);
            }
        }
        store
    }

    pub fn seeded(count: usize, now: DateTime<Utc>) -> Self {
        let store = Self::from_items(seed_items(count, now));
        tracing::debug!(count = store.len(), next_id = store.next_id, "Seeded item store");
        store
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn next_id(&self) -> ItemId {
        self.next_id
    }

    /// Copies every item out in insertion order.
    pub fn snapshot(&self) -> Vec<Item> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .cloned()
            .collect()
    }

    pub fn list(&self, query: &ListQuery) -> Page {
        let page = query.run(self.snapshot());
        tracing::debug!(
            ?query,
            total = page.meta.total,
            returned = page.data.len(),
            "Listed items"
        );
        page
    }

    pub fn get(&self, id: ItemId) -> Result<&Item> {
        self.items.get(&id).ok_or(ItemDeskError::NotFound)
    }

    pub fn create(&mut self, input: NewItem) -> Result<Item> {
        let name = validation::validate_new_name(input.name.as_deref())?;
        let status = match input.status.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => s.parse::<ItemStatus>()?,
            None => ItemStatus::default(),
        };
        let category = match input.category.as_deref().filter(|s| !s.is_empty()) {
            Some(c) => c.parse::<ItemCategory>()?,
            None => ItemCategory::default(),
        };

        let id = self.next_id;
        self.next_id += 1;

        let item = Item::new(id, name)
            .with_status(status)
            .with_category(category)
            .with_notes(input.notes.unwrap_or_default());

        tracing::info!(id, name = %item.name, "Creating item");
        self.items.insert(id, item.clone());
        self.order.push_front(id);
        Ok(item)
    }

    /// Applies the fields present in `patch`. Nothing changes unless every
    /// supplied field is valid.
    pub fn update(&mut self, id: ItemId, patch: ItemPatch) -> Result<Item> {
        let item = self.items.get_mut(&id).ok_or(ItemDeskError::NotFound)?;

        let name = patch
            .name
            .as_deref()
            .map(validation::validate_renamed)
            .transpose()?;
        let status = patch
            .status
            .as_deref()
            .map(str::parse::<ItemStatus>)
            .transpose()?;
        let category = patch
            .category
            .as_deref()
            .map(str::parse::<ItemCategory>)
            .transpose()?;

        if patch.is_empty() {
            tracing::debug!(id, "Update carried no fields");
        }

        if let Some(name) = name {
            item.name = name;
        }
        if let Some(status) = status {
            item.status = status;
        }
        if let Some(category) = category {
            item.category = category;
        }
        if let Some(notes) = patch.notes {
            item.notes = notes;
        }

        tracing::info!(id, "Updated item");
        Ok(item.clone())
    }

    pub fn delete(&mut self, id: ItemId) -> Result<Item> {
        let item = self.items.remove(&id).ok_or(ItemDeskError::NotFound)?;
        self.order.retain(|existing| *existing != id);
        tracing::info!(id, name = %item.name, "Deleted item");
        Ok(item)
    }
}
