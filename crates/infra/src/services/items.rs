use std::sync::Arc;

use chrono::{DateTime, Utc};

use stockpile_catalog::{Item, ItemPatch};
use stockpile_core::{DomainError, DomainResult, ItemId, Page, PageRequest};

use crate::store::EntityStore;

use super::Lifecycle;

/// The item catalog: name/price records, names unique among live items.
pub struct ItemService<S> {
    store: Arc<S>,
    crud: Lifecycle<Item, S>,
}

impl<S> ItemService<S>
where
    S: EntityStore<Item>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            crud: Lifecycle::new(store.clone(), "item"),
            store,
        }
    }

    pub fn create(&self, name: &str, price: u64, at: DateTime<Utc>) -> DomainResult<Item> {
        let item = Item::new(name, price, at)?;
        if self
            .store
            .find_first(&|existing: &Item| existing.name == item.name)?
            .is_some()
        {
            return Err(DomainError::duplicate("item"));
        }
        self.store.insert(item.clone())?;
        tracing::info!(item_id = %item.id, name = %item.name, "item created");
        Ok(item)
    }

    pub fn find_by_id(&self, id: ItemId) -> DomainResult<Item> {
        self.crud.find_by_id(id)
    }

    pub fn find_all(&self, request: PageRequest) -> DomainResult<Page<Item>> {
        self.crud.find_all(request)
    }

    pub fn update(&self, id: ItemId, patch: ItemPatch) -> DomainResult<Item> {
        self.crud.update_with(id, |item| patch.apply(item))
    }

    pub fn delete(&self, id: ItemId, at: DateTime<Utc>) -> DomainResult<()> {
        self.crud.soft_delete(id, at)
    }
}
