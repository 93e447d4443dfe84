use std::sync::Arc;

use chrono::{DateTime, Utc};

use stockpile_core::{DomainError, DomainResult, InventoryId, ItemId, Page, PageRequest};
use stockpile_ledger::{Inventory, InventoryPatch, TxnKind};

use crate::store::EntityStore;

use super::Lifecycle;

/// The inventory ledger: current stock per item, moved only by transactions.
pub struct InventoryService<S> {
    store: Arc<S>,
    crud: Lifecycle<Inventory, S>,
}

impl<S> InventoryService<S>
where
    S: EntityStore<Inventory>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            crud: Lifecycle::new(store.clone(), "inventory"),
            store,
        }
    }

    /// Register a stock record directly. At most one live record per item.
    pub fn create(&self, item_id: ItemId, stock: i64, at: DateTime<Utc>) -> DomainResult<Inventory> {
        if self.find_by_item(item_id)?.is_some() {
            return Err(DomainError::duplicate("inventory"));
        }
        let inventory = Inventory::open(item_id, stock, at)?;
        self.store.insert(inventory.clone())?;
        Ok(inventory)
    }

    pub fn find_by_item(&self, item_id: ItemId) -> DomainResult<Option<Inventory>> {
        self.store
            .find_first(&|inv: &Inventory| inv.item_id == item_id)
    }

    /// Apply one stock movement for an item and return the new level.
    ///
    /// Caller must hold the item's lock. Exactly one inventory row is
    /// created-or-updated on success; nothing is written on failure.
    pub fn apply_transaction(
        &self,
        item_id: ItemId,
        qty: i64,
        kind: TxnKind,
        at: DateTime<Utc>,
    ) -> DomainResult<i64> {
        match self.find_by_item(item_id)? {
            Some(mut inventory) => {
                let stock = inventory.apply(kind, qty)?;
                self.store.put(inventory)?;
                Ok(stock)
            }
            None if kind == TxnKind::Withdrawal => Err(DomainError::OutOfStock),
            None => {
                // First top-up opens the record at the delivered quantity.
                let inventory = Inventory::open(item_id, qty, at)?;
                let stock = inventory.stock;
                self.store.insert(inventory)?;
                Ok(stock)
            }
        }
    }

    pub fn find_by_id(&self, id: InventoryId) -> DomainResult<Inventory> {
        self.crud.find_by_id(id)
    }

    pub fn find_all(&self, request: PageRequest) -> DomainResult<Page<Inventory>> {
        self.crud.find_all(request)
    }

    pub fn update(&self, id: InventoryId, patch: InventoryPatch) -> DomainResult<Inventory> {
        self.crud.update_with(id, |inventory| patch.apply(inventory))
    }

    pub fn delete(&self, id: InventoryId, at: DateTime<Utc>) -> DomainResult<()> {
        self.crud.soft_delete(id, at)
    }
}
