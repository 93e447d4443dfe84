use std::sync::Arc;

use chrono::{DateTime, Utc};

use stockpile_catalog::Item;
use stockpile_core::{DomainError, DomainResult, ItemId, Page, PageRequest, TransactionId};
use stockpile_ledger::{Inventory, InventoryTransaction, TransactionPatch, TxnKind};

use crate::locks::ItemLocks;
use crate::store::EntityStore;

use super::{InventoryService, Lifecycle};

/// The transaction processor: validates one stock movement, drives it through
/// the ledger and records it. The transaction row is written only after the
/// stock change.
pub struct TransactionService<SI, SV, ST> {
    items: Arc<SI>,
    ledger: Arc<InventoryService<SV>>,
    store: Arc<ST>,
    locks: Arc<ItemLocks>,
    crud: Lifecycle<InventoryTransaction, ST>,
}

impl<SI, SV, ST> TransactionService<SI, SV, ST>
where
    SI: EntityStore<Item>,
    SV: EntityStore<Inventory>,
    ST: EntityStore<InventoryTransaction>,
{
    pub fn new(
        items: Arc<SI>,
        ledger: Arc<InventoryService<SV>>,
        store: Arc<ST>,
        locks: Arc<ItemLocks>,
    ) -> Self {
        Self {
            items,
            ledger,
            store: store.clone(),
            locks,
            crud: Lifecycle::new(store, "inventory transaction"),
        }
    }

    /// Record a stock movement. Serializes with every other movement for the
    /// same item; movements on different items run in parallel.
    pub async fn record(
        &self,
        item_id: ItemId,
        qty: i64,
        kind: TxnKind,
        at: DateTime<Utc>,
    ) -> DomainResult<InventoryTransaction> {
        let _guard = self.locks.acquire(item_id).await?;
        self.record_with_lock_held(item_id, qty, kind, at)
    }

    /// Same flow for a caller that already holds the item's lock
    /// (order placement).
    pub(crate) fn record_with_lock_held(
        &self,
        item_id: ItemId,
        qty: i64,
        kind: TxnKind,
        at: DateTime<Utc>,
    ) -> DomainResult<InventoryTransaction> {
        let txn = InventoryTransaction::new(item_id, qty, kind, at)?;

        if self.items.get(item_id)?.is_none() {
            return Err(DomainError::not_found("item"));
        }

        // Ledger first; the transaction row is only written once the stock
        // change is durable, so a rejected movement leaves no partial state.
        let stock = self.ledger.apply_transaction(item_id, qty, kind, at)?;
        self.store.insert(txn.clone())?;

        tracing::info!(
            item_id = %item_id,
            kind = %kind,
            qty,
            stock,
            "transaction recorded"
        );
        Ok(txn)
    }

    pub fn find_by_id(&self, id: TransactionId) -> DomainResult<InventoryTransaction> {
        self.crud.find_by_id(id)
    }

    pub fn find_all(&self, request: PageRequest) -> DomainResult<Page<InventoryTransaction>> {
        self.crud.find_all(request)
    }

    /// Freeform correction of a stored record: the ledger is NOT re-run
    /// (see DESIGN.md).
    pub fn update(
        &self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> DomainResult<InventoryTransaction> {
        self.crud.update_with(id, |txn| patch.apply(txn))
    }

    pub fn delete(&self, id: TransactionId, at: DateTime<Utc>) -> DomainResult<()> {
        self.crud.soft_delete(id, at)
    }
}
