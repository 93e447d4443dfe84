use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex as AsyncMutex;

use stockpile_catalog::Item;
use stockpile_core::{DomainError, DomainResult, ItemId, OrderId, Page, PageRequest};
use stockpile_ledger::{transaction::validate_qty, Inventory, InventoryTransaction, TxnKind};
use stockpile_orders::{Order, OrderNo, OrderPatch};

use crate::locks::{acquire, ItemLocks, LOCK_WAIT};
use crate::store::EntityStore;

use super::{Lifecycle, TransactionService};

/// The order sequencer: prices an order from the catalog, debits stock
/// through the transaction processor and assigns the next order number.
pub struct OrderService<SI, SV, ST, SO> {
    items: Arc<SI>,
    transactions: Arc<TransactionService<SI, SV, ST>>,
    store: Arc<SO>,
    locks: Arc<ItemLocks>,
    /// Serializes order placement end-to-end: the "last order number" is a
    /// derived query, so read-max and insert must not interleave.
    sequencer: Arc<AsyncMutex<()>>,
    crud: Lifecycle<Order, SO>,
}

impl<SI, SV, ST, SO> OrderService<SI, SV, ST, SO>
where
    SI: EntityStore<Item>,
    SV: EntityStore<Inventory>,
    ST: EntityStore<InventoryTransaction>,
    SO: EntityStore<Order>,
{
    pub fn new(
        items: Arc<SI>,
        transactions: Arc<TransactionService<SI, SV, ST>>,
        store: Arc<SO>,
        locks: Arc<ItemLocks>,
    ) -> Self {
        Self {
            items,
            transactions,
            store: store.clone(),
            locks,
            sequencer: Arc::new(AsyncMutex::new(())),
            crud: Lifecycle::new(store, "order"),
        }
    }

    /// Place an order: snapshot the item price, debit stock, assign the next
    /// number, persist. All-or-nothing: a rejected debit writes no order row
    /// and consumes no number.
    pub async fn place(&self, item_id: ItemId, qty: i64, at: DateTime<Utc>) -> DomainResult<Order> {
        validate_qty(qty)?;

        let item = self
            .items
            .get(item_id)?
            .ok_or_else(|| DomainError::not_found("item"))?;
        let price = item.price;

        // Lock order is fixed: sequencer, then item. No other path takes both.
        let _seq = acquire(self.sequencer.clone(), LOCK_WAIT, "order sequencer").await?;
        let _item = self.locks.acquire(item_id).await?;

        let order_no = match self.store.last()? {
            Some(last) => last.order_no.next(),
            None => OrderNo::FIRST,
        };

        let txn = self
            .transactions
            .record_with_lock_held(item_id, qty, TxnKind::Withdrawal, at)?;

        let order = Order::new(order_no, item_id, qty, price, at)?;
        self.store.insert(order.clone())?;

        tracing::info!(
            order_id = %order.id,
            order_no = %order.order_no,
            item_id = %item_id,
            txn_id = %txn.id,
            qty,
            price,
            "order placed"
        );
        Ok(order)
    }

    pub fn find_by_id(&self, id: OrderId) -> DomainResult<Order> {
        self.crud.find_by_id(id)
    }

    pub fn find_all(&self, request: PageRequest) -> DomainResult<Page<Order>> {
        self.crud.find_all(request)
    }

    pub fn update(&self, id: OrderId, patch: OrderPatch) -> DomainResult<Order> {
        self.crud.update_with(id, |order| patch.apply(order))
    }

    pub fn delete(&self, id: OrderId, at: DateTime<Utc>) -> DomainResult<()> {
        self.crud.soft_delete(id, at)
    }
}
