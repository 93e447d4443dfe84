use std::sync::Arc;

use stockpile_catalog::Item;
use stockpile_infra::locks::ItemLocks;
use stockpile_infra::services::{InventoryService, ItemService, OrderService, TransactionService};
use stockpile_infra::store::InMemoryStore;
use stockpile_ledger::{Inventory, InventoryTransaction};
use stockpile_orders::Order;

pub type ItemsStore = InMemoryStore<Item>;
pub type InventoryStore = InMemoryStore<Inventory>;
pub type TxnStore = InMemoryStore<InventoryTransaction>;
pub type OrderStore = InMemoryStore<Order>;

/// The wired service stack handed to every handler via `Extension`.
pub struct AppServices {
    pub items: ItemService<ItemsStore>,
    pub inventories: Arc<InventoryService<InventoryStore>>,
    pub transactions: Arc<TransactionService<ItemsStore, InventoryStore, TxnStore>>,
    pub orders: OrderService<ItemsStore, InventoryStore, TxnStore, OrderStore>,
}

impl AppServices {
    /// In-memory wiring (dev/test and the single-store deployment model).
    /// Transactions and orders share one lock registry so stock movements
    /// from both paths serialize per item.
    pub fn in_memory() -> Self {
        let items_store = Arc::new(InMemoryStore::new());
        let inventory_store = Arc::new(InMemoryStore::new());
        let txn_store = Arc::new(InMemoryStore::new());
        let order_store = Arc::new(InMemoryStore::new());
        let locks = Arc::new(ItemLocks::new());

        let inventories = Arc::new(InventoryService::new(inventory_store));
        let transactions = Arc::new(TransactionService::new(
            items_store.clone(),
            inventories.clone(),
            txn_store,
            locks.clone(),
        ));
        let orders = OrderService::new(
            items_store.clone(),
            transactions.clone(),
            order_store,
            locks,
        );
        let items = ItemService::new(items_store);

        Self {
            items,
            inventories,
            transactions,
            orders,
        }
    }
}
