//! Application services: one per entity, sharing the generic lifecycle.

mod inventory;
mod items;
mod lifecycle;
mod orders;
mod transactions;

pub use inventory::InventoryService;
pub use items::ItemService;
pub use lifecycle::Lifecycle;
pub use orders::OrderService;
pub use transactions::TransactionService;
