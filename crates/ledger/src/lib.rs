//! `stockpile-ledger` — per-item stock records and the transactions that move them.

pub mod inventory;
pub mod transaction;

pub use inventory::{Inventory, InventoryPatch};
pub use transaction::{InventoryTransaction, TransactionPatch, TxnKind};
