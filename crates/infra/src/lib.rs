//! `stockpile-infra` — persistence, locking and the application services.
//!
//! The domain crates hold the pure rules; this crate wires them to a store
//! and closes the read-modify-write races around stock and order numbers.

pub mod locks;
pub mod services;
pub mod store;


pub use locks::ItemLocks;
pub use services::{InventoryService, ItemService, OrderService, TransactionService};
pub use store::{EntityStore, InMemoryStore};
