//! `stockpile-orders` — orders and their sequential human-readable numbers.

pub mod order;

pub use order::{Order, OrderNo, OrderPatch};
