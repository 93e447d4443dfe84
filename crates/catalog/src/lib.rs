//! `stockpile-catalog` — the item catalog: name/price records.

pub mod item;

pub use item::{Item, ItemPatch};
