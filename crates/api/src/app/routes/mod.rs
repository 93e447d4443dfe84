pub mod inventories;
pub mod items;
pub mod orders;
pub mod system;
pub mod transactions;
