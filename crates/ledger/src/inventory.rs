use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpile_core::{DomainError, DomainResult, Entity, InventoryId, ItemId};

use crate::transaction::TxnKind;

/// Current stock level for one item. At most one live record per item;
/// created lazily by the first top-up and mutated only by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: InventoryId,
    pub item_id: ItemId,
    /// Invariant: never negative.
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Inventory {
    /// Open a stock record, as the first top-up for an item does.
    pub fn open(item_id: ItemId, stock: i64, at: DateTime<Utc>) -> DomainResult<Self> {
        if stock < 0 {
            return Err(DomainError::validation("stock", "must be positive or zero"));
        }
        Ok(Self {
            id: InventoryId::new(),
            item_id,
            stock,
            created_at: at,
            deleted_at: None,
        })
    }

    /// Stock level after a movement, without mutating.
    pub fn projected(&self, kind: TxnKind, qty: i64) -> DomainResult<i64> {
        let candidate = match kind {
            TxnKind::TopUp => self.stock + qty,
            TxnKind::Withdrawal => self.stock - qty,
        };
        if candidate < 0 {
            return Err(DomainError::InsufficientStock);
        }
        Ok(candidate)
    }

    /// Apply a movement, returning the new stock level.
    pub fn apply(&mut self, kind: TxnKind, qty: i64) -> DomainResult<i64> {
        let stock = self.projected(kind, qty)?;
        self.stock = stock;
        Ok(stock)
    }
}

impl Entity for Inventory {
    type Id = InventoryId;

    fn id(&self) -> InventoryId {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) {
        self.deleted_at = at;
    }
}

/// Partial update merged onto a stored inventory record.
///
/// A direct stock correction bypasses the transaction trail; it still may not
/// make the level negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryPatch {
    pub stock: Option<i64>,
}

impl InventoryPatch {
    pub fn apply(self, inventory: &mut Inventory) -> DomainResult<()> {
        if let Some(stock) = self.stock {
            if stock < 0 {
                return Err(DomainError::validation("stock", "must be positive or zero"));
            }
            inventory.stock = stock;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn open_rejects_negative_stock() {
        assert!(Inventory::open(ItemId::new(), -1, test_time()).is_err());
        assert_eq!(Inventory::open(ItemId::new(), 0, test_time()).unwrap().stock, 0);
    }

    #[test]
    fn apply_top_up_and_withdrawal() {
        let mut inv = Inventory::open(ItemId::new(), 10, test_time()).unwrap();
        assert_eq!(inv.apply(TxnKind::TopUp, 5).unwrap(), 15);
        assert_eq!(inv.apply(TxnKind::Withdrawal, 15).unwrap(), 0);
        assert_eq!(inv.stock, 0);
    }

    #[test]
    fn overdraw_fails_and_leaves_stock_unchanged() {
        let mut inv = Inventory::open(ItemId::new(), 7, test_time()).unwrap();
        let err = inv.apply(TxnKind::Withdrawal, 8).unwrap_err();
        assert_eq!(err, DomainError::InsufficientStock);
        assert_eq!(inv.stock, 7);
    }

    #[test]
    fn projected_does_not_mutate() {
        let inv = Inventory::open(ItemId::new(), 3, test_time()).unwrap();
        assert_eq!(inv.projected(TxnKind::TopUp, 4).unwrap(), 7);
        assert_eq!(inv.stock, 3);
    }

    #[test]
    fn patch_keeps_stock_non_negative() {
        let mut inv = Inventory::open(ItemId::new(), 3, test_time()).unwrap();
        assert!(InventoryPatch { stock: Some(-1) }.apply(&mut inv).is_err());
        assert_eq!(inv.stock, 3);
        InventoryPatch { stock: Some(0) }.apply(&mut inv).unwrap();
        assert_eq!(inv.stock, 0);
    }
}
