use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpile_core::{DomainError, DomainResult, Entity, ItemId, TransactionId};

/// Direction of a stock movement. Wire values are the single-letter codes
/// `"T"` (top-up) and `"W"` (withdrawal).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxnKind {
    #[serde(rename = "T")]
    TopUp,
    #[serde(rename = "W")]
    Withdrawal,
}

impl TxnKind {
    pub const TYPE_RULE: &'static str =
        "Type must be either 'T' for Top Up or 'W' for Withdrawal";

    pub fn code(self) -> &'static str {
        match self {
            TxnKind::TopUp => "T",
            TxnKind::Withdrawal => "W",
        }
    }
}

impl core::fmt::Display for TxnKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TxnKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "T" => Ok(TxnKind::TopUp),
            "W" => Ok(TxnKind::Withdrawal),
            _ => Err(DomainError::validation("type", Self::TYPE_RULE)),
        }
    }
}

/// Append-style record of one stock movement.
///
/// Once applied, a transaction changed `Inventory.stock` by `signed_qty`.
/// Later `update`/`delete` of the record do not re-run that arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryTransaction {
    pub id: TransactionId,
    pub item_id: ItemId,
    pub qty: i64,
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl InventoryTransaction {
    pub fn new(
        item_id: ItemId,
        qty: i64,
        kind: TxnKind,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        validate_qty(qty)?;
        Ok(Self {
            id: TransactionId::new(),
            item_id,
            qty,
            kind,
            created_at: at,
            deleted_at: None,
        })
    }

    /// Stock delta this transaction carries: `+qty` for top-up, `-qty` for withdrawal.
    pub fn signed_qty(&self) -> i64 {
        match self.kind {
            TxnKind::TopUp => self.qty,
            TxnKind::Withdrawal => -self.qty,
        }
    }
}

impl Entity for InventoryTransaction {
    type Id = TransactionId;

    fn id(&self) -> TransactionId {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) {
        self.deleted_at = at;
    }
}

/// Partial update merged onto a stored transaction.
///
/// A freeform correction: the ledger is NOT re-balanced (see DESIGN.md).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPatch {
    pub qty: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<TxnKind>,
}

impl TransactionPatch {
    pub fn apply(self, txn: &mut InventoryTransaction) -> DomainResult<()> {
        if let Some(qty) = self.qty {
            validate_qty(qty)?;
            txn.qty = qty;
        }
        if let Some(kind) = self.kind {
            txn.kind = kind;
        }
        Ok(())
    }
}

pub fn validate_qty(qty: i64) -> DomainResult<()> {
    if qty <= 0 {
        return Err(DomainError::validation("qty", "must be a positive integer"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn kind_round_trips_through_codes() {
        assert_eq!("T".parse::<TxnKind>().unwrap(), TxnKind::TopUp);
        assert_eq!("W".parse::<TxnKind>().unwrap(), TxnKind::Withdrawal);
        assert_eq!(TxnKind::TopUp.code(), "T");
        assert_eq!(TxnKind::Withdrawal.to_string(), "W");
    }

    #[test]
    fn kind_rejects_anything_else() {
        for bad in ["t", "w", "TOP_UP", "X", ""] {
            let err = bad.parse::<TxnKind>().unwrap_err();
            match err {
                DomainError::Validation { field, reason } => {
                    assert_eq!(field, "type");
                    assert_eq!(reason, TxnKind::TYPE_RULE);
                }
                _ => panic!("expected Validation error"),
            }
        }
    }

    #[test]
    fn new_transaction_requires_positive_qty() {
        let item_id = ItemId::new();
        assert!(InventoryTransaction::new(item_id, 0, TxnKind::TopUp, test_time()).is_err());
        assert!(InventoryTransaction::new(item_id, -3, TxnKind::TopUp, test_time()).is_err());
        assert!(InventoryTransaction::new(item_id, 1, TxnKind::TopUp, test_time()).is_ok());
    }

    #[test]
    fn signed_qty_reflects_direction() {
        let item_id = ItemId::new();
        let top_up = InventoryTransaction::new(item_id, 5, TxnKind::TopUp, test_time()).unwrap();
        let withdrawal =
            InventoryTransaction::new(item_id, 3, TxnKind::Withdrawal, test_time()).unwrap();
        assert_eq!(top_up.signed_qty(), 5);
        assert_eq!(withdrawal.signed_qty(), -3);
    }

    #[test]
    fn patch_rejects_non_positive_qty() {
        let mut txn =
            InventoryTransaction::new(ItemId::new(), 5, TxnKind::TopUp, test_time()).unwrap();
        let err = TransactionPatch {
            qty: Some(0),
            kind: None,
        }
        .apply(&mut txn)
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert_eq!(txn.qty, 5);
    }
}
