use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpile_core::{DomainError, DomainResult, Entity, ItemId, OrderId};

/// Human-readable order number: `"O" + N`, N starting at 1.
///
/// Numbers form a contiguous increasing sequence in creation order; the
/// sequencer derives the next one from the newest live order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNo(u64);

impl OrderNo {
    /// The number assigned when no prior order exists.
    pub const FIRST: OrderNo = OrderNo(1);

    pub fn seq(self) -> u64 {
        self.0
    }

    pub fn next(self) -> OrderNo {
        OrderNo(self.0 + 1)
    }
}

impl core::fmt::Display for OrderNo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "O{}", self.0)
    }
}

impl FromStr for OrderNo {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('O')
            .ok_or_else(|| DomainError::invalid_id(format!("OrderNo: missing prefix in '{s}'")))?;
        let seq: u64 = digits
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("OrderNo: bad sequence in '{s}'")))?;
        if seq == 0 {
            return Err(DomainError::invalid_id("OrderNo: sequence starts at 1".to_string()));
        }
        Ok(OrderNo(seq))
    }
}

impl TryFrom<String> for OrderNo {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderNo> for String {
    fn from(value: OrderNo) -> Self {
        value.to_string()
    }
}

/// A placed order. `price` is the item's price at placement time, never
/// re-derived; `order_no` is assigned at creation and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_no: OrderNo,
    pub item_id: ItemId,
    pub qty: i64,
    /// Price snapshot in smallest currency unit.
    pub price: u64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new(
        order_no: OrderNo,
        item_id: ItemId,
        qty: i64,
        price: u64,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if qty <= 0 {
            return Err(DomainError::validation("qty", "must be a positive integer"));
        }
        Ok(Self {
            id: OrderId::new(),
            order_no,
            item_id,
            qty,
            price,
            created_at: at,
            deleted_at: None,
        })
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) {
        self.deleted_at = at;
    }
}

/// Partial update merged onto a stored order.
///
/// `order_no` and the price snapshot are immutable; only the quantity is a
/// freeform correction (no stock re-balance, same policy as transactions).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPatch {
    pub qty: Option<i64>,
}

impl OrderPatch {
    pub fn apply(self, order: &mut Order) -> DomainResult<()> {
        if let Some(qty) = self.qty {
            if qty <= 0 {
                return Err(DomainError::validation("qty", "must be a positive integer"));
            }
            order.qty = qty;
        }
        Ok(())
    }
}
