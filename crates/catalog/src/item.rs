use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpile_core::{DomainError, DomainResult, Entity, ItemId};

/// Catalog item: a purchasable thing with a unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Build a validated item. The catalog service enforces name uniqueness;
    /// format rules live here.
    pub fn new(name: impl Into<String>, price: u64, at: DateTime<Utc>) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id: ItemId::new(),
            name,
            price,
            created_at: at,
            deleted_at: None,
        })
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) {
        self.deleted_at = at;
    }
}

/// Partial update merged onto a stored item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<u64>,
}

impl ItemPatch {
    /// Merge onto `item`, re-running format validation on touched fields.
    pub fn apply(self, item: &mut Item) -> DomainResult<()> {
        if let Some(name) = self.name {
            validate_name(&name)?;
            item.name = name;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        Ok(())
    }
}

/// Item names are human-entered labels: non-blank, ASCII letters and spaces only.
pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name", "this field cannot be empty"));
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(DomainError::validation("name", "Invalid Input"));
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
    fn new_item_accepts_letters_and_spaces() {
        let item = Item::new("Mechanical Keyboard", 4500, test_time()).unwrap();
        assert_eq!(item.name, "Mechanical Keyboard");
        assert_eq!(item.price, 4500);
        assert!(item.deleted_at.is_none());
    }

    #[test]
    fn new_item_rejects_blank_name() {
        let err = Item::new("   ", 100, test_time()).unwrap_err();
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "name"),
            _ => panic!("expected Validation error"),
        }
    }

    #[test]
    fn new_item_rejects_digits_and_punctuation() {
        assert!(Item::new("Keyboard 2", 100, test_time()).is_err());
        assert!(Item::new("Keyboard!", 100, test_time()).is_err());
    }

    #[test]
    fn zero_price_is_allowed() {
        assert!(Item::new("Freebie", 0, test_time()).is_ok());
    }

    #[test]
    fn patch_merges_and_revalidates() {
        let mut item = Item::new("Pen", 100, test_time()).unwrap();

        ItemPatch {
            name: None,
            price: Some(250),
        }
        .apply(&mut item)
        .unwrap();
        assert_eq!(item.name, "Pen");
        assert_eq!(item.price, 250);

        let err = ItemPatch {
            name: Some("Pen 2".to_string()),
            price: None,
        }
        .apply(&mut item)
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        // Failed patch left the name untouched.
        assert_eq!(item.name, "Pen");
    }
}
