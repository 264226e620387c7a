//! Photo Inventory

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{catalog::photos::PhotoUuid, uuids::TypedUuid};

/// Inventory Item UUID
pub type InventoryItemUuid = TypedUuid<InventoryItem>;

/// One purchasable print of a photo: a size and material with its own price
/// and stock count.
///
/// `quantity` is informational. Nothing decrements it when an order is
/// placed and the cart does not treat it as a cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemUuid,
    pub photo_id: PhotoUuid,
    pub size: String,
    pub material: String,
    pub quantity: u32,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub created_at: Timestamp,
}

impl InventoryItem {
    /// Whether the storefront should offer this item for adding to a cart.
    pub fn is_purchasable(&self) -> bool {
        self.quantity > 0
    }
}

/// New inventory item data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub photo_id: PhotoUuid,
    pub size: String,
    pub material: String,
    pub quantity: u32,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_store_row_with_integer_price() -> TestResult {
        let item: InventoryItem = serde_json::from_value(json!({
            "id": "0190c8a4-6d1e-7a4e-9a7e-3f2b1c0d9e8f",
            "photo_id": "0190c8a4-6d1e-7a4e-9a7e-3f2b1c0d9e80",
            "size": "8x10",
            "material": "Fine Art Paper",
            "quantity": 0,
            "price": 25,
            "created_at": "2025-03-01T09:30:00.123456+00:00",
        }))?;

        assert_eq!(item.price, Decimal::new(25, 0));
        assert!(!item.is_purchasable());

        Ok(())
    }

    #[test]
    fn encodes_price_as_a_json_number() -> TestResult {
        let item = NewInventoryItem {
            photo_id: PhotoUuid::new(),
            size: "11x14".to_string(),
            material: "Canvas".to_string(),
            quantity: 3,
            price: Decimal::new(4550, 2),
        };

        let value = serde_json::to_value(&item)?;

        assert_eq!(value.get("price"), Some(&json!(45.5)));

        Ok(())
    }
}
