//! Cart Line Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{InventoryItemUuid, PhotoUuid};

/// One entry in a cart: a chosen print and how many of it.
///
/// Everything the order needs is copied in when the entry is created, so a
/// placed order keeps its title and price even if the photo or inventory
/// item is edited afterwards. Serialized as-is into the order's `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub inventory_id: InventoryItemUuid,
    pub photo_id: PhotoUuid,
    pub photo_title: String,
    pub size: String,
    pub material: String,
    pub quantity: u32,

    /// Unit price at the time the entry was added.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}
