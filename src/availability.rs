//! Inventory availability

use crate::catalog::{InventoryItem, PhotoUuid};

/// How to decide whether a photo can be ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockPolicy {
    /// Any inventory row makes a photo orderable, even one with zero
    /// quantity. This is how the live storefront has always behaved.
    #[default]
    AnyListing,

    /// Only rows with a positive quantity count.
    PositiveQuantity,
}

impl StockPolicy {
    fn counts(self, item: &InventoryItem) -> bool {
        match self {
            Self::AnyListing => true,
            Self::PositiveQuantity => item.is_purchasable(),
        }
    }
}

/// The inventory on offer for one photo.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability<'a> {
    pub photo_id: PhotoUuid,

    /// The photo's inventory items, in store order.
    pub items: Vec<&'a InventoryItem>,

    /// Whether the photo is orderable under the policy used for the lookup.
    pub has_stock: bool,
}

impl Availability<'_> {
    /// Items the shopper can add to a cart.
    pub fn purchasable(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items
            .iter()
            .copied()
            .filter(|item| item.is_purchasable())
    }
}

/// Collect a photo's inventory items and decide whether it is in stock.
pub fn lookup(
    inventory: &[InventoryItem],
    photo_id: PhotoUuid,
    policy: StockPolicy,
) -> Availability<'_> {
    let items: Vec<&InventoryItem> = inventory
        .iter()
        .filter(|item| item.photo_id == photo_id)
        .collect();

    let has_stock = items.iter().any(|item| policy.counts(item));

    Availability {
        photo_id,
        items,
        has_stock,
    }
}
