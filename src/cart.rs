//! Cart

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

use crate::{
    catalog::{InventoryItem, InventoryItemUuid, Photo, PhotoUuid},
    items::LineItem,
    pricing::{TotalPriceError, to_money, total_price},
};

/// Errors raised when changing a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Line items must be for at least one print.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// The inventory item is a print of a different photo (item, item's photo, given photo).
    #[error("inventory item {0} belongs to photo {1}, not {2}")]
    PhotoMismatch(InventoryItemUuid, PhotoUuid, PhotoUuid),
}

/// The prints a shopper has picked during one browsing session.
///
/// Entries keep the order they were added in. Adding the same inventory item
/// twice yields two separate entries; nothing is merged, and the stock count
/// on the inventory item is not checked.
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: &'static Currency,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(iso::USD)
    }
}

impl Cart {
    /// Create an empty cart priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Append a line for `quantity` prints of `item`, copying the photo's id
    /// and title and the item's size, material and current price. Returns
    /// the index of the new line.
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: `quantity` is zero.
    /// - [`CartError::PhotoMismatch`]: `item` is not a print of `photo`.
    pub fn add_item(
        &mut self,
        photo: &Photo,
        item: &InventoryItem,
        quantity: u32,
    ) -> Result<usize, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        if item.photo_id != photo.id {
            return Err(CartError::PhotoMismatch(item.id, item.photo_id, photo.id));
        }

        let index = self.items.len();

        self.items.push(LineItem {
            inventory_id: item.id,
            photo_id: photo.id,
            photo_title: photo.title.clone(),
            size: item.size.clone(),
            material: item.material.clone(),
            quantity,
            price: item.price,
        });

        Ok(index)
    }

    /// Remove the line at `index`. Out of range indexes leave the cart as it
    /// is and return `None`.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Exact sum of price × quantity over every line.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the arithmetic overflows.
    pub fn total(&self) -> Result<Decimal, TotalPriceError> {
        total_price(&self.items)
    }

    /// The total as money in the cart currency, for display.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the total cannot be computed or represented.
    pub fn total_money(&self) -> Result<Money<'static, Currency>, TotalPriceError> {
        to_money(self.total()?, self.currency)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in the order they were added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use super::*;

    fn photo(title: &str) -> Photo {
        Photo {
            id: PhotoUuid::new(),
            title: title.to_string(),
            description: String::new(),
            category: "Landscape".to_string(),
            image_url: "https://cdn.example/photo.jpg".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn print_of(photo: &Photo, size: &str, material: &str, price: Decimal) -> InventoryItem {
        InventoryItem {
            id: InventoryItemUuid::new(),
            photo_id: photo.id,
            size: size.to_string(),
            material: material.to_string(),
            quantity: 4,
            price,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn new_with_currency() {
        let cart = Cart::new(iso::GBP);

        assert_eq!(cart.currency(), iso::GBP);
        assert!(cart.is_empty());
    }

    #[test]
    fn add_item_copies_photo_and_inventory_fields() -> TestResult {
        let photo = photo("Harbour Fog");
        let item = print_of(&photo, "8x10", "Fine Art Paper", Decimal::new(2500, 2));
        let mut cart = Cart::default();

        let index = cart.add_item(&photo, &item, 2)?;
        let line = cart.items().get(index).ok_or("line missing")?;

        assert_eq!(line.inventory_id, item.id);
        assert_eq!(line.photo_id, photo.id);
        assert_eq!(line.photo_title, "Harbour Fog");
        assert_eq!(line.size, "8x10");
        assert_eq!(line.material, "Fine Art Paper");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, Decimal::new(2500, 2));

        Ok(())
    }

    #[test]
    fn add_item_rejects_zero_quantity() {
        let photo = photo("Harbour Fog");
        let item = print_of(&photo, "8x10", "Fine Art Paper", Decimal::new(25, 0));
        let mut cart = Cart::default();

        assert_eq!(
            cart.add_item(&photo, &item, 0),
            Err(CartError::ZeroQuantity)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn add_item_rejects_print_of_another_photo() {
        let harbour = photo("Harbour Fog");
        let meadow = photo("Meadow");
        let item = print_of(&meadow, "8x10", "Canvas", Decimal::new(25, 0));
        let mut cart = Cart::default();

        let result = cart.add_item(&harbour, &item, 1);

        assert_eq!(
            result,
            Err(CartError::PhotoMismatch(item.id, meadow.id, harbour.id))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn add_item_does_not_cap_at_stock() -> TestResult {
        let photo = photo("Harbour Fog");
        let item = print_of(&photo, "8x10", "Canvas", Decimal::new(25, 0));
        let mut cart = Cart::default();

        cart.add_item(&photo, &item, item.quantity + 10)?;

        assert_eq!(cart.items().first().map(|line| line.quantity), Some(14));

        Ok(())
    }

    #[test]
    fn remove_item_out_of_range_is_a_no_op() -> TestResult {
        let photo = photo("Harbour Fog");
        let item = print_of(&photo, "8x10", "Canvas", Decimal::new(25, 0));
        let mut cart = Cart::default();

        cart.add_item(&photo, &item, 1)?;

        assert!(cart.remove_item(1).is_none());
        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn total_money_in_cart_currency() -> TestResult {
        let photo = photo("Harbour Fog");
        let item = print_of(&photo, "8x10", "Canvas", Decimal::new(1250, 2));
        let mut cart = Cart::new(iso::GBP);

        cart.add_item(&photo, &item, 3)?;

        assert_eq!(cart.total_money()?, Money::from_minor(3750, iso::GBP));

        Ok(())
    }

    #[test]
    fn clear_empties_the_cart() -> TestResult {
        let photo = photo("Harbour Fog");
        let item = print_of(&photo, "8x10", "Canvas", Decimal::new(25, 0));
        let mut cart = Cart::default();

        cart.add_item(&photo, &item, 1)?;
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total()?, Decimal::ZERO);

        Ok(())
    }
}
