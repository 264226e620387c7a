//! Storefront session
//!
//! Owns everything one shopper's visit needs: the catalog as loaded, the
//! photo they are looking at and their cart. A session is a plain value held
//! by whoever drives the visit; it is never shared between shoppers.

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    availability::{Availability, StockPolicy, lookup},
    cart::{Cart, CartError},
    catalog::{InventoryItem, InventoryItemUuid, Photo, PhotoUuid},
    items::LineItem,
};

/// Errors from storefront interactions.
#[derive(Debug, Error, PartialEq)]
pub enum StorefrontError {
    #[error("photo {0} is not in the catalog")]
    UnknownPhoto(PhotoUuid),

    #[error("photo {0} has no prints available")]
    OutOfStock(PhotoUuid),

    #[error("select a photo before adding prints")]
    NoPhotoSelected,

    #[error("inventory item {0} is not offered for the selected photo")]
    UnknownInventoryItem(InventoryItemUuid),

    #[error("inventory item {0} is sold out")]
    SoldOut(InventoryItemUuid),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// One shopper's storefront session.
#[derive(Debug, Clone)]
pub struct Storefront {
    photos: Vec<Photo>,
    inventory: Vec<InventoryItem>,
    policy: StockPolicy,
    selected: Option<PhotoUuid>,
    cart: Cart,
}

impl Storefront {
    /// Start a session over a loaded catalog with an empty cart.
    pub fn new(
        photos: Vec<Photo>,
        inventory: Vec<InventoryItem>,
        policy: StockPolicy,
        currency: &'static Currency,
    ) -> Self {
        Self {
            photos,
            inventory,
            policy,
            selected: None,
            cart: Cart::new(currency),
        }
    }

    /// Photos in the order they were loaded (newest first from the store).
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Inventory on offer for `photo_id`.
    pub fn availability(&self, photo_id: PhotoUuid) -> Availability<'_> {
        lookup(&self.inventory, photo_id, self.policy)
    }

    /// Make `photo_id` the photo whose prints are being browsed.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::UnknownPhoto`]: no such photo was loaded.
    /// - [`StorefrontError::OutOfStock`]: the photo has no stock under the session policy.
    pub fn select_photo(&mut self, photo_id: PhotoUuid) -> Result<&Photo, StorefrontError> {
        let photo = self
            .photos
            .iter()
            .find(|photo| photo.id == photo_id)
            .ok_or(StorefrontError::UnknownPhoto(photo_id))?;

        if !lookup(&self.inventory, photo_id, self.policy).has_stock {
            return Err(StorefrontError::OutOfStock(photo_id));
        }

        self.selected = Some(photo_id);

        Ok(photo)
    }

    /// The photo currently selected, if any.
    pub fn selected_photo(&self) -> Option<&Photo> {
        let selected = self.selected?;

        self.photos.iter().find(|photo| photo.id == selected)
    }

    /// Add `quantity` prints of an inventory item of the selected photo.
    /// Returns the index of the new cart line.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::NoPhotoSelected`]: call [`Storefront::select_photo`] first.
    /// - [`StorefrontError::UnknownInventoryItem`]: the item is not a print of the selected photo.
    /// - [`StorefrontError::SoldOut`]: the item has no quantity left. The requested quantity is
    ///   not checked against what remains.
    /// - [`StorefrontError::Cart`]: the cart rejected the line.
    pub fn add_to_cart(
        &mut self,
        inventory_id: InventoryItemUuid,
        quantity: u32,
    ) -> Result<usize, StorefrontError> {
        let selected = self.selected.ok_or(StorefrontError::NoPhotoSelected)?;

        let photo = self
            .photos
            .iter()
            .find(|photo| photo.id == selected)
            .ok_or(StorefrontError::NoPhotoSelected)?;

        let item = self
            .inventory
            .iter()
            .find(|item| item.id == inventory_id && item.photo_id == selected)
            .ok_or(StorefrontError::UnknownInventoryItem(inventory_id))?;

        if !item.is_purchasable() {
            return Err(StorefrontError::SoldOut(inventory_id));
        }

        Ok(self.cart.add_item(photo, item, quantity)?)
    }

    /// Remove the cart line at `index`; out of range is a no-op.
    pub fn remove_from_cart(&mut self, index: usize) -> Option<LineItem> {
        self.cart.remove_item(index)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}
