//! Shop
//!
//! Opens a storefront session from the hosted catalog.

use std::sync::Arc;

use atelier::{availability::StockPolicy, storefront::Storefront};
use rusty_money::iso;
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    inventory::{InventoryService, InventoryServiceError},
    photos::{PhotosService, PhotosServiceError},
    settings::{SettingsService, SettingsServiceError},
};

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("print ordering is currently disabled")]
    OrderingDisabled,

    #[error("failed to load photos")]
    Photos(#[source] PhotosServiceError),

    #[error("failed to load inventory")]
    Inventory(#[source] InventoryServiceError),

    #[error("failed to load site settings")]
    Settings(#[source] SettingsServiceError),
}

#[derive(Clone)]
pub struct Shop {
    photos: Arc<dyn PhotosService>,
    inventory: Arc<dyn InventoryService>,
    settings: Arc<dyn SettingsService>,
    policy: StockPolicy,
}

impl Shop {
    #[must_use]
    pub fn new(
        photos: Arc<dyn PhotosService>,
        inventory: Arc<dyn InventoryService>,
        settings: Arc<dyn SettingsService>,
        policy: StockPolicy,
    ) -> Self {
        Self {
            photos,
            inventory,
            settings,
            policy,
        }
    }

    /// Load photos, inventory and feature flags concurrently and start a
    /// session with an empty USD cart.
    ///
    /// # Errors
    ///
    /// - [`ShopError::OrderingDisabled`]: the `photography_order_enabled` flag is off.
    /// - Any load failure, wrapped by source.
    pub async fn open(&self) -> Result<Storefront, ShopError> {
        let (flags, photos, inventory) = tokio::try_join!(
            async { self.settings.feature_flags().await.map_err(ShopError::Settings) },
            async { self.photos.list_photos().await.map_err(ShopError::Photos) },
            async {
                self.inventory
                    .list_inventory()
                    .await
                    .map_err(ShopError::Inventory)
            },
        )?;

        if !flags.photography_order_enabled {
            return Err(ShopError::OrderingDisabled);
        }

        debug!(
            photos = photos.len(),
            inventory = inventory.len(),
            policy = ?self.policy,
            "storefront opened"
        );

        Ok(Storefront::new(photos, inventory, self.policy, iso::USD))
    }
}
