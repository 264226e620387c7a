//! Inventory service.

use std::sync::Arc;

use async_trait::async_trait;
use atelier::catalog::{InventoryItem, InventoryItemUuid, NewInventoryItem, PhotoUuid};
use mockall::automock;

use crate::{
    domain::inventory::errors::InventoryServiceError,
    store::{
        CatalogStore, Direction, Filter, Query, Table,
        rows::{decode, decode_all, encode},
    },
};

#[derive(Clone)]
pub struct StoreInventoryService {
    store: Arc<dyn CatalogStore>,
}

impl StoreInventoryService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InventoryService for StoreInventoryService {
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, InventoryServiceError> {
        let rows = self
            .store
            .select(
                Table::PhotoInventory,
                Query::new().order_by("created_at", Direction::Desc),
            )
            .await?;

        Ok(decode_all(rows)?)
    }

    async fn list_for_photo(
        &self,
        photo: PhotoUuid,
    ) -> Result<Vec<InventoryItem>, InventoryServiceError> {
        let rows = self
            .store
            .select(
                Table::PhotoInventory,
                Query::new()
                    .eq("photo_id", photo)
                    .order_by("created_at", Direction::Desc),
            )
            .await?;

        Ok(decode_all(rows)?)
    }

    async fn create_item(
        &self,
        item: NewInventoryItem,
    ) -> Result<InventoryItem, InventoryServiceError> {
        if item.price.is_sign_negative() {
            return Err(InventoryServiceError::InvalidData);
        }

        let row = self
            .store
            .insert(Table::PhotoInventory, encode(&item)?)
            .await?;

        Ok(decode(row)?)
    }

    async fn delete_item(&self, item: InventoryItemUuid) -> Result<(), InventoryServiceError> {
        let deleted = self
            .store
            .delete(Table::PhotoInventory, Filter::eq("id", item))
            .await?;

        if deleted == 0 {
            return Err(InventoryServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Retrieves every inventory item, newest first.
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, InventoryServiceError>;

    /// Retrieves the inventory items of one photo.
    async fn list_for_photo(
        &self,
        photo: PhotoUuid,
    ) -> Result<Vec<InventoryItem>, InventoryServiceError>;

    /// Creates an inventory item; negative prices are refused.
    async fn create_item(
        &self,
        item: NewInventoryItem,
    ) -> Result<InventoryItem, InventoryServiceError>;

    /// Deletes an inventory item.
    async fn delete_item(&self, item: InventoryItemUuid) -> Result<(), InventoryServiceError>;
}
