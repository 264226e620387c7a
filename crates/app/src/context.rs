//! App Context

use std::{sync::Arc, time::Duration};

use atelier::availability::StockPolicy;
use thiserror::Error;

use crate::{
    admin::AdminGate,
    checkout::Checkout,
    config::HostedConfig,
    domain::{
        games::{GamesService, StoreGamesService},
        inquiries::{InquiriesService, StoreInquiriesService},
        inventory::{InventoryService, StoreInventoryService},
        models::{ModelsService, StoreModelsService},
        orders::{OrdersService, StoreOrdersService},
        photos::{PhotosService, StorePhotosService},
        settings::{SettingsService, StoreSettingsService},
    },
    hosted::{HostedProject, http_client},
    notifications::HttpInquiryRelay,
    shop::Shop,
    storage::{BlobStore, RestBlobStore},
    store::{CatalogStore, RestCatalogStore},
    uploads::MediaUploader,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub photos: Arc<dyn PhotosService>,
    pub models: Arc<dyn ModelsService>,
    pub games: Arc<dyn GamesService>,
    pub inventory: Arc<dyn InventoryService>,
    pub orders: Arc<dyn OrdersService>,
    pub settings: Arc<dyn SettingsService>,
    pub inquiries: Arc<dyn InquiriesService>,
    pub blobs: Arc<dyn BlobStore>,
    pub stock_policy: StockPolicy,
}

impl AppContext {
    /// Build application context against a hosted project.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: &HostedConfig, stock_policy: StockPolicy) -> Result<Self, AppInitError> {
        let http = http_client(Duration::from_secs(config.http_timeout_seconds))
            .map_err(AppInitError::HttpClient)?;

        let project = HostedProject::new(config.supabase_url.clone(), config.anon_key());

        let store: Arc<dyn CatalogStore> =
            Arc::new(RestCatalogStore::new(project.clone(), http.clone()));

        let relay = Arc::new(HttpInquiryRelay::new(
            project.clone(),
            http.clone(),
            config.inquiry_function.clone(),
        ));

        Ok(Self {
            photos: Arc::new(StorePhotosService::new(store.clone())),
            models: Arc::new(StoreModelsService::new(store.clone())),
            games: Arc::new(StoreGamesService::new(store.clone())),
            inventory: Arc::new(StoreInventoryService::new(store.clone())),
            orders: Arc::new(StoreOrdersService::new(store.clone())),
            settings: Arc::new(StoreSettingsService::new(store.clone())),
            inquiries: Arc::new(StoreInquiriesService::new(store, relay)),
            blobs: Arc::new(RestBlobStore::new(project, http)),
            stock_policy,
        })
    }

    #[must_use]
    pub fn shop(&self) -> Shop {
        Shop::new(
            self.photos.clone(),
            self.inventory.clone(),
            self.settings.clone(),
            self.stock_policy,
        )
    }

    #[must_use]
    pub fn checkout(&self) -> Checkout {
        Checkout::new(self.orders.clone())
    }

    #[must_use]
    pub fn uploader(&self) -> MediaUploader {
        MediaUploader::new(self.blobs.clone())
    }

    #[must_use]
    pub fn admin_gate(&self) -> AdminGate {
        AdminGate::new(self.clone())
    }
}
