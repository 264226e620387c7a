//! Admin console driver.

use atelier::{
    admin::{FormMode, PanelState, Tab},
    catalog::{
        Game, GameUuid, InventoryItem, InventoryItemUuid, Live2dModel, Live2dModelUuid, Photo,
        PhotoUuid, Setting,
    },
    media::{Bucket, MediaFile},
    orders::{Order, OrderStatus, OrderUuid},
};
use jiff::Timestamp;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    admin::{AdminError, RecordForm},
    context::AppContext,
    storage::StoredObject,
    uploads::MediaUploader,
};

/// Records shown on the current tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Photos(Vec<Photo>),
    Models(Vec<Live2dModel>),
    Games(Vec<Game>),
    Inventory(Vec<InventoryItem>),
    Orders(Vec<Order>),
    Settings(Vec<Setting>),
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Self::Photos(records) => records.len(),
            Self::Models(records) => records.len(),
            Self::Games(records) => records.len(),
            Self::Inventory(records) => records.len(),
            Self::Orders(records) => records.len(),
            Self::Settings(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An authenticated admin session. Obtained from [`crate::admin::AdminGate::login`].
pub struct AdminConsole {
    ctx: AppContext,
    uploader: MediaUploader,
    state: PanelState,
    listing: Option<Listing>,
}

impl AdminConsole {
    pub(crate) fn new(ctx: AppContext) -> Self {
        Self {
            uploader: MediaUploader::new(ctx.blobs.clone()),
            ctx,
            state: PanelState::Idle,
            listing: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Records loaded for the current tab.
    pub fn listing(&self) -> Option<&Listing> {
        self.listing.as_ref()
    }

    /// Switch to `tab` and load its records.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Transition`] when a form or confirmation is open,
    /// or a service error when loading fails.
    pub async fn open_tab(&mut self, tab: Tab) -> Result<&Listing, AdminError> {
        self.state = self.state.select_tab(tab)?;
        self.load().await
    }

    /// Reload the records on screen.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Transition`] unless a list is shown, or a service
    /// error when loading fails.
    pub async fn refresh(&mut self) -> Result<&Listing, AdminError> {
        self.state = self.state.refresh()?;
        self.load().await
    }

    /// Open an empty form for a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Transition`] when the tab cannot create records.
    pub fn open_create(&mut self) -> Result<(), AdminError> {
        self.state = self.state.open_create()?;

        Ok(())
    }

    /// Open the edit form for record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Transition`] when the tab cannot edit records.
    pub fn open_edit(&mut self, id: Uuid) -> Result<(), AdminError> {
        self.state = self.state.open_edit(id)?;

        Ok(())
    }

    /// Close the form without saving.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Transition`] unless a form is open.
    pub fn cancel_form(&mut self) -> Result<(), AdminError> {
        self.state = self.state.cancel_form()?;

        Ok(())
    }

    /// Save the open form: insert when creating, update by id when editing.
    /// The list is reloaded afterwards. On failure the form stays open.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Transition`]: no form is open.
    /// - [`AdminError::FormMismatch`]: `form` belongs to another tab.
    /// - A service error when the write or the reload fails.
    pub async fn submit(&mut self, form: RecordForm) -> Result<&Listing, AdminError> {
        let (next, mode) = self.state.form_submitted()?;
        let tab = next.loading_tab()?;

        if form.tab() != tab {
            return Err(AdminError::FormMismatch {
                tab,
                form: form.name(),
            });
        }

        self.save(form, mode).await?;

        info!(%tab, ?mode, "admin form saved");

        self.state = next;
        self.load().await
    }

    async fn save(&self, form: RecordForm, mode: FormMode) -> Result<(), AdminError> {
        match (form, mode) {
            (RecordForm::Photo(data), FormMode::Create) => {
                self.ctx.photos.create_photo(data).await?;
            }
            (RecordForm::Photo(data), FormMode::Edit(id)) => {
                self.ctx
                    .photos
                    .update_photo(PhotoUuid::from_uuid(id), data)
                    .await?;
            }
            (RecordForm::Model(data), FormMode::Create) => {
                self.ctx.models.create_model(data).await?;
            }
            (RecordForm::Model(data), FormMode::Edit(id)) => {
                self.ctx
                    .models
                    .update_model(Live2dModelUuid::from_uuid(id), data)
                    .await?;
            }
            (RecordForm::Game(data), FormMode::Create) => {
                self.ctx.games.create_game(data).await?;
            }
            (RecordForm::Game(data), FormMode::Edit(id)) => {
                self.ctx
                    .games
                    .update_game(GameUuid::from_uuid(id), data)
                    .await?;
            }
            (RecordForm::Inventory(item), FormMode::Create) => {
                self.ctx.inventory.create_item(item).await?;
            }
            (form @ RecordForm::Inventory(_), FormMode::Edit(_)) => {
                return Err(AdminError::FormMismatch {
                    tab: Tab::Inventory,
                    form: form.name(),
                });
            }
        }

        Ok(())
    }

    /// Ask to delete record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Transition`] when the tab cannot delete records.
    pub fn request_delete(&mut self, id: Uuid) -> Result<(), AdminError> {
        self.state = self.state.request_delete(id)?;

        Ok(())
    }

    /// Back out of a pending delete.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Transition`] unless a delete is pending.
    pub fn cancel_delete(&mut self) -> Result<(), AdminError> {
        self.state = self.state.cancel_delete()?;

        Ok(())
    }

    /// Delete the record awaiting confirmation and reload the list. When the
    /// delete fails the list is shown again unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Transition`] unless a delete is pending, or a
    /// service error when the delete or reload fails.
    pub async fn confirm_delete(&mut self) -> Result<&Listing, AdminError> {
        let (next, id) = self.state.confirm_delete()?;
        let tab = next.loading_tab()?;
        let media = self.stored_media(id);

        if let Err(error) = self.delete(tab, id).await {
            warn!(%tab, %id, %error, "admin delete failed");
            self.state = self.state.cancel_delete()?;

            return Err(error);
        }

        info!(%tab, %id, "admin record deleted");

        for (bucket, url) in media {
            if let Err(error) = self.uploader.discard(bucket, &url).await {
                warn!(%tab, %id, %bucket, %error, "record deleted but its media was not removed");
            }
        }

        self.state = next;
        self.load().await
    }

    /// Uploaded files referenced by listed record `id`.
    fn stored_media(&self, id: Uuid) -> Vec<(Bucket, String)> {
        let media = match self.listing.as_ref() {
            Some(Listing::Photos(photos)) => photos
                .iter()
                .find(|photo| photo.id.into_uuid() == id)
                .map(|photo| vec![(Bucket::Photos, photo.image_url.clone())]),
            Some(Listing::Models(models)) => models
                .iter()
                .find(|model| model.id.into_uuid() == id)
                .map(|model| {
                    vec![
                        (Bucket::Live2dImages, model.image_url.clone()),
                        (Bucket::Live2dVideos, model.video_url.clone()),
                    ]
                }),
            Some(Listing::Games(games)) => games
                .iter()
                .find(|game| game.id.into_uuid() == id)
                .map(|game| vec![(Bucket::Games, game.image_url.clone())]),
            _ => None,
        };

        media
            .unwrap_or_default()
            .into_iter()
            .filter(|(_, url)| !url.is_empty())
            .collect()
    }

    async fn delete(&self, tab: Tab, id: Uuid) -> Result<(), AdminError> {
        match tab {
            Tab::Photos => self.ctx.photos.delete_photo(PhotoUuid::from_uuid(id)).await?,
            Tab::Models => {
                self.ctx
                    .models
                    .delete_model(Live2dModelUuid::from_uuid(id))
                    .await?;
            }
            Tab::Games => self.ctx.games.delete_game(GameUuid::from_uuid(id)).await?,
            Tab::Inventory => {
                self.ctx
                    .inventory
                    .delete_item(InventoryItemUuid::from_uuid(id))
                    .await?;
            }
            Tab::Orders | Tab::Settings => {}
        }

        Ok(())
    }

    /// Move an order to the next status.
    ///
    /// # Errors
    ///
    /// - [`AdminError::OrderCompleted`]: the order has no further status.
    /// - [`AdminError::Orders`]: the order could not be read or updated.
    pub async fn advance_order(&mut self, order: OrderUuid) -> Result<Order, AdminError> {
        let current = self.ctx.orders.get_order(order).await?;

        let Some(next) = current.status.next() else {
            return Err(AdminError::OrderCompleted(current.order_number.to_string()));
        };

        self.set_order_status(order, next).await
    }

    /// Set an order's status directly.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Orders`] when the update fails.
    pub async fn set_order_status(
        &mut self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, AdminError> {
        let updated = self
            .ctx
            .orders
            .update_status(order, status, Timestamp::now())
            .await?;

        info!(order_number = %updated.order_number, %status, "order status updated");

        if let Some(Listing::Orders(orders)) = self.listing.as_mut() {
            if let Some(slot) = orders.iter_mut().find(|listed| listed.id == updated.id) {
                *slot = updated.clone();
            }
        }

        Ok(updated)
    }

    /// Change a site setting.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Settings`] when the write fails.
    pub async fn update_setting(&mut self, key: &str, value: &str) -> Result<Setting, AdminError> {
        let setting = self
            .ctx
            .settings
            .set_setting(key.to_string(), value.to_string(), Timestamp::now())
            .await?;

        info!(key, "setting updated");

        if let Some(Listing::Settings(settings)) = self.listing.as_mut() {
            match settings.iter_mut().find(|listed| listed.key == setting.key) {
                Some(slot) => *slot = setting.clone(),
                None => settings.push(setting.clone()),
            }
        }

        Ok(setting)
    }

    /// Upload a file for use in a record form.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Upload`] when the file is refused or the upload fails.
    pub async fn upload(&self, bucket: Bucket, file: MediaFile) -> Result<StoredObject, AdminError> {
        Ok(self.uploader.upload(bucket, file).await?)
    }

    async fn load(&mut self) -> Result<&Listing, AdminError> {
        let tab = self.state.loading_tab()?;

        let listing = match self.fetch(tab).await {
            Ok(listing) => listing,
            Err(error) => {
                warn!(%tab, %error, "admin list failed to load");
                self.state = self.state.close();
                self.listing = None;

                return Err(error);
            }
        };

        self.state = self.state.finish_loading()?;

        Ok(self.listing.insert(listing))
    }

    async fn fetch(&self, tab: Tab) -> Result<Listing, AdminError> {
        Ok(match tab {
            Tab::Photos => Listing::Photos(self.ctx.photos.list_photos().await?),
            Tab::Models => Listing::Models(self.ctx.models.list_models().await?),
            Tab::Games => Listing::Games(self.ctx.games.list_games().await?),
            Tab::Inventory => Listing::Inventory(self.ctx.inventory.list_inventory().await?),
            Tab::Orders => Listing::Orders(self.ctx.orders.list_orders().await?),
            Tab::Settings => Listing::Settings(self.ctx.settings.list_settings().await?),
        })
    }
}
