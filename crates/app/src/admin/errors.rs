//! Admin console errors.

use atelier::admin::{Tab, TransitionError};
use thiserror::Error;

use crate::{
    domain::{
        games::GamesServiceError, inventory::InventoryServiceError, models::ModelsServiceError,
        orders::OrdersServiceError, photos::PhotosServiceError, settings::SettingsServiceError,
    },
    uploads::UploadError,
};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("incorrect password")]
    IncorrectPassword,

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("a {form} form cannot be submitted on the {tab} tab")]
    FormMismatch { tab: Tab, form: &'static str },

    #[error("order {0} is already completed")]
    OrderCompleted(String),

    #[error(transparent)]
    Photos(#[from] PhotosServiceError),

    #[error(transparent)]
    Models(#[from] ModelsServiceError),

    #[error(transparent)]
    Games(#[from] GamesServiceError),

    #[error(transparent)]
    Inventory(#[from] InventoryServiceError),

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),

    #[error(transparent)]
    Settings(#[from] SettingsServiceError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}
