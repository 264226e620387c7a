//! Admin record forms.

use atelier::{
    admin::Tab,
    catalog::{GameData, ModelData, NewInventoryItem, PhotoData},
};

/// The contents of a submitted create or edit form.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordForm {
    Photo(PhotoData),
    Model(ModelData),
    Game(GameData),
    Inventory(NewInventoryItem),
}

impl RecordForm {
    /// The tab this form belongs to.
    pub const fn tab(&self) -> Tab {
        match self {
            Self::Photo(_) => Tab::Photos,
            Self::Model(_) => Tab::Models,
            Self::Game(_) => Tab::Games,
            Self::Inventory(_) => Tab::Inventory,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Photo(_) => "photo",
            Self::Model(_) => "model",
            Self::Game(_) => "game",
            Self::Inventory(_) => "inventory",
        }
    }
}
