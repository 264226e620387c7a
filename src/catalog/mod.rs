//! Catalog records as stored in the hosted catalog store.
//!
//! Every struct here mirrors a table row field for field; the serde names
//! are the wire contract with the existing store and must not change.

pub mod inquiries;
pub mod inventory;
pub mod lenient;
pub mod photos;
pub mod settings;
pub mod showcase;

pub use inquiries::{
    Inquiry, InquirySection, InquiryUuid, Live2dDetails, NewInquiry, PhotographyDetails,
};
pub use inventory::{InventoryItem, InventoryItemUuid, NewInventoryItem};
pub use photos::{Photo, PhotoData, PhotoUuid};
pub use settings::{FeatureFlags, Setting, SettingKey};
pub use showcase::{Game, GameData, GameUuid, Live2dModel, Live2dModelUuid, ModelData};
