//! Photos

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{catalog::lenient, uuids::TypedUuid};

/// Photo UUID
pub type PhotoUuid = TypedUuid<Photo>;

/// A portfolio photograph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoUuid,
    pub title: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,

    pub image_url: String,
    pub created_at: Timestamp,
}

/// Editable photo fields, used for both inserts and updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoData {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
}

impl From<&Photo> for PhotoData {
    fn from(photo: &Photo) -> Self {
        Self {
            title: photo.title.clone(),
            description: photo.description.clone(),
            category: photo.category.clone(),
            image_url: photo.image_url.clone(),
        }
    }
}
