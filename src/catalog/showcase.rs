//! Showcase records for the rigging and game development sections.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{catalog::lenient, uuids::TypedUuid};

/// Live2D Model UUID
pub type Live2dModelUuid = TypedUuid<Live2dModel>;

/// A rigged Live2D model shown in the rigging showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Live2dModel {
    pub id: Live2dModelUuid,
    pub title: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub client: String,

    /// Rig kind, e.g. "Full Body" or "Half Body".
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub image_url: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub video_url: String,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub features: Vec<String>,

    #[serde(default)]
    pub rating: u8,

    #[serde(default, deserialize_with = "lenient::text")]
    pub year: String,

    pub created_at: Timestamp,
}

/// Editable Live2D model fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelData {
    pub title: String,
    pub client: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub image_url: String,
    pub video_url: String,
    pub features: Vec<String>,
    pub rating: u8,
    pub year: String,
}

impl From<&Live2dModel> for ModelData {
    fn from(model: &Live2dModel) -> Self {
        Self {
            title: model.title.clone(),
            client: model.client.clone(),
            kind: model.kind.clone(),
            image_url: model.image_url.clone(),
            video_url: model.video_url.clone(),
            features: model.features.clone(),
            rating: model.rating,
            year: model.year.clone(),
        }
    }
}

/// Game UUID
pub type GameUuid = TypedUuid<Game>;

/// A game shown in the game development showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameUuid,
    pub title: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub genre: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub image_url: String,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tech: Vec<String>,

    /// Free-form development status, e.g. "In Development" or "Released".
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub year: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub players: String,

    /// Hidden from the public showcase when false.
    #[serde(default)]
    pub is_enabled: bool,

    pub created_at: Timestamp,
}

/// Editable game fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub title: String,
    pub genre: String,
    pub description: String,
    pub image_url: String,
    pub tech: Vec<String>,
    pub status: String,
    pub year: String,
    pub players: String,
    pub is_enabled: bool,
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: String::new(),
            description: String::new(),
            image_url: String::new(),
            tech: Vec::new(),
            status: "In Development".to_string(),
            year: Timestamp::now().to_zoned(jiff::tz::TimeZone::UTC).year().to_string(),
            players: "Single Player".to_string(),
            is_enabled: true,
        }
    }
}

impl From<&Game> for GameData {
    fn from(game: &Game) -> Self {
        Self {
            title: game.title.clone(),
            genre: game.genre.clone(),
            description: game.description.clone(),
            image_url: game.image_url.clone(),
            tech: game.tech.clone(),
            status: game.status.clone(),
            year: game.year.clone(),
            players: game.players.clone(),
            is_enabled: game.is_enabled,
        }
    }
}
