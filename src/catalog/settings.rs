//! Site Settings

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{catalog::lenient, uuids::TypedUuid};

/// Setting UUID
pub type SettingUuid = TypedUuid<Setting>;

/// A key/value site setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub id: SettingUuid,
    pub key: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub value: String,

    pub updated_at: Timestamp,
}

/// Setting keys the site reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    PhotographyOrderEnabled,
    PhotographyContactEnabled,
    GamedevEnabled,
    AdminPassword,
}

impl SettingKey {
    /// Key as stored in the `key` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PhotographyOrderEnabled => "photography_order_enabled",
            Self::PhotographyContactEnabled => "photography_contact_enabled",
            Self::GamedevEnabled => "gamedev_enabled",
            Self::AdminPassword => "admin_password",
        }
    }
}

impl Display for SettingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Feature toggles derived from settings. A flag is on only when its value
/// is exactly `"true"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub photography_order_enabled: bool,
    pub photography_contact_enabled: bool,
    pub gamedev_enabled: bool,
}

impl FeatureFlags {
    /// Derive flags from a list of settings; missing keys are off.
    pub fn from_settings(settings: &[Setting]) -> Self {
        let enabled = |key: SettingKey| {
            settings
                .iter()
                .any(|setting| setting.key == key.as_str() && setting.value == "true")
        };

        Self {
            photography_order_enabled: enabled(SettingKey::PhotographyOrderEnabled),
            photography_contact_enabled: enabled(SettingKey::PhotographyContactEnabled),
            gamedev_enabled: enabled(SettingKey::GamedevEnabled),
        }
    }
}
