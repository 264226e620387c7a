//! Settings service.

use std::sync::Arc;

use async_trait::async_trait;
use atelier::catalog::{FeatureFlags, Setting};
use jiff::Timestamp;
use mockall::automock;
use serde_json::json;

use crate::{
    domain::settings::errors::SettingsServiceError,
    store::{
        CatalogStore, Direction, Filter, Query, Table,
        rows::{decode, decode_all},
    },
};

#[derive(Clone)]
pub struct StoreSettingsService {
    store: Arc<dyn CatalogStore>,
}

impl StoreSettingsService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsService for StoreSettingsService {
    async fn list_settings(&self) -> Result<Vec<Setting>, SettingsServiceError> {
        let rows = self
            .store
            .select(
                Table::SiteSettings,
                Query::new().order_by("key", Direction::Asc),
            )
            .await?;

        Ok(decode_all(rows)?)
    }

    async fn get_setting(&self, key: String) -> Result<Option<Setting>, SettingsServiceError> {
        let rows = self
            .store
            .select(Table::SiteSettings, Query::new().eq("key", key).limit(1))
            .await?;

        Ok(rows.into_iter().next().map(decode).transpose()?)
    }

    async fn set_setting(
        &self,
        key: String,
        value: String,
        at: Timestamp,
    ) -> Result<Setting, SettingsServiceError> {
        let updated = self
            .store
            .update(
                Table::SiteSettings,
                Filter::eq("key", &key),
                json!({ "value": value, "updated_at": at }),
            )
            .await?;

        if let Some(row) = updated.into_iter().next() {
            return Ok(decode(row)?);
        }

        let row = self
            .store
            .insert(
                Table::SiteSettings,
                json!({ "key": key, "value": value, "updated_at": at }),
            )
            .await?;

        Ok(decode(row)?)
    }

    async fn feature_flags(&self) -> Result<FeatureFlags, SettingsServiceError> {
        Ok(FeatureFlags::from_settings(&self.list_settings().await?))
    }
}

#[automock]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Retrieves every setting, ordered by key.
    async fn list_settings(&self) -> Result<Vec<Setting>, SettingsServiceError>;

    /// Retrieve a setting by key, if it exists.
    async fn get_setting(&self, key: String) -> Result<Option<Setting>, SettingsServiceError>;

    /// Sets a setting's value, creating the setting when it does not exist yet.
    async fn set_setting(
        &self,
        key: String,
        value: String,
        at: Timestamp,
    ) -> Result<Setting, SettingsServiceError>;

    /// Feature toggles derived from the current settings.
    async fn feature_flags(&self) -> Result<FeatureFlags, SettingsServiceError>;
}

#[cfg(test)]
mod tests {
    use atelier::catalog::SettingKey;
    use testresult::TestResult;

    use crate::{store::MockCatalogStore, test::setting_row};

    use super::*;

    fn service(store: MockCatalogStore) -> StoreSettingsService {
        StoreSettingsService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn feature_flags_only_enable_literal_true() -> TestResult {
        let mut store = MockCatalogStore::new();

        store.expect_select().once().return_once(|_, _| {
            Ok(vec![
                setting_row("photography_order_enabled", "true"),
                setting_row("photography_contact_enabled", "TRUE"),
            ])
        });

        let flags = service(store).feature_flags().await?;

        assert!(flags.photography_order_enabled);
        assert!(!flags.photography_contact_enabled);
        assert!(!flags.gamedev_enabled);

        Ok(())
    }

    #[tokio::test]
    async fn missing_setting_is_none() -> TestResult {
        let mut store = MockCatalogStore::new();

        store
            .expect_select()
            .once()
            .withf(|_, query| query.filters() == [Filter::eq("key", "admin_password")])
            .return_once(|_, _| Ok(Vec::new()));

        let setting = service(store)
            .get_setting(SettingKey::AdminPassword.as_str().to_string())
            .await?;

        assert!(setting.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn set_existing_setting_updates_without_insert() -> TestResult {
        let mut store = MockCatalogStore::new();

        store
            .expect_update()
            .once()
            .withf(|table, filter, patch| {
                *table == Table::SiteSettings
                    && *filter == Filter::eq("key", "gamedev_enabled")
                    && patch["value"] == "true"
            })
            .return_once(|_, _, _| Ok(vec![setting_row("gamedev_enabled", "true")]));
        store.expect_insert().never();

        let setting = service(store)
            .set_setting(
                "gamedev_enabled".to_string(),
                "true".to_string(),
                Timestamp::now(),
            )
            .await?;

        assert_eq!(setting.value, "true");

        Ok(())
    }

    #[tokio::test]
    async fn set_new_setting_inserts_it() -> TestResult {
        let mut store = MockCatalogStore::new();

        store
            .expect_update()
            .once()
            .return_once(|_, _, _| Ok(Vec::new()));
        store
            .expect_insert()
            .once()
            .withf(|_, row| row["key"] == "gamedev_enabled")
            .return_once(|_, _| Ok(setting_row("gamedev_enabled", "false")));

        let setting = service(store)
            .set_setting(
                "gamedev_enabled".to_string(),
                "false".to_string(),
                Timestamp::now(),
            )
            .await?;

        assert_eq!(setting.key, "gamedev_enabled");

        Ok(())
    }
}
