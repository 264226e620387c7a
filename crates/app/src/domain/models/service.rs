//! Live2D models service.

use std::sync::Arc;

use async_trait::async_trait;
use atelier::catalog::{Live2dModel, Live2dModelUuid, ModelData};
use mockall::automock;

use crate::{
    domain::models::errors::ModelsServiceError,
    store::{
        CatalogStore, Direction, Filter, Query, Table,
        rows::{decode, decode_all, decode_first, encode},
    },
};

#[derive(Clone)]
pub struct StoreModelsService {
    store: Arc<dyn CatalogStore>,
}

impl StoreModelsService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ModelsService for StoreModelsService {
    async fn list_models(&self) -> Result<Vec<Live2dModel>, ModelsServiceError> {
        let rows = self
            .store
            .select(
                Table::Live2dModels,
                Query::new().order_by("created_at", Direction::Desc),
            )
            .await?;

        Ok(decode_all(rows)?)
    }

    async fn create_model(&self, model: ModelData) -> Result<Live2dModel, ModelsServiceError> {
        if !(1..=5).contains(&model.rating) {
            return Err(ModelsServiceError::InvalidData);
        }

        let row = self
            .store
            .insert(Table::Live2dModels, encode(&model)?)
            .await?;

        Ok(decode(row)?)
    }

    async fn update_model(
        &self,
        model: Live2dModelUuid,
        data: ModelData,
    ) -> Result<Live2dModel, ModelsServiceError> {
        if !(1..=5).contains(&data.rating) {
            return Err(ModelsServiceError::InvalidData);
        }

        let rows = self
            .store
            .update(Table::Live2dModels, Filter::eq("id", model), encode(&data)?)
            .await?;

        Ok(decode_first(rows)?)
    }

    async fn delete_model(&self, model: Live2dModelUuid) -> Result<(), ModelsServiceError> {
        let deleted = self
            .store
            .delete(Table::Live2dModels, Filter::eq("id", model))
            .await?;

        if deleted == 0 {
            return Err(ModelsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ModelsService: Send + Sync {
    /// Retrieves all models, newest first.
    async fn list_models(&self) -> Result<Vec<Live2dModel>, ModelsServiceError>;

    /// Creates a model; the rating must be between 1 and 5.
    async fn create_model(&self, model: ModelData) -> Result<Live2dModel, ModelsServiceError>;

    /// Replaces the editable fields of a model.
    async fn update_model(
        &self,
        model: Live2dModelUuid,
        data: ModelData,
    ) -> Result<Live2dModel, ModelsServiceError>;

    /// Deletes a model.
    async fn delete_model(&self, model: Live2dModelUuid) -> Result<(), ModelsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{store::MockCatalogStore, test::model_row};

    use super::*;

    fn service(store: MockCatalogStore) -> StoreModelsService {
        StoreModelsService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn list_models_normalises_feature_text() -> TestResult {
        let mut store = MockCatalogStore::new();
        let id = Live2dModelUuid::new();

        store
            .expect_select()
            .once()
            .return_once(move |_, _| Ok(vec![model_row(id, "Kite")]));

        let models = service(store).list_models().await?;
        let model = models.first().ok_or("no model")?;

        assert_eq!(model.features, ["Face tracking", "Physics"]);
        assert_eq!(model.kind, "VTuber");
        assert!(model.video_url.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_model_sends_type_and_feature_list() -> TestResult {
        let mut store = MockCatalogStore::new();
        let id = Live2dModelUuid::new();

        store
            .expect_insert()
            .once()
            .withf(|table, row| {
                *table == Table::Live2dModels
                    && row["type"] == "VTuber"
                    && row["features"] == serde_json::json!(["Face tracking", "Physics"])
            })
            .return_once(move |_, _| Ok(model_row(id, "Kite")));

        let model = service(store)
            .create_model(ModelData {
                title: "Kite".to_string(),
                kind: "VTuber".to_string(),
                features: vec!["Face tracking".to_string(), "Physics".to_string()],
                rating: 5,
                ..ModelData::default()
            })
            .await?;

        assert_eq!(model.id, id);

        Ok(())
    }

    #[tokio::test]
    async fn rating_out_of_range_is_invalid() {
        let mut store = MockCatalogStore::new();

        store.expect_insert().never();

        let result = service(store)
            .create_model(ModelData {
                rating: 6,
                ..ModelData::default()
            })
            .await;

        assert!(
            matches!(result, Err(ModelsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }
}
