//! Photos service.

use std::sync::Arc;

use async_trait::async_trait;
use atelier::catalog::{Photo, PhotoData, PhotoUuid};
use mockall::automock;

use crate::{
    domain::photos::errors::PhotosServiceError,
    store::{
        CatalogStore, Direction, Filter, Query, Table,
        rows::{decode, decode_all, decode_first, encode},
    },
};

#[derive(Clone)]
pub struct StorePhotosService {
    store: Arc<dyn CatalogStore>,
}

impl StorePhotosService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PhotosService for StorePhotosService {
    async fn list_photos(&self) -> Result<Vec<Photo>, PhotosServiceError> {
        let rows = self
            .store
            .select(
                Table::Photos,
                Query::new().order_by("created_at", Direction::Desc),
            )
            .await?;

        Ok(decode_all(rows)?)
    }

    async fn get_photo(&self, photo: PhotoUuid) -> Result<Photo, PhotosServiceError> {
        let rows = self
            .store
            .select(Table::Photos, Query::new().eq("id", photo).limit(1))
            .await?;

        Ok(decode_first(rows)?)
    }

    async fn create_photo(&self, photo: PhotoData) -> Result<Photo, PhotosServiceError> {
        let row = self.store.insert(Table::Photos, encode(&photo)?).await?;

        Ok(decode(row)?)
    }

    async fn update_photo(
        &self,
        photo: PhotoUuid,
        data: PhotoData,
    ) -> Result<Photo, PhotosServiceError> {
        let rows = self
            .store
            .update(Table::Photos, Filter::eq("id", photo), encode(&data)?)
            .await?;

        Ok(decode_first(rows)?)
    }

    async fn delete_photo(&self, photo: PhotoUuid) -> Result<(), PhotosServiceError> {
        let deleted = self
            .store
            .delete(Table::Photos, Filter::eq("id", photo))
            .await?;

        if deleted == 0 {
            return Err(PhotosServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PhotosService: Send + Sync {
    /// Retrieves all photos, newest first.
    async fn list_photos(&self) -> Result<Vec<Photo>, PhotosServiceError>;

    /// Retrieve a single photo.
    async fn get_photo(&self, photo: PhotoUuid) -> Result<Photo, PhotosServiceError>;

    /// Creates a photo record.
    async fn create_photo(&self, photo: PhotoData) -> Result<Photo, PhotosServiceError>;

    /// Replaces the editable fields of a photo.
    async fn update_photo(
        &self,
        photo: PhotoUuid,
        data: PhotoData,
    ) -> Result<Photo, PhotosServiceError>;

    /// Deletes a photo.
    async fn delete_photo(&self, photo: PhotoUuid) -> Result<(), PhotosServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        store::MockCatalogStore,
        test::{photo_row, rejected},
    };

    use super::*;

    fn service(store: MockCatalogStore) -> StorePhotosService {
        StorePhotosService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn list_photos_orders_newest_first() -> TestResult {
        let mut store = MockCatalogStore::new();
        let id = PhotoUuid::new();

        store
            .expect_select()
            .once()
            .withf(|table, query| {
                *table == Table::Photos
                    && query.to_pairs().contains(&("order".to_string(), "created_at.desc".to_string()))
            })
            .return_once(move |_, _| Ok(vec![photo_row(id, "Harbour Fog")]));

        let photos = service(store).list_photos().await?;

        assert_eq!(photos.len(), 1);
        assert_eq!(photos.first().map(|photo| photo.id), Some(id));

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_photo_returns_not_found() {
        let mut store = MockCatalogStore::new();

        store
            .expect_select()
            .once()
            .return_once(|_, _| Ok(Vec::new()));

        let result = service(store).get_photo(PhotoUuid::new()).await;

        assert!(
            matches!(result, Err(PhotosServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_photo_sends_editable_fields() -> TestResult {
        let mut store = MockCatalogStore::new();
        let id = PhotoUuid::new();

        store
            .expect_insert()
            .once()
            .withf(|table, row| {
                *table == Table::Photos
                    && row["title"] == "Harbour Fog"
                    && row.get("id").is_none()
            })
            .return_once(move |_, _| Ok(photo_row(id, "Harbour Fog")));

        let photo = service(store)
            .create_photo(PhotoData {
                title: "Harbour Fog".to_string(),
                image_url: "https://cdn.example/harbour.jpg".to_string(),
                ..PhotoData::default()
            })
            .await?;

        assert_eq!(photo.id, id);

        Ok(())
    }

    #[tokio::test]
    async fn update_photo_filters_by_id() -> TestResult {
        let mut store = MockCatalogStore::new();
        let id = PhotoUuid::new();

        store
            .expect_update()
            .once()
            .withf(move |table, filter, _| {
                *table == Table::Photos && *filter == Filter::eq("id", id)
            })
            .return_once(move |_, _, _| Ok(vec![photo_row(id, "Renamed")]));

        let photo = service(store)
            .update_photo(id, PhotoData::default())
            .await?;

        assert_eq!(photo.title, "Renamed");

        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_photo_returns_not_found() {
        let mut store = MockCatalogStore::new();

        store.expect_delete().once().return_once(|_, _| Ok(0));

        let result = service(store).delete_photo(PhotoUuid::new()).await;

        assert!(
            matches!(result, Err(PhotosServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_referenced_photo_is_invalid_reference() {
        let mut store = MockCatalogStore::new();

        store
            .expect_delete()
            .once()
            .return_once(|_, _| Err(rejected("23503")));

        let result = service(store).delete_photo(PhotoUuid::new()).await;

        assert!(
            matches!(result, Err(PhotosServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }
}
