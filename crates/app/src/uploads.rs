//! Media uploads
//!
//! Checks a file against its bucket's rules, stores it under a fresh object
//! name and hands back the public URL to save on the record.

use std::sync::Arc;

use atelier::media::{self, Bucket, MediaError, MediaFile};
use jiff::Timestamp;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::storage::{BlobStore, StorageError, StoredObject};

const OBJECT_TOKEN_LEN: usize = 7;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Invalid(#[from] MediaError),

    #[error("upload failed")]
    Storage(#[source] StorageError),
}

#[derive(Clone)]
pub struct MediaUploader {
    blobs: Arc<dyn BlobStore>,
}

impl MediaUploader {
    #[must_use]
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// Validate and store `file` in `bucket`.
    ///
    /// # Errors
    ///
    /// - [`UploadError::Invalid`]: the file was refused before any upload.
    /// - [`UploadError::Storage`]: the blob store rejected the upload.
    pub async fn upload(&self, bucket: Bucket, file: MediaFile) -> Result<StoredObject, UploadError> {
        media::validate(bucket, &file)?;

        let token = media::random_token(&mut rand::thread_rng(), OBJECT_TOKEN_LEN);
        let path = media::object_name(&file, Timestamp::now().as_millisecond(), &token);
        let size = file.size();

        let stored = self
            .blobs
            .upload(bucket, path, file)
            .await
            .map_err(|error| {
                error!(%bucket, %error, "upload failed");

                UploadError::Storage(error)
            })?;

        info!(%bucket, path = %stored.path, size, "media uploaded");

        Ok(stored)
    }

    /// Remove the object behind `url` from `bucket`. URLs that do not point
    /// into the bucket, such as links to external hosts, are left alone.
    /// Returns whether an object was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the blob store rejects the removal.
    pub async fn discard(&self, bucket: Bucket, url: &str) -> Result<bool, StorageError> {
        let prefix = self.blobs.public_url(bucket, "");

        let Some(path) = url
            .strip_prefix(prefix.as_str())
            .filter(|path| !path.is_empty())
        else {
            debug!(%bucket, url, "media not held in storage; nothing to remove");

            return Ok(false);
        };

        self.blobs.remove(bucket, path.to_string()).await?;

        info!(%bucket, path, "media removed");

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::storage::MockBlobStore;

    use super::*;

    fn file(name: &str, content_type: &str, size: usize) -> MediaFile {
        MediaFile {
            file_name: name.to_string(),
            content_type: content_type.to_string(),
            bytes: vec![1; size],
        }
    }

    #[tokio::test]
    async fn valid_image_is_stored_under_generated_name() -> TestResult {
        let mut blobs = MockBlobStore::new();

        blobs
            .expect_upload()
            .once()
            .withf(|bucket, path, _| {
                let (millis, rest) = path.split_once('-').unwrap_or_default();

                *bucket == Bucket::Photos
                    && millis.parse::<i64>().is_ok()
                    && rest.len() == OBJECT_TOKEN_LEN + ".jpg".len()
                    && rest.ends_with(".jpg")
            })
            .returning(|bucket, path, _| {
                Ok(StoredObject {
                    bucket,
                    url: format!("https://cdn.example/{bucket}/{path}"),
                    path,
                })
            });

        let stored = MediaUploader::new(Arc::new(blobs))
            .upload(Bucket::Photos, file("harbour.jpg", "image/jpeg", 64))
            .await?;

        assert!(stored.url.starts_with("https://cdn.example/photos/"));

        Ok(())
    }

    #[tokio::test]
    async fn wrong_type_never_reaches_storage() {
        let mut blobs = MockBlobStore::new();

        blobs.expect_upload().never();

        let result = MediaUploader::new(Arc::new(blobs))
            .upload(Bucket::Live2dVideos, file("rig.png", "image/png", 64))
            .await;

        assert!(
            matches!(result, Err(UploadError::Invalid(MediaError::UnsupportedType { .. }))),
            "expected UnsupportedType, got {result:?}"
        );
    }

    #[tokio::test]
    async fn storage_rejection_is_reported() {
        let mut blobs = MockBlobStore::new();

        blobs.expect_upload().once().return_once(|_, _, _| {
            Err(StorageError::Rejected {
                status: 413,
                message: "Payload too large".to_string(),
            })
        });

        let result = MediaUploader::new(Arc::new(blobs))
            .upload(Bucket::Games, file("cover.webp", "image/webp", 64))
            .await;

        assert!(
            matches!(result, Err(UploadError::Storage(StorageError::Rejected { status: 413, .. }))),
            "expected Rejected, got {result:?}"
        );
    }

    fn public_urls(blobs: &mut MockBlobStore) {
        blobs
            .expect_public_url()
            .returning(|bucket, path| format!("https://abc.example.co/storage/v1/object/public/{bucket}/{path}"));
    }

    #[tokio::test]
    async fn discard_removes_object_behind_public_url() -> TestResult {
        let mut blobs = MockBlobStore::new();
        public_urls(&mut blobs);

        blobs
            .expect_remove()
            .once()
            .withf(|bucket, path| *bucket == Bucket::Photos && path == "1700000000000-abc1234.jpg")
            .return_once(|_, _| Ok(()));

        let removed = MediaUploader::new(Arc::new(blobs))
            .discard(
                Bucket::Photos,
                "https://abc.example.co/storage/v1/object/public/photos/1700000000000-abc1234.jpg",
            )
            .await?;

        assert!(removed);

        Ok(())
    }

    #[tokio::test]
    async fn discard_ignores_external_urls() -> TestResult {
        let mut blobs = MockBlobStore::new();
        public_urls(&mut blobs);

        blobs.expect_remove().never();

        let uploader = MediaUploader::new(Arc::new(blobs));

        assert!(!uploader.discard(Bucket::Games, "https://img.example/cover.png").await?);
        assert!(!uploader.discard(Bucket::Games, "").await?);

        Ok(())
    }
}
