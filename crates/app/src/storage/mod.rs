//! Blob storage
//!
//! Object storage for uploaded images and videos. Catalog records keep only
//! the public URL of what was stored.

use async_trait::async_trait;
use atelier::media::{Bucket, MediaFile};
use mockall::automock;

pub mod errors;
pub mod rest;

pub use errors::StorageError;
pub use rest::RestBlobStore;

/// An object as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: Bucket,
    pub path: String,
    pub url: String,
}

#[automock]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `file` at `path` in `bucket`.
    async fn upload(
        &self,
        bucket: Bucket,
        path: String,
        file: MediaFile,
    ) -> Result<StoredObject, StorageError>;

    /// Remove the object at `path`.
    async fn remove(&self, bucket: Bucket, path: String) -> Result<(), StorageError>;

    /// Public URL of the object at `path`.
    fn public_url(&self, bucket: Bucket, path: &str) -> String;
}
