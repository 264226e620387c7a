//! REST blob store client.

use async_trait::async_trait;
use atelier::media::{Bucket, MediaFile};
use reqwest::{Client, RequestBuilder, header::CONTENT_TYPE};
use serde_json::json;
use tracing::{debug, error};

use crate::{
    hosted::HostedProject,
    storage::{BlobStore, StorageError, StoredObject},
};

const OBJECT_PATH: &str = "storage/v1/object";
const CACHE_CONTROL: &str = "max-age=3600";

/// [`BlobStore`] over the hosted project's storage interface.
#[derive(Debug, Clone)]
pub struct RestBlobStore {
    project: HostedProject,
    http: Client,
}

impl RestBlobStore {
    #[must_use]
    pub fn new(project: HostedProject, http: Client) -> Self {
        Self { project, http }
    }

    fn object_url(&self, bucket: Bucket, path: &str) -> String {
        self.project
            .endpoint(&format!("{OBJECT_PATH}/{bucket}/{path}"))
    }

    async fn send(&self, request: RequestBuilder) -> Result<(), StorageError> {
        let response = self
            .project
            .authorize(request)
            .send()
            .await
            .map_err(StorageError::Transport)?;

        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();

        error!(status = status.as_u16(), %message, "blob storage request rejected");

        Err(StorageError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl BlobStore for RestBlobStore {
    async fn upload(
        &self,
        bucket: Bucket,
        path: String,
        file: MediaFile,
    ) -> Result<StoredObject, StorageError> {
        debug!(%bucket, %path, size = file.size(), "uploading object");

        let request = self
            .http
            .post(self.object_url(bucket, &path))
            .header(CONTENT_TYPE, file.content_type)
            .header("cache-control", CACHE_CONTROL)
            .header("x-upsert", "false")
            .body(file.bytes);

        self.send(request).await?;

        Ok(StoredObject {
            bucket,
            url: self.public_url(bucket, &path),
            path,
        })
    }

    async fn remove(&self, bucket: Bucket, path: String) -> Result<(), StorageError> {
        debug!(%bucket, %path, "removing object");

        let request = self
            .http
            .delete(self.project.endpoint(&format!("{OBJECT_PATH}/{bucket}")))
            .json(&json!({ "prefixes": [path] }));

        self.send(request).await
    }

    fn public_url(&self, bucket: Bucket, path: &str) -> String {
        self.project
            .endpoint(&format!("{OBJECT_PATH}/public/{bucket}/{path}"))
    }
}
