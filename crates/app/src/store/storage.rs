//! Blob store client for uploaded files.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::store::StoreError;

/// Operations the upload pipeline needs from a remote blob store.
#[automock]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `object_name` and return a publicly resolvable
    /// URL.
    async fn store(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError>;
}

/// HTTP client for a Firebase-Storage-style bucket upload API.
#[derive(Debug, Clone)]
pub struct FirebaseStorageClient {
    bucket: String,
    http: Client,
}

impl FirebaseStorageClient {
    /// Create a new client for the given bucket.
    #[must_use]
    pub fn new(bucket: String) -> Self {
        Self {
            bucket,
            http: Client::new(),
        }
    }

    fn upload_url(&self, object_name: &str) -> String {
        format!(
            "https://firebasestorage.googleapis.com/v0/b/{}/o?name=uploads%2F{object_name}",
            self.bucket
        )
    }

    fn download_url(&self, object_name: &str) -> String {
        format!(
            "https://firebasestorage.googleapis.com/v0/b/{}/o/uploads%2F{object_name}?alt=media",
            self.bucket
        )
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    name: String,
}

#[async_trait]
impl BlobStore for FirebaseStorageClient {
    async fn store(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        let url = self.upload_url(object_name);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StoreError::UnexpectedResponse(format!(
                "upload of {object_name} failed with status {status}: {text}"
            )));
        }

        // The response names the stored object; the download URL is derived
        // from the name we chose, so only decode to confirm the shape.
        let _parsed: UploadResponse = response.json().await?;

        Ok(self.download_url(object_name))
    }
}
