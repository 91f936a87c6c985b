//! Remote blob-store upload backend.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    store::BlobStore,
    uploads::{
        pipeline::{generate_filename, IncomingFile, UploadBackend, UploadError, UploadedFile},
        transform::shrink_image,
    },
};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Persists uploads into a remote blob store, shrinking image payloads
/// first.
pub struct RemoteBlobStorage {
    blob: Arc<dyn BlobStore>,
}

impl RemoteBlobStorage {
    #[must_use]
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        Self { blob }
    }
}

#[async_trait]
impl UploadBackend for RemoteBlobStorage {
    async fn persist(&self, file: IncomingFile) -> Result<UploadedFile, UploadError> {
        let is_image = file
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"));

        let bytes = if is_image {
            shrink_image(file.bytes)
        } else {
            file.bytes
        };

        let filename = generate_filename(file.original_name.as_deref());
        let size = bytes.len() as u64;

        let content_type = file
            .content_type
            .clone()
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

        let url = self.blob.store(&filename, bytes, &content_type).await?;

        Ok(UploadedFile {
            url,
            filename,
            original_name: file.original_name,
            content_type: file.content_type,
            size,
        })
    }

    async fn discard(&self, _filename: &str) {
        // Remote objects are left in place; the review record simply never
        // references them.
    }
}
