//! Pipeline front door and the backend seam.

use std::{io, path::Path, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::store::StoreError;

/// Most files accepted in one request.
pub const MAX_FILES_PER_REQUEST: usize = 5;

/// Largest accepted file, in bytes.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// A file as received from the transport layer.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Metadata of a successfully persisted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Publicly resolvable URL.
    pub url: String,

    /// Generated collision-resistant filename.
    pub filename: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    pub size: u64,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Generate a collision-resistant filename: millisecond timestamp, random
/// suffix, original extension.
pub(crate) fn generate_filename(original_name: Option<&str>) -> String {
    let suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    let extension = original_name
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!("{}-{suffix}{extension}", Timestamp::now().as_millisecond())
}

/// Where persisted bytes end up: local disk or a remote blob store.
#[automock]
#[async_trait]
pub trait UploadBackend: Send + Sync {
    async fn persist(&self, file: IncomingFile) -> Result<UploadedFile, UploadError>;

    /// Best-effort removal of a previously persisted file, for cleanup when
    /// a later stage of the same request fails.
    async fn discard(&self, filename: &str);
}

/// Upload pipeline over a configured backend.
pub struct UploadPipeline {
    backend: Arc<dyn UploadBackend>,
}

impl UploadPipeline {
    #[must_use]
    pub fn new(backend: Arc<dyn UploadBackend>) -> Self {
        Self { backend }
    }

    /// Persist a single file.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails to persist the file.
    pub async fn store(&self, file: IncomingFile) -> Result<UploadedFile, UploadError> {
        self.backend.persist(file).await
    }

    /// Persist every file, tolerating individual failures: a failed upload
    /// is logged and omitted from the result, the rest still succeed.
    pub async fn store_all(&self, files: Vec<IncomingFile>) -> Vec<UploadedFile> {
        let mut stored = Vec::with_capacity(files.len());

        for file in files {
            let name = file.original_name.clone();

            match self.backend.persist(file).await {
                Ok(uploaded) => stored.push(uploaded),
                Err(error) => {
                    warn!(
                        "upload of {} failed, skipping: {error}",
                        name.as_deref().unwrap_or("unnamed file")
                    );
                }
            }
        }

        stored
    }

    /// Best-effort cleanup of an already persisted file.
    pub async fn discard(&self, filename: &str) {
        self.backend.discard(filename).await;
    }
}
