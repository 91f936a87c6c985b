//! Local-disk upload backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::uploads::pipeline::{
    generate_filename, IncomingFile, UploadBackend, UploadError, UploadedFile,
};

/// Writes uploads into a dedicated directory served under `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    dir: PathBuf,
}

impl LocalDiskStorage {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory the server must serve statically.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl UploadBackend for LocalDiskStorage {
    async fn persist(&self, file: IncomingFile) -> Result<UploadedFile, UploadError> {
        let filename = generate_filename(file.original_name.as_deref());
        let size = file.bytes.len() as u64;

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&filename), &file.bytes).await?;

        Ok(UploadedFile {
            url: format!("/uploads/{filename}"),
            filename,
            original_name: file.original_name,
            content_type: file.content_type,
            size,
        })
    }

    async fn discard(&self, filename: &str) {
        // Cleanup is best-effort; a leftover file is preferable to a
        // failing error path.
        let _ = tokio::fs::remove_file(self.dir.join(filename)).await;
    }
}
