//! Multipart form helpers.
//!
//! Salvo spools each part to a temp file; the pipeline wants bytes, so the
//! parts are read back here with the request-level limits applied before
//! anything touches a backend.

use salvo::{
    http::{form::FilePart, header::CONTENT_TYPE},
    Request,
};

use shopfront_app::uploads::{IncomingFile, MAX_FILES_PER_REQUEST, MAX_FILE_BYTES};

use crate::{errors::ApiError, extensions::*};

fn part_content_type(part: &FilePart) -> Option<String> {
    part.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn read_part(part: &FilePart) -> Result<IncomingFile, ApiError> {
    if part.size() > MAX_FILE_BYTES {
        return Err(ApiError::bad_request("File too large (10MB max)"));
    }

    let bytes = tokio::fs::read(part.path())
        .await
        .or_500("failed to read spooled upload")?;

    Ok(IncomingFile {
        original_name: part.name().map(str::to_string),
        content_type: part_content_type(part),
        bytes,
    })
}

/// Every file under `field`, or an empty list when the field is absent.
pub(crate) async fn collect_files(
    req: &mut Request,
    field: &str,
) -> Result<Vec<IncomingFile>, ApiError> {
    let Some(parts) = req.files(field).await else {
        return Ok(Vec::new());
    };

    if parts.len() > MAX_FILES_PER_REQUEST {
        return Err(ApiError::bad_request("Max 5 files allowed"));
    }

    let mut files = Vec::with_capacity(parts.len());

    for part in parts {
        files.push(read_part(part).await?);
    }

    Ok(files)
}

/// A single required file under `field`.
pub(crate) async fn require_file(req: &mut Request, field: &str) -> Result<IncomingFile, ApiError> {
    match req.file(field).await {
        Some(part) => read_part(part).await,
        None => Err(ApiError::bad_request("No file uploaded")),
    }
}
