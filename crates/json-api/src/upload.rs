//! Standalone Upload Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use shopfront_app::uploads::UploadedFile;

use crate::{errors::ApiError, extensions::*, multipart::require_file, state::State};

/// Uploaded File Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadedFileResponse {
    pub success: bool,

    /// Publicly resolvable URL of the stored file.
    pub url: String,

    pub filename: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    pub size: u64,
}

impl From<UploadedFile> for UploadedFileResponse {
    fn from(file: UploadedFile) -> Self {
        Self {
            success: true,
            url: file.url,
            filename: file.filename,
            original_name: file.original_name,
            content_type: file.content_type,
            size: file.size,
        }
    }
}

/// Upload Handler
///
/// Accepts one `image` part and returns the URL it was stored under.
#[endpoint(
    tags("uploads"),
    summary = "Upload File",
    responses(
        (status_code = StatusCode::CREATED, description = "File stored"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UploadedFileResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let file = require_file(req, "image").await?;

    let stored = state.app.uploads.store(file).await.map_err(|source| {
        error!("upload failed: {source}");

        ApiError::internal()
    })?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(stored.into()))
}
