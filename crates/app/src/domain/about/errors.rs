//! About-posts service errors.

use thiserror::Error;

use crate::{domain::about::models::MAX_CONTENT_CHARS, store::StoreError};

#[derive(Debug, Error)]
pub enum AboutServiceError {
    #[error("missing required data")]
    MissingRequiredData,

    #[error("content exceeds {MAX_CONTENT_CHARS} characters")]
    ContentTooLong,

    #[error("storage error")]
    Store(#[from] StoreError),

    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),
}
