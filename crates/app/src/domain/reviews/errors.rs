//! Reviews service errors.

use thiserror::Error;

use crate::{domain::reviews::models::MAX_REVIEW_IMAGES, store::StoreError};

#[derive(Debug, Error)]
pub enum ReviewsServiceError {
    #[error("rating must be an integer between 1 and 5")]
    InvalidRating,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("at most {MAX_REVIEW_IMAGES} images are allowed")]
    TooManyImages,

    #[error("storage error")]
    Store(#[from] StoreError),

    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),
}
