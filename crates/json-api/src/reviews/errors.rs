//! Review error mapping.

use tracing::error;

use shopfront_app::domain::reviews::ReviewsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ReviewsServiceError) -> ApiError {
    match error {
        ReviewsServiceError::InvalidRating => {
            ApiError::bad_request("Rating must be an integer between 1 and 5")
        }
        ReviewsServiceError::MissingRequiredData => {
            ApiError::bad_request("Customer name and comment are required")
        }
        ReviewsServiceError::TooManyImages => ApiError::bad_request("Max 5 files allowed"),
        ReviewsServiceError::Store(source) => {
            error!("review store operation failed: {source}");

            ApiError::internal()
        }
        ReviewsServiceError::Serialization(source) => {
            error!("review payload did not serialize: {source}");

            ApiError::internal()
        }
    }
}
