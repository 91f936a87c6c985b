//! About-post error mapping.

use tracing::error;

use shopfront_app::domain::about::AboutServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AboutServiceError) -> ApiError {
    match error {
        AboutServiceError::MissingRequiredData => {
            ApiError::bad_request("Product id and content are required")
        }
        AboutServiceError::ContentTooLong => {
            ApiError::bad_request("Content exceeds 2000 characters")
        }
        AboutServiceError::Store(source) => {
            error!("about-post store operation failed: {source}");

            ApiError::internal()
        }
        AboutServiceError::Serialization(source) => {
            error!("about-post payload did not serialize: {source}");

            ApiError::internal()
        }
    }
}
