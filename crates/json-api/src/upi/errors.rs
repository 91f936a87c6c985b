//! UPI error mapping.

use tracing::error;

use shopfront_app::domain::upi::UpiServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: UpiServiceError) -> ApiError {
    match error {
        UpiServiceError::InvalidFormat => ApiError::bad_request("Invalid UPI id format"),
        UpiServiceError::Store(source) => {
            error!("upi store operation failed: {source}");

            ApiError::internal()
        }
        UpiServiceError::Serialization(source) => {
            error!("upi payload did not serialize: {source}");

            ApiError::internal()
        }
    }
}
