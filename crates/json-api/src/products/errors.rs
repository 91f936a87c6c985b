//! Product error mapping.

use tracing::error;

use shopfront_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists => ApiError::bad_request("Product already exists"),
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::MissingRequiredData => {
            ApiError::bad_request("Product id and name are required")
        }
        ProductsServiceError::Store(source) => {
            error!("product store operation failed: {source}");

            ApiError::internal()
        }
        ProductsServiceError::Serialization(source) => {
            error!("product payload did not serialize: {source}");

            ApiError::internal()
        }
    }
}
