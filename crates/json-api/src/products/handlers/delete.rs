//! Delete Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::PathParam, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, products::errors::into_api_error, state::State};

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    pub success: bool,
    pub message: String,
}

/// Delete Product Handler
///
/// Removes the product together with its reviews and about posts.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .delete(&product.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductDeletedResponse {
        success: true,
        message: "Product deleted".to_string(),
    }))
}
