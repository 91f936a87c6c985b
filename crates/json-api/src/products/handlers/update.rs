//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        extract::{JsonBody, PathParam},
        ToSchema,
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::products::ProductUpdate;

use crate::{
    errors::ApiError,
    extensions::*,
    products::errors::into_api_error,
    products::models::{parse_status, ProductResponse},
    state::State,
};

/// Update Product Request
///
/// Partial update; absent fields keep their stored values.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub main_image: Option<String>,
    pub discount_amount: Option<f64>,
    pub discount_percent: Option<f64>,
    pub status: Option<String>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            price: request.price,
            description: request.description,
            category: request.category,
            main_image: request.main_image,
            discount_amount: request.discount_amount,
            discount_percent: request.discount_percent,
            status: parse_status(request.status.as_deref()),
        }
    }
}

/// Product Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductUpdatedResponse {
    pub success: bool,
    pub product: ProductResponse,
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .update(&product.into_inner(), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductUpdatedResponse {
        success: true,
        product: product.into(),
    }))
}
