//! List Reviews Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::PathParam, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError, extensions::*, reviews::errors::into_api_error, reviews::ReviewResponse,
    state::State,
};

/// Review List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewListResponse {
    pub success: bool,
    pub reviews: Vec<ReviewResponse>,
}

/// List Reviews Handler
///
/// Returns every review of one product, oldest first.
#[endpoint(
    tags("reviews"),
    summary = "List Reviews",
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ReviewListResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list(&product_id.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ReviewListResponse {
        success: true,
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}
