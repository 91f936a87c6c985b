//! List Products Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::QueryParam, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::products::DEFAULT_PAGE_LIMIT;

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error,
    products::ProductResponse, state::State,
};

/// Product Page Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPageResponse {
    pub success: bool,
    pub products: Vec<ProductResponse>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,

    /// Set when an upstream failure was papered over with the last good
    /// snapshot.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub stale: bool,
}

/// List Products Handler
///
/// Returns one page of the catalog.
#[endpoint(
    tags("products"),
    summary = "List Products",
)]
pub(crate) async fn handler(
    page: QueryParam<usize, false>,
    limit: QueryParam<usize, false>,
    depot: &mut Depot,
) -> Result<Json<ProductPageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = page.into_inner().unwrap_or(1).max(1);
    let limit = limit.into_inner().unwrap_or(DEFAULT_PAGE_LIMIT).max(1);

    let listed = state
        .app
        .products
        .list(page, limit)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductPageResponse {
        success: true,
        products: listed.products.into_iter().map(Into::into).collect(),
        page: listed.page,
        limit: listed.limit,
        total: listed.total,
        stale: listed.stale,
    }))
}
