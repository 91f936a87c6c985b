//! Search Products Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::QueryParam, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error,
    products::ProductResponse, state::State,
};

/// Search Results Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchResultsResponse {
    pub success: bool,
    pub results: Vec<ProductResponse>,
    pub count: usize,
}

/// Search Products Handler
///
/// Case-insensitive substring search; an empty query returns no results.
#[endpoint(
    tags("products"),
    summary = "Search Products",
)]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<SearchResultsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = q.into_inner().unwrap_or_default();

    let products = state
        .app
        .products
        .search(&query)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SearchResultsResponse {
        success: true,
        count: products.len(),
        results: products.into_iter().map(Into::into).collect(),
    }))
}
