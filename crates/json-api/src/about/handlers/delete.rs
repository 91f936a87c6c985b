//! Delete About Post Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::PathParam, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{about::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// About Post Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AboutPostDeletedResponse {
    pub success: bool,
    pub message: String,
}

/// Delete About Post Handler
#[endpoint(
    tags("about"),
    summary = "Delete About Post",
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    post_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<AboutPostDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .about
        .delete(&product_id.into_inner(), &post_id.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(AboutPostDeletedResponse {
        success: true,
        message: "Post deleted".to_string(),
    }))
}
