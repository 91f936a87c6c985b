//! Clear UPI Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State, upi::errors::into_api_error};

/// UPI Cleared Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpiClearedResponse {
    pub success: bool,
    pub message: String,
}

/// Clear UPI Handler
#[endpoint(
    tags("upi"),
    summary = "Clear UPI Id",
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UpiClearedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state.app.upi.clear().await.map_err(into_api_error)?;

    Ok(Json(UpiClearedResponse {
        success: true,
        message: "UPI id removed".to_string(),
    }))
}
