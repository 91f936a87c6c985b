//! Set UPI Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::JsonBody, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State, upi::errors::into_api_error};

/// Set UPI Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetUpiRequest {
    /// Payment address, `handle@provider`.
    pub upi_id: String,
}

/// UPI Stored Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpiStoredResponse {
    pub success: bool,
    pub upi_id: String,
}

/// Set UPI Handler
///
/// Validates the id format before anything is written.
#[endpoint(
    tags("upi"),
    summary = "Set UPI Id",
)]
pub(crate) async fn handler(
    json: JsonBody<SetUpiRequest>,
    depot: &mut Depot,
) -> Result<Json<UpiStoredResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .upi
        .set(&json.into_inner().upi_id)
        .await
        .map_err(into_api_error)?;

    Ok(Json(UpiStoredResponse {
        success: true,
        upi_id: record.upi_id,
    }))
}
