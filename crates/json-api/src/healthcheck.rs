//! Liveness probes.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,

    /// Service status
    pub status: String,
}

/// Probe response for `/api/test`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProbeResponse {
    pub success: bool,
    pub message: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
    })
}

/// API reachability probe, kept for the storefront pages that poll it.
#[endpoint(tags("health"), summary = "API test endpoint")]
pub(crate) async fn ping() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        success: true,
        message: "API is working".to_string(),
    })
}
