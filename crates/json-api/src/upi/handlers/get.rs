//! Get UPI Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State, upi::errors::into_api_error};

/// UPI Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpiResponse {
    pub success: bool,

    /// The configured UPI id; `null` when none is set.
    pub upi_id: Option<String>,
}

/// Get UPI Handler
///
/// An unset id is not an error, the field is simply `null`.
#[endpoint(
    tags("upi"),
    summary = "Get UPI Id",
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UpiResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let upi_id = state.app.upi.get().await.map_err(into_api_error)?;

    Ok(Json(UpiResponse {
        success: true,
        upi_id,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::upi::MockUpiService;

    use crate::test_helpers::upi_service;

    use super::*;

    fn make_service(upi: MockUpiService) -> Service {
        upi_service(upi, Router::with_path("upi").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_configured_id() -> TestResult {
        let mut upi = MockUpiService::new();

        upi.expect_get()
            .once()
            .return_once(|| Ok(Some("merchant@bank".to_string())));

        let mut res = TestClient::get("http://example.com/upi")
            .send(&make_service(upi))
            .await;

        let body: UpiResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.upi_id.as_deref(), Some("merchant@bank"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unset_id_is_null_not_error() -> TestResult {
        let mut upi = MockUpiService::new();

        upi.expect_get().once().return_once(|| Ok(None));

        let mut res = TestClient::get("http://example.com/upi")
            .send(&make_service(upi))
            .await;

        let body: UpiResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert!(body.upi_id.is_none());

        Ok(())
    }
}
