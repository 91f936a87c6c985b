//! Delete Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::PathParam, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, reviews::errors::into_api_error, state::State};

/// Review Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewDeletedResponse {
    pub success: bool,
    pub message: String,
}

/// Delete Review Handler
#[endpoint(
    tags("reviews"),
    summary = "Delete Review",
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    review_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ReviewDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .reviews
        .delete(&product_id.into_inner(), &review_id.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ReviewDeletedResponse {
        success: true,
        message: "Review deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::reviews::MockReviewsService;

    use crate::test_helpers::reviews_service;

    use super::*;

    fn make_service(reviews: MockReviewsService) -> Service {
        reviews_service(
            reviews,
            Router::with_path("reviews/{product_id}/{review_id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_review_returns_200() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_delete()
            .once()
            .withf(|product_id, review_id| product_id == "p1" && review_id == "r1")
            .return_once(|_, _| Ok(()));

        let mut res = TestClient::delete("http://example.com/reviews/p1/r1")
            .send(&make_service(reviews))
            .await;

        let body: ReviewDeletedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);

        Ok(())
    }
}
