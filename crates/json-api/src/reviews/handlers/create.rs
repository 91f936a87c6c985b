//! Create Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        extract::{JsonBody, PathParam},
        ToSchema,
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::reviews::NewReview;

use crate::{
    errors::ApiError, extensions::*, reviews::errors::into_api_error, reviews::ReviewResponse,
    state::State,
};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub customer_name: String,

    /// Whole stars, 1 to 5.
    pub rating: i64,

    pub comment: String,

    /// URLs of previously uploaded images, at most five.
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        NewReview {
            customer_name: request.customer_name,
            rating: request.rating,
            comment: request.comment,
            images: request.images,
        }
    }
}

/// Review Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewCreatedResponse {
    pub success: bool,
    pub review: ReviewResponse,
}

/// Create Review Handler
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
    ),
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let review = state
        .app
        .reviews
        .create(&product_id.into_inner(), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ReviewCreatedResponse {
        success: true,
        review: review.into(),
    }))
}
