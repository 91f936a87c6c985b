//! Create Review With Images Handler
//!
//! Multipart variant of review creation: form fields carry the review,
//! `images` parts carry up to five attachments which are persisted before
//! the review is written. Persisted files are discarded again when the
//! review itself is rejected.

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopfront_app::domain::reviews::NewReview;

use crate::{
    errors::ApiError,
    extensions::*,
    multipart::collect_files,
    reviews::errors::into_api_error,
    reviews::handlers::create::ReviewCreatedResponse,
    state::State,
};

async fn form_field(req: &mut Request, name: &'static str) -> Result<String, ApiError> {
    req.form::<String>(name)
        .await
        .ok_or_else(|| ApiError::bad_request(format!("Missing field: {name}")))
}

/// Create Review With Images Handler
#[endpoint(
    tags("reviews"),
    summary = "Create Review With Images",
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
    ),
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer_name = form_field(req, "customer_name").await?;
    let comment = form_field(req, "comment").await?;

    let rating: i64 = form_field(req, "rating")
        .await?
        .parse()
        .map_err(|_ignored| ApiError::bad_request("Rating must be an integer between 1 and 5"))?;

    let files = collect_files(req, "images").await?;
    let stored = state.app.uploads.store_all(files).await;

    let review = NewReview {
        customer_name,
        rating,
        comment,
        images: stored.iter().map(|file| file.url.clone()).collect(),
    };

    match state
        .app
        .reviews
        .create(&product_id.into_inner(), review)
        .await
    {
        Ok(review) => {
            res.status_code(StatusCode::CREATED);

            Ok(Json(ReviewCreatedResponse {
                success: true,
                review: review.into(),
            }))
        }
        Err(error) => {
            for file in &stored {
                state.app.uploads.discard(&file.filename).await;
            }

            Err(into_api_error(error))
        }
    }
}
