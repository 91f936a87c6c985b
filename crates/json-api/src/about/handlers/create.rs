//! Create About Post Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::JsonBody, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::about::NewAboutPost;

use crate::{
    about::errors::into_api_error, about::AboutPostResponse, errors::ApiError, extensions::*,
    state::State,
};

/// Create About Post Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAboutPostRequest {
    pub product_id: String,

    /// Free text, at most 2000 characters.
    pub content: String,

    pub author: Option<String>,
}

impl From<CreateAboutPostRequest> for NewAboutPost {
    fn from(request: CreateAboutPostRequest) -> Self {
        NewAboutPost {
            product_id: request.product_id,
            content: request.content,
            author: request.author,
        }
    }
}

/// About Post Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AboutPostCreatedResponse {
    pub success: bool,
    pub post: AboutPostResponse,
}

/// Create About Post Handler
#[endpoint(
    tags("about"),
    summary = "Create About Post",
    responses(
        (status_code = StatusCode::CREATED, description = "Post created"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAboutPostRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AboutPostCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let post = state
        .app
        .about
        .create(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(AboutPostCreatedResponse {
        success: true,
        post: post.into(),
    }))
}
