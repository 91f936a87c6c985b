//! List About Posts Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::PathParam, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    about::errors::into_api_error, about::AboutPostResponse, errors::ApiError, extensions::*,
    state::State,
};

/// About Post List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AboutPostListResponse {
    pub success: bool,
    pub posts: Vec<AboutPostResponse>,
}

/// List About Posts Handler
#[endpoint(
    tags("about"),
    summary = "List About Posts",
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<AboutPostListResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let posts = state
        .app
        .about
        .list(&product_id.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(AboutPostListResponse {
        success: true,
        posts: posts.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopfront_app::domain::about::{AboutPost, MockAboutService};

    use crate::test_helpers::about_service;

    use super::*;

    fn make_service(about: MockAboutService) -> Service {
        about_service(
            about,
            Router::with_path("about-product/{product_id}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_returns_posts_for_product() -> TestResult {
        let mut about = MockAboutService::new();

        about
            .expect_list()
            .once()
            .withf(|product_id| product_id == "p1")
            .return_once(|_| {
                Ok(vec![AboutPost {
                    id: "a1".to_string(),
                    product_id: "p1".to_string(),
                    content: "Hand made".to_string(),
                    author: None,
                    created_at: None,
                }])
            });

        let mut res = TestClient::get("http://example.com/about-product/p1")
            .send(&make_service(about))
            .await;

        let body: AboutPostListResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.posts.len(), 1);
        assert_eq!(body.posts[0].id, "a1");

        Ok(())
    }
}
