//! About-post response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::about::AboutPost;

/// An about-product post as served to the storefront.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AboutPostResponse {
    pub id: String,
    pub product_id: String,
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<AboutPost> for AboutPostResponse {
    fn from(post: AboutPost) -> Self {
        Self {
            id: post.id,
            product_id: post.product_id,
            content: post.content,
            author: post.author,
            created_at: post.created_at.map(|t| t.to_string()),
        }
    }
}
