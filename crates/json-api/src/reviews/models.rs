//! Review response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::reviews::Review;

/// A customer review as served to the storefront.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub id: String,
    pub product_id: String,
    pub customer_name: String,
    pub rating: i64,
    pub comment: String,

    /// URLs of attached images.
    pub images: Vec<String>,

    /// Calendar date of submission, `YYYY-MM-DD`.
    pub date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            product_id: review.product_id,
            customer_name: review.customer_name,
            rating: review.rating,
            comment: review.comment,
            images: review.images,
            date: review.date,
            created_at: review.created_at.map(|t| t.to_string()),
        }
    }
}
