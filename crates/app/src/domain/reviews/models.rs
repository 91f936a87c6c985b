//! Review Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Upper bound on attached image URLs per review.
pub const MAX_REVIEW_IMAGES: usize = 5;

/// Review Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub product_id: String,

    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub rating: i64,

    #[serde(default)]
    pub comment: String,

    /// Ordered image URLs, at most [`MAX_REVIEW_IMAGES`].
    #[serde(default)]
    pub images: Vec<String>,

    /// Calendar date of submission, e.g. `"2026-08-28"`.
    #[serde(default)]
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// New Review Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub customer_name: String,
    pub rating: i64,
    pub comment: String,
    pub images: Vec<String>,
}
