//! Reviews

mod errors;
mod models;
mod service;

pub use errors::ReviewsServiceError;
pub use models::{NewReview, Review, MAX_REVIEW_IMAGES};
pub use service::{FirebaseReviewsService, MockReviewsService, ReviewsService};
