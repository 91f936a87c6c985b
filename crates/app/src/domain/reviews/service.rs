//! Reviews service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{Timestamp, Zoned};
use mockall::automock;
use serde_json::{json, Value};
use tracing::warn;

use crate::{
    domain::reviews::{
        errors::ReviewsServiceError,
        models::{NewReview, Review, MAX_REVIEW_IMAGES},
    },
    store::StoreClient,
};

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    async fn list(&self, product_id: &str) -> Result<Vec<Review>, ReviewsServiceError>;

    async fn create(
        &self,
        product_id: &str,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError>;

    async fn delete(&self, product_id: &str, review_id: &str) -> Result<(), ReviewsServiceError>;
}

/// Reviews service backed by the remote document store.
pub struct FirebaseReviewsService {
    store: Arc<dyn StoreClient>,
}

impl FirebaseReviewsService {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

fn validate(review: &NewReview) -> Result<(), ReviewsServiceError> {
    if review.customer_name.trim().is_empty() {
        return Err(ReviewsServiceError::MissingRequiredData);
    }

    if !(1..=5).contains(&review.rating) {
        return Err(ReviewsServiceError::InvalidRating);
    }

    if review.images.len() > MAX_REVIEW_IMAGES {
        return Err(ReviewsServiceError::TooManyImages);
    }

    Ok(())
}

#[async_trait]
impl ReviewsService for FirebaseReviewsService {
    async fn list(&self, product_id: &str) -> Result<Vec<Review>, ReviewsServiceError> {
        let value = self.store.get_json(&format!("reviews/{product_id}")).await?;

        let Value::Object(map) = value else {
            return Ok(Vec::new());
        };

        let mut entries: Vec<(String, Value)> = map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(entries
            .into_iter()
            .filter_map(|(id, record)| {
                let Value::Object(mut record) = record else {
                    warn!("skipping malformed review record {id}");

                    return None;
                };

                record.insert("id".to_string(), json!(id));
                record.insert("product_id".to_string(), json!(product_id));

                serde_json::from_value(Value::Object(record)).ok()
            })
            .collect())
    }

    async fn create(
        &self,
        product_id: &str,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError> {
        validate(&review)?;

        let now = Timestamp::now();
        let id = now.as_millisecond().to_string();

        let record = Review {
            id: id.clone(),
            product_id: product_id.to_string(),
            customer_name: review.customer_name,
            rating: review.rating,
            comment: review.comment,
            images: review.images,
            date: Zoned::now().strftime("%Y-%m-%d").to_string(),
            created_at: Some(now),
        };

        self.store
            .put_json(
                &format!("reviews/{product_id}/{id}"),
                &serde_json::to_value(&record)?,
            )
            .await?;

        Ok(record)
    }

    async fn delete(&self, product_id: &str, review_id: &str) -> Result<(), ReviewsServiceError> {
        self.store
            .delete(&format!("reviews/{product_id}/{review_id}"))
            .await
            .map_err(Into::into)
    }
}
