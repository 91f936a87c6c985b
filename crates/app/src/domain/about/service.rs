//! About-posts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use serde_json::{json, Value};
use tracing::warn;

use crate::{
    domain::about::{
        errors::AboutServiceError,
        models::{AboutPost, NewAboutPost, MAX_CONTENT_CHARS},
    },
    store::StoreClient,
};

#[automock]
#[async_trait]
pub trait AboutService: Send + Sync {
    async fn list(&self, product_id: &str) -> Result<Vec<AboutPost>, AboutServiceError>;

    async fn create(&self, post: NewAboutPost) -> Result<AboutPost, AboutServiceError>;

    async fn delete(&self, product_id: &str, post_id: &str) -> Result<(), AboutServiceError>;
}

/// About-posts service backed by the remote document store.
pub struct FirebaseAboutService {
    store: Arc<dyn StoreClient>,
}

impl FirebaseAboutService {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AboutService for FirebaseAboutService {
    async fn list(&self, product_id: &str) -> Result<Vec<AboutPost>, AboutServiceError> {
        let value = self
            .store
            .get_json(&format!("about_products/{product_id}"))
            .await?;

        let Value::Object(map) = value else {
            return Ok(Vec::new());
        };

        let mut entries: Vec<(String, Value)> = map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(entries
            .into_iter()
            .filter_map(|(id, record)| {
                let Value::Object(mut record) = record else {
                    warn!("skipping malformed about-post record {id}");

                    return None;
                };

                record.insert("id".to_string(), json!(id));
                record.insert("product_id".to_string(), json!(product_id));

                serde_json::from_value(Value::Object(record)).ok()
            })
            .collect())
    }

    async fn create(&self, post: NewAboutPost) -> Result<AboutPost, AboutServiceError> {
        if post.product_id.trim().is_empty() || post.content.trim().is_empty() {
            return Err(AboutServiceError::MissingRequiredData);
        }

        if post.content.chars().count() > MAX_CONTENT_CHARS {
            return Err(AboutServiceError::ContentTooLong);
        }

        let now = Timestamp::now();
        let id = now.as_millisecond().to_string();

        let record = AboutPost {
            id: id.clone(),
            product_id: post.product_id.clone(),
            content: post.content,
            author: post.author,
            created_at: Some(now),
        };

        self.store
            .put_json(
                &format!("about_products/{}/{id}", post.product_id),
                &serde_json::to_value(&record)?,
            )
            .await?;

        Ok(record)
    }

    async fn delete(&self, product_id: &str, post_id: &str) -> Result<(), AboutServiceError> {
        self.store
            .delete(&format!("about_products/{product_id}/{post_id}"))
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::store::MockStoreClient;

    use super::*;

    fn service(store: MockStoreClient) -> FirebaseAboutService {
        FirebaseAboutService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_rejects_over_long_content() -> TestResult {
        let mut store = MockStoreClient::new();

        store.expect_put_json().never();

        let result = service(store)
            .create(NewAboutPost {
                product_id: "p1".to_string(),
                content: "x".repeat(MAX_CONTENT_CHARS + 1),
                author: None,
            })
            .await;

        assert!(matches!(result, Err(AboutServiceError::ContentTooLong)));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_blank_content() -> TestResult {
        let mut store = MockStoreClient::new();

        store.expect_put_json().never();

        let result = service(store)
            .create(NewAboutPost {
                product_id: "p1".to_string(),
                content: " ".to_string(),
                author: None,
            })
            .await;

        assert!(matches!(result, Err(AboutServiceError::MissingRequiredData)));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_writes_under_product_subtree() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_put_json()
            .once()
            .withf(|path, value| {
                path.starts_with("about_products/p1/") && value.get("created_at").is_some()
            })
            .return_once(|_, _| Ok(()));

        let created = service(store)
            .create(NewAboutPost {
                product_id: "p1".to_string(),
                content: "All about it".to_string(),
                author: Some("Staff".to_string()),
            })
            .await?;

        assert_eq!(created.product_id, "p1");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_missing_subtree_is_empty() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .once()
            .withf(|path| path == "about_products/p1")
            .return_once(|_| Ok(Value::Null));

        let posts = service(store).list("p1").await?;

        assert!(posts.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_targets_single_post() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_delete()
            .once()
            .withf(|path| path == "about_products/p1/a1")
            .return_once(|_| Ok(()));

        service(store).delete("p1", "a1").await?;

        Ok(())
    }
}
