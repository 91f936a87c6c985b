//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use serde_json::{json, Value};
use tracing::warn;

use crate::{
    cache::{ResponseCache, PRODUCTS_TTL, SEARCH_TTL},
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductPage, ProductUpdate},
    },
    store::StoreClient,
};

/// Listing page size when the request does not name one.
pub const DEFAULT_PAGE_LIMIT: usize = 20;

const PRODUCTS_PATH: &str = "products";
const REVIEWS_PATH: &str = "reviews";
const ABOUT_PATH: &str = "about_products";

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// One page of the catalog. Page 1 falls back to the stale snapshot on
    /// upstream failure; every other page fails hard.
    async fn list(&self, page: usize, limit: usize) -> Result<ProductPage, ProductsServiceError>;

    async fn create(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    async fn update(
        &self,
        id: &str,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Cascade delete: the product, then its reviews and about-post
    /// subtrees.
    async fn delete(&self, id: &str) -> Result<(), ProductsServiceError>;

    /// Case-insensitive substring search over name, description, category
    /// and id. An empty query is an empty result, never the full catalog.
    async fn search(&self, query: &str) -> Result<Vec<Product>, ProductsServiceError>;

    /// Proactively fetch page 1 and store it under the warm cache key.
    async fn warm(&self) -> Result<(), ProductsServiceError>;
}

/// Products service backed by the remote document store.
pub struct FirebaseProductsService {
    store: Arc<dyn StoreClient>,
    cache: Arc<ResponseCache>,
}

impl FirebaseProductsService {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>, cache: Arc<ResponseCache>) -> Self {
        Self { store, cache }
    }

    /// Fetch the whole `products` map and project it into a list ordered by
    /// id. Records that do not decode are skipped, not fatal.
    async fn fetch_all(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let value = self.store.get_json(PRODUCTS_PATH).await?;

        Ok(project_products(value))
    }

    fn page_of(products: &[Product], page: usize, limit: usize) -> ProductPage {
        let page = page.max(1);
        let limit = limit.max(1);
        let start = (page - 1).saturating_mul(limit);

        ProductPage {
            products: products.iter().skip(start).take(limit).cloned().collect(),
            page,
            limit,
            total: products.len(),
            stale: false,
        }
    }

    fn cache_page(&self, page: &ProductPage) -> Result<(), ProductsServiceError> {
        let key = ResponseCache::product_page_key(page.page, page.limit);
        let payload = serde_json::to_value(page)?;

        if page.page == 1 {
            self.cache.store_snapshot(payload.clone());
        }

        self.cache.set(&key, payload, PRODUCTS_TTL);

        Ok(())
    }

    fn stale_page(&self) -> Option<ProductPage> {
        let snapshot = self.cache.snapshot()?;

        let mut page: ProductPage = serde_json::from_value(snapshot).ok()?;
        page.stale = true;

        Some(page)
    }
}

#[async_trait]
impl ProductsService for FirebaseProductsService {
    async fn list(&self, page: usize, limit: usize) -> Result<ProductPage, ProductsServiceError> {
        let page = page.max(1);
        let limit = limit.max(1);
        let key = ResponseCache::product_page_key(page, limit);

        if let Some(cached) = self.cache.get(&key) {
            if let Ok(cached) = serde_json::from_value(cached) {
                return Ok(cached);
            }
        }

        let products = match self.fetch_all().await {
            Ok(products) => products,
            Err(error) if page == 1 => {
                // Availability over freshness, for the landing page only.
                if let Some(stale) = self.stale_page() {
                    warn!("serving stale page 1 after upstream failure: {error}");

                    return Ok(stale);
                }

                return Err(error);
            }
            Err(error) => return Err(error),
        };

        let result = Self::page_of(&products, page, limit);
        self.cache_page(&result)?;

        Ok(result)
    }

    async fn create(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let id = match product.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Timestamp::now().as_millisecond().to_string(),
        };

        // Read-before-write duplicate check. Two concurrent creates with
        // the same id can still race; the store has no conditional write.
        let existing = self.store.get_json(&format!("{PRODUCTS_PATH}/{id}")).await?;

        if !existing.is_null() {
            return Err(ProductsServiceError::AlreadyExists);
        }

        let now = Timestamp::now();

        let record = Product {
            id: id.clone(),
            name: product.name,
            price: product.price,
            description: product.description,
            category: product.category,
            main_image: product.main_image,
            discount_amount: product.discount_amount,
            discount_percent: product.discount_percent,
            status: product.status.unwrap_or_default(),
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.store
            .put_json(
                &format!("{PRODUCTS_PATH}/{id}"),
                &serde_json::to_value(&record)?,
            )
            .await?;

        self.cache.invalidate_all();

        if let Err(error) = self.warm().await {
            warn!("cache re-warm after create failed: {error}");
        }

        Ok(record)
    }

    async fn update(
        &self,
        id: &str,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let path = format!("{PRODUCTS_PATH}/{id}");

        let existing = self.store.get_json(&path).await?;

        let Value::Object(existing) = existing else {
            return Err(ProductsServiceError::NotFound);
        };

        let mut patch = serde_json::to_value(&update)?;

        if let Value::Object(patch) = &mut patch {
            patch.insert("updated_at".to_string(), json!(Timestamp::now()));
        }

        self.store.patch_json(&path, &patch).await?;

        self.cache.invalidate_all();

        // Shallow merge, mirroring what the store applied.
        let mut merged = existing;

        if let Value::Object(patch) = patch {
            merged.extend(patch);
        }

        merged.insert("id".to_string(), json!(id));

        Ok(serde_json::from_value(Value::Object(merged))?)
    }

    async fn delete(&self, id: &str) -> Result<(), ProductsServiceError> {
        self.store.delete(&format!("{PRODUCTS_PATH}/{id}")).await?;

        self.cache.invalidate_all();

        // Not transactional: a failure below leaves the product gone and
        // the subtree orphaned.
        self.store.delete(&format!("{REVIEWS_PATH}/{id}")).await?;
        self.store.delete(&format!("{ABOUT_PATH}/{id}")).await?;

        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, ProductsServiceError> {
        let needle = query.trim().to_lowercase();

        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let key = ResponseCache::search_key(&needle);

        if let Some(cached) = self.cache.get(&key) {
            if let Ok(cached) = serde_json::from_value(cached) {
                return Ok(cached);
            }
        }

        let products = self.fetch_all().await?;

        let matches: Vec<Product> = products
            .into_iter()
            .filter(|product| {
                let fields = [
                    Some(product.name.as_str()),
                    product.description.as_deref(),
                    product.category.as_deref(),
                    Some(product.id.as_str()),
                ];

                fields
                    .into_iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect();

        self.cache
            .set(&key, serde_json::to_value(&matches)?, SEARCH_TTL);

        Ok(matches)
    }

    async fn warm(&self) -> Result<(), ProductsServiceError> {
        let products = self.fetch_all().await?;
        let page = Self::page_of(&products, 1, DEFAULT_PAGE_LIMIT);

        self.cache_page(&page)
    }
}

/// Project the stored `id -> record` map into a list of products ordered by
/// id, carrying the id into each record.
fn project_products(value: Value) -> Vec<Product> {
    let Value::Object(map) = value else {
        return Vec::new();
    };

    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    entries
        .into_iter()
        .filter_map(|(id, record)| {
            let Value::Object(mut record) = record else {
                warn!("skipping malformed product record {id}");

                return None;
            };

            record.insert("id".to_string(), json!(id));

            match serde_json::from_value(Value::Object(record)) {
                Ok(product) => Some(product),
                Err(error) => {
                    warn!("skipping undecodable product record {id}: {error}");

                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::products::models::ProductStatus,
        store::{MockStoreClient, StoreError},
    };

    use super::*;

    fn catalog(count: usize) -> Value {
        let mut map = serde_json::Map::new();

        for i in 1..=count {
            map.insert(format!("p{i:02}"), json!({ "name": format!("Item {i}"), "price": i }));
        }

        Value::Object(map)
    }

    fn service(store: MockStoreClient) -> FirebaseProductsService {
        FirebaseProductsService::new(Arc::new(store), Arc::new(ResponseCache::new()))
    }

    #[tokio::test]
    async fn test_list_middle_page() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .once()
            .withf(|path| path == "products")
            .return_once(|_| Ok(catalog(45)));

        let page = service(store).list(2, 20).await?;

        assert_eq!(page.total, 45);
        assert_eq!(page.products.len(), 20);
        assert_eq!(page.products.first().map(|p| p.id.as_str()), Some("p21"));
        assert_eq!(page.products.last().map(|p| p.id.as_str()), Some("p40"));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_last_partial_page() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .once()
            .withf(|path| path == "products")
            .return_once(|_| Ok(catalog(45)));

        let page = service(store).list(3, 20).await?;

        assert_eq!(page.products.len(), 5);
        assert_eq!(page.products.first().map(|p| p.id.as_str()), Some("p41"));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_serves_cached_page_without_refetch() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .once()
            .withf(|path| path == "products")
            .return_once(|_| Ok(catalog(3)));

        let svc = service(store);

        let first = svc.list(1, 20).await?;
        let second = svc.list(1, 20).await?;

        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_defaults_missing_status_to_active() -> TestResult {
        let mut store = MockStoreClient::new();

        store.expect_get_json().once().return_once(|_| {
            Ok(json!({
                "a": { "name": "A" },
                "b": { "name": "B", "status": "inactive" },
            }))
        });

        let page = service(store).list(1, 20).await?;

        assert_eq!(
            page.products.first().map(|p| p.status),
            Some(ProductStatus::Active)
        );
        assert_eq!(
            page.products.last().map(|p| p.status),
            Some(ProductStatus::Inactive)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_page_one_falls_back_to_stale_snapshot() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .times(1)
            .withf(|path| path == "products")
            .return_once(|_| Ok(catalog(2)));

        store
            .expect_get_json()
            .withf(|path| path == "products")
            .returning(|_| Err(StoreError::UnexpectedResponse("store down".to_string())));

        let svc = service(store);

        svc.warm().await?;
        svc.cache.invalidate_all();

        let page = svc.list(1, 20).await?;

        assert!(page.stale, "fallback page should be marked stale");
        assert_eq!(page.total, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_other_pages_fail_hard() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .returning(|_| Err(StoreError::UnexpectedResponse("store down".to_string())));

        let result = service(store).list(2, 20).await;

        assert!(matches!(result, Err(ProductsServiceError::Store(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_existing_id() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .once()
            .withf(|path| path == "products/p1")
            .return_once(|_| Ok(json!({ "name": "existing" })));

        store.expect_put_json().never();

        let result = service(store)
            .create(NewProduct {
                id: Some("p1".to_string()),
                name: "New".to_string(),
                price: 1.0,
                description: None,
                category: None,
                main_image: None,
                discount_amount: None,
                discount_percent: None,
                status: None,
            })
            .await;

        assert!(matches!(result, Err(ProductsServiceError::AlreadyExists)));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() -> TestResult {
        let mut store = MockStoreClient::new();

        store.expect_get_json().never();
        store.expect_put_json().never();

        let result = service(store)
            .create(NewProduct {
                id: Some("p1".to_string()),
                name: "   ".to_string(),
                price: 1.0,
                description: None,
                category: None,
                main_image: None,
                discount_amount: None,
                discount_percent: None,
                status: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductsServiceError::MissingRequiredData)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_writes_record_and_rewarms() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .once()
            .withf(|path| path == "products/p9")
            .return_once(|_| Ok(Value::Null));

        store
            .expect_put_json()
            .once()
            .withf(|path, value| {
                path == "products/p9"
                    && value.get("name") == Some(&json!("Widget"))
                    && value.get("status") == Some(&json!("active"))
                    && value.get("created_at").is_some()
            })
            .return_once(|_, _| Ok(()));

        // The post-create re-warm fetches the full catalog again.
        store
            .expect_get_json()
            .once()
            .withf(|path| path == "products")
            .return_once(|_| Ok(json!({ "p9": { "name": "Widget" } })));

        let created = service(store)
            .create(NewProduct {
                id: Some("p9".to_string()),
                name: "Widget".to_string(),
                price: 10.0,
                description: None,
                category: None,
                main_image: None,
                discount_amount: None,
                discount_percent: None,
                status: None,
            })
            .await?;

        assert_eq!(created.id, "p9");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_generates_id_when_absent() -> TestResult {
        let mut store = MockStoreClient::new();

        store.expect_get_json().once().return_once(|_| Ok(Value::Null));
        store.expect_put_json().once().return_once(|_, _| Ok(()));
        store
            .expect_get_json()
            .withf(|path| path == "products")
            .returning(|_| Ok(Value::Null));

        let created = service(store)
            .create(NewProduct {
                id: None,
                name: "Widget".to_string(),
                price: 10.0,
                description: None,
                category: None,
                main_image: None,
                discount_amount: None,
                discount_percent: None,
                status: None,
            })
            .await?;

        assert!(
            created.id.parse::<i64>().is_ok(),
            "generated id should be a millisecond timestamp"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_merges_and_refreshes_updated_at() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .once()
            .withf(|path| path == "products/p1")
            .return_once(|_| Ok(json!({ "name": "Old", "price": 5, "category": "tools" })));

        store
            .expect_patch_json()
            .once()
            .withf(|path, value| {
                path == "products/p1"
                    && value.get("price") == Some(&json!(9.5))
                    && value.get("name").is_none()
                    && value.get("updated_at").is_some()
            })
            .return_once(|_, _| Ok(()));

        let updated = service(store)
            .update(
                "p1",
                ProductUpdate {
                    price: Some(9.5),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.name, "Old", "untouched fields survive the merge");
        assert!((updated.price - 9.5).abs() < f64::EPSILON);
        assert!(updated.updated_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() -> TestResult {
        let mut store = MockStoreClient::new();

        store.expect_get_json().once().return_once(|_| Ok(Value::Null));
        store.expect_patch_json().never();

        let result = service(store)
            .update("missing", ProductUpdate::default())
            .await;

        assert!(matches!(result, Err(ProductsServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_cascades_to_reviews_and_about() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_delete()
            .once()
            .withf(|path| path == "products/p1")
            .return_once(|_| Ok(()));

        store
            .expect_delete()
            .once()
            .withf(|path| path == "reviews/p1")
            .return_once(|_| Ok(()));

        store
            .expect_delete()
            .once()
            .withf(|path| path == "about_products/p1")
            .return_once(|_| Ok(()));

        service(store).delete("p1").await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_search_empty_query_short_circuits() -> TestResult {
        let mut store = MockStoreClient::new();

        store.expect_get_json().never();

        let results = service(store).search("   ").await?;

        assert!(results.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_search_matches_substring_case_insensitively() -> TestResult {
        let mut store = MockStoreClient::new();

        store.expect_get_json().once().return_once(|_| {
            Ok(json!({
                "p1": { "name": "Blue Shoes", "category": "footwear" },
                "p2": { "name": "Red Hat", "category": "headwear" },
                "p3": { "name": "Lamp", "description": "shoe-shaped lamp" },
            }))
        });

        let results = service(store).search("SHOE").await?;

        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["p1", "p3"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_caches_results() -> TestResult {
        let mut store = MockStoreClient::new();

        store
            .expect_get_json()
            .once()
            .return_once(|_| Ok(json!({ "p1": { "name": "Blue Shoes" } })));

        let svc = service(store);

        let first = svc.search("shoes").await?;
        let second = svc.search("shoes").await?;

        assert_eq!(first, second);

        Ok(())
    }
}
