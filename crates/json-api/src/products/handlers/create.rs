//! Create Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::JsonBody, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::products::NewProduct;

use crate::{
    errors::ApiError,
    extensions::*,
    products::errors::into_api_error,
    products::models::{parse_status, ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Caller-assigned identifier; generated when omitted.
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub main_image: Option<String>,
    pub discount_amount: Option<f64>,
    pub discount_percent: Option<f64>,
    /// `"active"` (default) or `"inactive"`
    pub status: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            id: request.id,
            name: request.name,
            price: request.price,
            description: request.description,
            category: request.category,
            main_image: request.main_image,
            discount_amount: request.discount_amount,
            discount_percent: request.discount_percent,
            status: parse_status(request.status.as_deref()),
        }
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    pub success: bool,
    pub product: ProductResponse,
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse {
        success: true,
        product: product.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_returns_201() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create()
            .once()
            .withf(|new| new.id.as_deref() == Some("p1") && new.name == "Soap")
            .return_once(|_| Ok(make_product("p1")));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "id": "p1", "name": "Soap", "price": 49.0 }))
            .send(&make_service(products))
            .await;

        let body: ProductCreatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert!(body.success);
        assert_eq!(body.product.id, "p1");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "id": "p1", "name": "Soap", "price": 49.0 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_blank_name_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create()
            .once()
            .return_once(|_| Err(ProductsServiceError::MissingRequiredData));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "id": "p1", "name": "", "price": 49.0 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_inactive_status_is_forwarded() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create()
            .once()
            .withf(|new| {
                new.status == Some(shopfront_app::domain::products::ProductStatus::Inactive)
            })
            .return_once(|_| Ok(make_product("p2")));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "id": "p2", "name": "Oil", "price": 9.0, "status": "inactive" }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }
}
