//! Product response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopfront_app::domain::products::{Product, ProductStatus};

/// A product as served to the storefront.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,

    /// `"active"` or `"inactive"`
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
            category: product.category,
            main_image: product.main_image,
            discount_amount: product.discount_amount,
            discount_percent: product.discount_percent,
            status: match product.status {
                ProductStatus::Active => "active".to_string(),
                ProductStatus::Inactive => "inactive".to_string(),
            },
            created_at: product.created_at.map(|t| t.to_string()),
            updated_at: product.updated_at.map(|t| t.to_string()),
        }
    }
}

/// Map an optional status string from a request onto the domain enum,
/// defaulting anything unrecognised to active like the original storefront.
pub(crate) fn parse_status(status: Option<&str>) -> Option<ProductStatus> {
    status.map(|status| match status {
        "inactive" => ProductStatus::Inactive,
        _ => ProductStatus::Active,
    })
}
