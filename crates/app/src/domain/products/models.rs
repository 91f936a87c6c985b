//! Product Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Listing/availability state of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Visible in listings and search.
    #[default]
    Active,

    /// Hidden from the storefront but retained in the store.
    Inactive,
}

/// Product Model
///
/// Records in the remote store are free-form JSON written by several
/// storefront iterations, so every field except the projected `id` is
/// defaulted when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,

    #[serde(default)]
    pub status: ProductStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Caller-assigned identifier; a millisecond-timestamp id is generated
    /// when absent.
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub main_image: Option<String>,
    pub discount_amount: Option<f64>,
    pub discount_percent: Option<f64>,
    pub status: Option<ProductStatus>,
}

/// Product Update Data
///
/// Serialized with absent fields skipped, this is exactly the shallow-merge
/// patch sent to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

/// One page of the product listing, as cached and as served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,

    /// Set when the page was served from the stale snapshot because the
    /// upstream fetch failed.
    #[serde(default)]
    pub stale: bool,
}
