//! Products

mod errors;
mod models;
mod service;

pub use errors::ProductsServiceError;
pub use models::{NewProduct, Product, ProductPage, ProductStatus, ProductUpdate};
pub use service::{FirebaseProductsService, MockProductsService, ProductsService, DEFAULT_PAGE_LIMIT};
