//! About-product posts

mod errors;
mod models;
mod service;

pub use errors::AboutServiceError;
pub use models::{AboutPost, NewAboutPost, MAX_CONTENT_CHARS};
pub use service::{AboutService, FirebaseAboutService, MockAboutService};
