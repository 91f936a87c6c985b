//! Products

pub(crate) mod errors;
mod handlers;
mod models;

pub(crate) use handlers::*;
pub(crate) use models::ProductResponse;
