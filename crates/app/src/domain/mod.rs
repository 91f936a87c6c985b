//! Per-resource domain services.

pub mod about;
pub mod products;
pub mod reviews;
pub mod upi;
