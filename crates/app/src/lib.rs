//! Shopfront application core.
//!
//! Everything the HTTP surface needs that is not HTTP: the remote store
//! client, the response cache and its background warmer, the per-resource
//! domain services, and the upload pipeline. The server crate wires these
//! together through [`context::AppContext`].

pub mod cache;
pub mod context;
pub mod domain;
pub mod store;
pub mod uploads;
pub mod warm;
