//! UPI service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum UpiServiceError {
    #[error("invalid UPI id format")]
    InvalidFormat,

    #[error("storage error")]
    Store(#[from] StoreError),

    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),
}
