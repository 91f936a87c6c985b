//! UPI singleton service.
//!
//! One record under the fixed key `upi/current`; a singleton by convention.
//! Reads are cached for a minute so payment-page loads do not hammer the
//! store while edits still show up quickly.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use serde_json::json;
use tracing::warn;

use crate::{
    cache::{ResponseCache, UPI_TTL},
    domain::upi::{
        errors::UpiServiceError,
        models::{is_valid_upi_id, UpiRecord},
    },
    store::StoreClient,
};

const UPI_PATH: &str = "upi/current";
const UPI_CACHE_KEY: &str = "upi:current";

#[automock]
#[async_trait]
pub trait UpiService: Send + Sync {
    /// The configured UPI id, or `None` when unset. Absence is not an
    /// error.
    async fn get(&self) -> Result<Option<String>, UpiServiceError>;

    /// Validate and store a new UPI id, preserving `created_at` on
    /// overwrite.
    async fn set(&self, upi_id: &str) -> Result<UpiRecord, UpiServiceError>;

    /// Remove the singleton record.
    async fn clear(&self) -> Result<(), UpiServiceError>;
}

/// UPI service backed by the remote document store.
pub struct FirebaseUpiService {
    store: Arc<dyn StoreClient>,
    cache: Arc<ResponseCache>,
}

impl FirebaseUpiService {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>, cache: Arc<ResponseCache>) -> Self {
        Self { store, cache }
    }
}

#[async_trait]
impl UpiService for FirebaseUpiService {
    async fn get(&self) -> Result<Option<String>, UpiServiceError> {
        if let Some(cached) = self.cache.get(UPI_CACHE_KEY) {
            return Ok(serde_json::from_value(cached).unwrap_or_default());
        }

        let value = self.store.get_json(UPI_PATH).await?;

        let upi_id = if value.is_null() {
            None
        } else {
            match serde_json::from_value::<UpiRecord>(value) {
                Ok(record) => Some(record.upi_id),
                Err(error) => {
                    warn!("stored UPI record does not decode: {error}");

                    None
                }
            }
        };

        self.cache.set(UPI_CACHE_KEY, json!(upi_id), UPI_TTL);

        Ok(upi_id)
    }

    async fn set(&self, upi_id: &str) -> Result<UpiRecord, UpiServiceError> {
        if !is_valid_upi_id(upi_id) {
            return Err(UpiServiceError::InvalidFormat);
        }

        let now = Timestamp::now();

        let existing = self.store.get_json(UPI_PATH).await?;
        let created_at = serde_json::from_value::<UpiRecord>(existing)
            .ok()
            .and_then(|record| record.created_at)
            .or(Some(now));

        let record = UpiRecord {
            upi_id: upi_id.to_string(),
            created_at,
            updated_at: Some(now),
        };

        self.store
            .put_json(UPI_PATH, &serde_json::to_value(&record)?)
            .await?;

        self.cache
            .set(UPI_CACHE_KEY, json!(Some(record.upi_id.clone())), UPI_TTL);

        Ok(record)
    }

    async fn clear(&self) -> Result<(), UpiServiceError> {
        self.store.delete(UPI_PATH).await?;

        self.cache.remove(UPI_CACHE_KEY);

        Ok(())
    }
}
