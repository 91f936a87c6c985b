//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    cache::ResponseCache,
    domain::{
        about::{AboutService, FirebaseAboutService},
        products::{FirebaseProductsService, ProductsService},
        reviews::{FirebaseReviewsService, ReviewsService},
        upi::{FirebaseUpiService, UpiService},
    },
    store::{FirebaseClient, FirebaseConfig, FirebaseStorageClient, StoreError},
    uploads::{LocalDiskStorage, RemoteBlobStorage, UploadPipeline},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build store client")]
    Store(#[source] StoreError),
}

/// Settings the application core needs, independent of the HTTP surface.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote database base URL.
    pub database_url: String,

    /// Blob-store bucket; uploads go to local disk when unset.
    pub storage_bucket: Option<String>,

    /// Directory for local-disk uploads.
    pub uploads_dir: PathBuf,
}

/// Shared handles to every service, passed by reference to handlers
/// instead of living as module-level singletons.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub about: Arc<dyn AboutService>,
    pub upi: Arc<dyn UpiService>,
    pub uploads: Arc<UploadPipeline>,
}

impl AppContext {
    /// Build the application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote store client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let store = Arc::new(
            FirebaseClient::new(FirebaseConfig {
                database_url: config.database_url.clone(),
            })
            .map_err(AppInitError::Store)?,
        );

        let cache = Arc::new(ResponseCache::new());

        let uploads = match &config.storage_bucket {
            Some(bucket) => Arc::new(UploadPipeline::new(Arc::new(RemoteBlobStorage::new(
                Arc::new(FirebaseStorageClient::new(bucket.clone())),
            )))),
            None => Arc::new(UploadPipeline::new(Arc::new(LocalDiskStorage::new(
                config.uploads_dir.clone(),
            )))),
        };

        Ok(Self {
            products: Arc::new(FirebaseProductsService::new(store.clone(), cache.clone())),
            reviews: Arc::new(FirebaseReviewsService::new(store.clone())),
            about: Arc::new(FirebaseAboutService::new(store.clone())),
            upi: Arc::new(FirebaseUpiService::new(store, cache)),
            uploads,
        })
    }
}
