//! Server configuration module

use clap::Parser;

use shopfront_app::context::AppConfig;

use crate::config::{
    firebase::FirebaseSettings, logging::LoggingConfig, server::ServerRuntimeConfig,
    uploads::UploadsConfig,
};

pub(crate) mod firebase;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod uploads;

/// Shopfront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "shopfront-json", about = "Shopfront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Remote database and blob-store settings.
    #[command(flatten)]
    pub firebase: FirebaseSettings,

    /// Upload storage settings.
    #[command(flatten)]
    pub uploads: UploadsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings consumed by the application core.
    #[must_use]
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.firebase.database_url.clone(),
            storage_bucket: self.firebase.storage_bucket.clone(),
            uploads_dir: self.uploads.uploads_dir.clone(),
        }
    }
}
