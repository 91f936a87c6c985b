//! Remote store Config

use clap::Args;

/// Remote database and blob-store settings.
#[derive(Debug, Args)]
pub struct FirebaseSettings {
    /// Realtime database base URL
    #[arg(long, env = "FIREBASE_DB_URL")]
    pub database_url: String,

    /// Storage bucket for uploads; local disk is used when unset
    #[arg(long, env = "FIREBASE_STORAGE_BUCKET")]
    pub storage_bucket: Option<String>,
}
