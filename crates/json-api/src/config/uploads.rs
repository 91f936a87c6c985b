//! Uploads Config

use std::path::PathBuf;

use clap::Args;

/// Upload storage settings.
#[derive(Debug, Args)]
pub struct UploadsConfig {
    /// Directory for local-disk uploads, served under `/uploads`
    #[arg(long, env = "UPLOADS_DIR", default_value = "uploads")]
    pub uploads_dir: PathBuf,
}
