//! Runtime configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::StartupError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "data";

/// Service configuration, read once from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the HTTP listener (from PORT, default 8080).
    pub port: u16,
    /// Bucket holding the model artifact (from GCS_BUCKET_NAME, required).
    pub bucket: String,
    /// Object name of the artifact within the bucket (from GCS_BLOB_NAME, required).
    pub blob: String,
    /// Local directory for the artifact and metadata files
    /// (from PENGUIN_DATA_DIR, default `data`).
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The bucket and blob names must be present and non-empty; without them
    /// the service has no model to serve and startup must not proceed.
    pub fn from_env() -> Result<Self, StartupError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| StartupError::InvalidConfiguration { var: "PORT", value })?,
            Err(_) => DEFAULT_PORT,
        };

        let bucket = required_var("GCS_BUCKET_NAME")?;
        let blob = required_var("GCS_BLOB_NAME")?;

        let data_dir = env::var("PENGUIN_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Ok(Self {
            port,
            bucket,
            blob,
            data_dir,
        })
    }
}

fn required_var(name: &'static str) -> Result<String, StartupError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(StartupError::Configuration(name)),
    }
}
