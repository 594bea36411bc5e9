//! Artifact download from object storage.

use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::context::MODEL_FILE;
use crate::error::StartupError;

/// Download the configured artifact blob to `<data_dir>/model.json`.
///
/// Fetches the object over the public storage endpoint and overwrites any
/// prior file at the destination, creating the data directory if needed.
/// There is no retry and no fallback: every failure is fatal to startup,
/// since the service must not serve traffic without a model.
pub async fn download_artifact(config: &Config) -> Result<PathBuf, StartupError> {
    let url = format!(
        "https://storage.googleapis.com/{}/{}",
        config.bucket, config.blob
    );
    let destination = config.data_dir.join(MODEL_FILE);

    let transfer_error = |reason: String| StartupError::StorageTransfer {
        bucket: config.bucket.clone(),
        blob: config.blob.clone(),
        reason,
    };

    fs::create_dir_all(&config.data_dir).map_err(|e| transfer_error(e.to_string()))?;

    let response = reqwest::get(&url)
        .await
        .map_err(|e| transfer_error(e.to_string()))?
        .error_for_status()
        .map_err(|e| transfer_error(e.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| transfer_error(e.to_string()))?;

    fs::write(&destination, &bytes).map_err(|e| transfer_error(e.to_string()))?;

    tracing::info!(url = %url, path = %destination.display(), "model artifact downloaded");
    Ok(destination)
}
