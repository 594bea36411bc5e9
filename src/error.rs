//! Error taxonomy: fatal startup failures and recoverable prediction
//! failures.

use std::path::PathBuf;

use thiserror::Error;

/// Failures during process initialization. None of these are retried or
/// recovered — `main` propagates them and exits non-zero before the HTTP
/// listener binds, so the service never serves traffic with partial state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("missing required environment variable {0}")]
    Configuration(&'static str),

    #[error("invalid value {value:?} for environment variable {var}")]
    InvalidConfiguration { var: &'static str, value: String },

    #[error("failed to download gs://{bucket}/{blob}: {reason}")]
    StorageTransfer {
        bucket: String,
        blob: String,
        reason: String,
    },

    #[error("failed to load model artifact from {path:?}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("failed to load metadata from {path:?}: {reason}")]
    MetadataLoad { path: PathBuf, reason: String },
}

/// Failures in the per-request encode → predict → lookup path.
///
/// These are always recovered at the request boundary: the predict handler
/// converts them into a 200 response with an error body, never an HTTP
/// error status.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("feature vector has {actual} columns but the model expects {expected}")]
    FeatureWidth { expected: usize, actual: usize },

    #[error("predicted class {class} has no label (label table has {known} entries)")]
    UnknownClass { class: usize, known: usize },
}
