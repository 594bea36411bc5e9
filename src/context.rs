//! Shared application state, loaded once before the listener starts.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::classifier::GbTreeModel;
use crate::encode;
use crate::error::{PredictionError, StartupError};
use crate::models::{PenguinFeatures, PredictionOutcome};

pub const MODEL_FILE: &str = "model.json";
pub const PREPROCESS_META_FILE: &str = "preprocess_meta.json";
pub const LABEL_CLASSES_FILE: &str = "label_classes.json";

/// Sidecar document carrying the encoded columns the classifier was trained
/// on, in training order.
#[derive(Debug, Deserialize)]
struct PreprocessMeta {
    feature_columns: Vec<String>,
}

/// Everything request handlers need: the classifier, the column schema the
/// encoder aligns to, and the class label table.
///
/// Constructed exactly once during startup and shared across requests behind
/// an `Arc`; nothing mutates it afterwards, so handlers read it without
/// locking.
#[derive(Debug)]
pub struct AppContext {
    model: GbTreeModel,
    feature_columns: Vec<String>,
    labels: Vec<String>,
}

impl AppContext {
    /// Load the artifact and both metadata documents from `data_dir`.
    ///
    /// All three files are required; a missing or malformed one fails
    /// startup rather than leaving the service partially ready.
    pub fn load(data_dir: &Path) -> Result<Self, StartupError> {
        let model_path = data_dir.join(MODEL_FILE);
        let bytes = fs::read(&model_path).map_err(|e| StartupError::ModelLoad {
            path: model_path.clone(),
            reason: e.to_string(),
        })?;
        let model = GbTreeModel::from_json(&bytes).map_err(|e| StartupError::ModelLoad {
            path: model_path.clone(),
            reason: format!("{e:#}"),
        })?;

        let meta: PreprocessMeta = read_json(&data_dir.join(PREPROCESS_META_FILE))?;
        let labels: Vec<String> = read_json(&data_dir.join(LABEL_CLASSES_FILE))?;

        tracing::info!(
            features = meta.feature_columns.len(),
            classes = model.num_classes(),
            labels = labels.len(),
            "model and metadata loaded"
        );

        Ok(Self {
            model,
            feature_columns: meta.feature_columns,
            labels,
        })
    }

    /// Encoded columns the model was trained on, in training order.
    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    /// Run the full encode → predict → label-lookup pipeline for one request.
    pub fn classify(
        &self,
        features: &PenguinFeatures,
    ) -> Result<PredictionOutcome, PredictionError> {
        let vector = encode::encode(features, &self.feature_columns);
        let class = self.model.predict(&vector)?;
        let species = self
            .labels
            .get(class)
            .ok_or(PredictionError::UnknownClass {
                class,
                known: self.labels.len(),
            })?;
        Ok(PredictionOutcome {
            prediction: class,
            species: species.clone(),
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StartupError> {
    let bytes = fs::read(path).map_err(|e| StartupError::MetadataLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| StartupError::MetadataLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
