use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::context::AppContext;
use crate::models::{PenguinFeatures, PredictResponse};

// ============================================================
// Liveness
// ============================================================

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Penguin Classification API is running." }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Prediction
// ============================================================

/// Classify one penguin.
///
/// Bodies failing type or enum validation are rejected by the `Json`
/// extractor before this handler runs. Everything past that point answers
/// with HTTP 200: a failure inside the encode/predict/lookup path is logged
/// and reported in the response body, so callers must inspect the body
/// rather than the status.
pub async fn predict(
    State(context): State<Arc<AppContext>>,
    Json(features): Json<PenguinFeatures>,
) -> Json<PredictResponse> {
    match context.classify(&features) {
        Ok(outcome) => {
            tracing::info!(
                class = outcome.prediction,
                species = %outcome.species,
                "prediction made"
            );
            Json(PredictResponse::Ok(outcome))
        }
        Err(e) => {
            tracing::error!("prediction failed: {e}");
            Json(PredictResponse::Failed {
                error: "Prediction failed".to_string(),
                details: e.to_string(),
            })
        }
    }
}
