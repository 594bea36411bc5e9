use serde::{Deserialize, Serialize};

/// Island an observation was recorded on. Serde enum membership is the only
/// validation the field gets or needs; requests with any other value are
/// rejected at the HTTP boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Island {
    Torgersen,
    Biscoe,
    Dream,
}

impl Island {
    /// Value part of the `island_<value>` one-hot column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Torgersen => "Torgersen",
            Self::Biscoe => "Biscoe",
            Self::Dream => "Dream",
        }
    }
}

/// Recorded sex of the penguin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Value part of the `sex_<value>` one-hot column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// One prediction request. Four continuous measurements, the observation
/// year, and the two categorical fields; there are no cross-field
/// invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenguinFeatures {
    pub bill_length_mm: f32,
    pub bill_depth_mm: f32,
    pub flipper_length_mm: f32,
    pub body_mass_g: f32,
    pub year: i32,
    pub sex: Sex,
    pub island: Island,
}

/// A resolved prediction: the raw class index and the label it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub prediction: usize,
    pub species: String,
}

/// Body of a `/predict` response.
///
/// Both shapes are served under HTTP 200 — callers must inspect the body,
/// not the status, to tell a prediction from a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Ok(PredictionOutcome),
    Failed { error: String, details: String },
}
