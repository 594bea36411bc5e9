//! Boundary value objects for the prediction API.
//!
//! [`PenguinFeatures`] is the request entity: its field types and the two
//! bounded enums carry the whole validation contract, so a body that
//! deserializes is a valid request. [`PredictResponse`] is the per-request
//! response entity; nothing here outlives the request that produced it.

mod penguin;

pub use penguin::*;
