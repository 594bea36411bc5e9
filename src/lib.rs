//! Penguin species classification service.
//!
//! A thin inference server: at startup it downloads a trained
//! gradient-boosted-tree artifact from object storage, loads it together
//! with the training-time column schema and the class label table, and then
//! serves predictions over HTTP.
//!
//! Startup is strictly sequential — configuration, download, load, listen —
//! and any failure along that path aborts the process before the listener
//! binds. After startup all state is immutable and shared read-only across
//! requests; see [`context::AppContext`].

pub mod api;
pub mod classifier;
pub mod config;
pub mod context;
pub mod encode;
pub mod error;
pub mod fetch;
pub mod models;
