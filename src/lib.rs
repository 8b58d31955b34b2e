//! # gradecast
//!
//! Predicts a student's final score from attendance, homework and test percentages with
//! k-nearest-neighbors regression.
//!
//! - [`ml`]: distance metrics, the immutable [`ReferenceStore`] and the [`KNNRegressor`].
//! - [`data`]: synthetic student records, train/test split and CSV export.
//! - [`service`]: JSON request/response adapter over a built regressor.
//! - [`http`]: axum routes serving the form and JSON predictions over HTTP.
//! - [`pipeline`]: generate, export, split, build and evaluate in one call.

pub mod config;
pub mod data;
pub mod error;
pub mod http;
pub mod ml;
pub mod pipeline;
pub mod service;

pub use config::PipelineConfig;
pub use error::{Error, KnnError, Result};
pub use ml::{euclidean_distance, KNNRegressor, LabeledPoint, ReferenceStore};
pub use service::PredictionService;
