pub mod distance;
pub mod k_nearest;
pub mod metrics;
pub mod reference_store;


// Re-export public types and functions
pub use distance::{euclidean_distance, Euclidean, Manhattan, Metric};
pub use k_nearest::{KNNRegressor, Neighbor, DEFAULT_K};
pub use metrics::mean_squared_error;
pub use reference_store::{LabeledPoint, ReferenceStore};
