use thiserror::Error;

/// Errors raised by the k-NN core: distance computation, store construction and prediction.
///
/// All of these are caller-input errors. Retrying with the same input cannot succeed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnnError {
    /// Two feature vectors (or a query and the store) disagree on dimensionality.
    #[error("dimension mismatch: expected {expected} features, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// A prediction was attempted against a store with no reference points.
    #[error("reference store is empty")]
    EmptyReferenceStore,
    /// The neighbor count must be at least 1.
    #[error("invalid neighbor count k = {0}, must be > 0")]
    InvalidK(usize),
    /// A reference point was supplied with zero features.
    #[error("feature vectors must have at least one dimension")]
    EmptyFeatureVector,
}

/// Crate-level error covering the core plus the data, evaluation and service layers.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Knn(#[from] KnnError),
    #[error("invalid split ratio {0}, must be within [0, 1]")]
    InvalidSplitRatio(f64),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("input is empty")]
    EmptyInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenient alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
