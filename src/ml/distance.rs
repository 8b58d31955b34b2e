//! # Distance Metrics
//!
//! Distance functions used to rank reference points against a query. The metric is a policy of
//! the regressor: [`Euclidean`] is the default, [`Manhattan`] is available through
//! [`KNNRegressor::with_metric`](crate::ml::k_nearest::KNNRegressor::with_metric).
//!
//! Every metric here is a true metric: non-negative, zero iff the vectors are element-wise equal,
//! symmetric, and it satisfies the triangle inequality. Vectors of different length are rejected
//! with [`KnnError::DimensionMismatch`] rather than silently truncated.
//!
//! ```rust
//! use gradecast::ml::distance::euclidean_distance;
//!
//! let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
//! assert_eq!(d, 5.0);
//! ```

use crate::error::KnnError;

/// A distance function over feature vectors of equal length.
pub trait Metric: Send + Sync {
    /// Returns the distance between `a` and `b`.
    ///
    /// # Errors
    ///
    /// [`KnnError::DimensionMismatch`] if `a.len() != b.len()`.
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError>;
}

/// Straight-line distance: the square root of the sum of squared per-dimension differences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

/// Taxicab distance: the sum of absolute per-dimension differences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Metric for Euclidean {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
        euclidean_distance(a, b)
    }
}

impl Metric for Manhattan {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
        check_dimensions(a, b)?;
        Ok(a.iter().zip(b.iter()).map(|(&x, &y)| (x - y).abs()).sum())
    }
}

/// Returns the Euclidean distance between two vectors of equal length.
///
/// # Errors
///
/// [`KnnError::DimensionMismatch`] if the lengths differ. `expected` is the length of `a`.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
    check_dimensions(a, b)?;
    Ok(euclidean_distance_sq(a, b).sqrt())
}

/// Squared Euclidean distance. Callers must have checked the lengths already.
fn euclidean_distance_sq(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum()
}

pub(crate) fn check_dimensions(a: &[f64], b: &[f64]) -> Result<(), KnnError> {
    if a.len() != b.len() {
        return Err(KnnError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}
