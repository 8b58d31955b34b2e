//! The immutable set of labeled examples a k-NN regressor searches.
//!
//! A store is built once from a training split and never mutated afterwards. The order in which
//! points arrive is kept verbatim: it is the tie-break order used when two reference points are
//! equidistant from a query.

use crate::error::KnnError;

/// A feature vector paired with its ground-truth label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    pub features: Vec<f64>,
    pub label: f64,
}

impl LabeledPoint {
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label }
    }
}

/// Ordered, read-only collection of [`LabeledPoint`]s sharing one dimensionality.
///
/// An empty store is valid to construct; predictions against it fail with
/// [`KnnError::EmptyReferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    points: Vec<LabeledPoint>,
    dimension: Option<usize>,
}

impl ReferenceStore {
    /// Builds a store from `points`, preserving their order.
    ///
    /// # Errors
    ///
    /// - [`KnnError::EmptyFeatureVector`] if any point has no features.
    /// - [`KnnError::DimensionMismatch`] if a point's length differs from the first point's.
    pub fn new(points: Vec<LabeledPoint>) -> Result<Self, KnnError> {
        let dimension = points.first().map(|p| p.features.len());

        if let Some(dim) = dimension {
            for point in &points {
                if point.features.is_empty() {
                    return Err(KnnError::EmptyFeatureVector);
                }
                if point.features.len() != dim {
                    return Err(KnnError::DimensionMismatch {
                        expected: dim,
                        found: point.features.len(),
                    });
                }
            }
        }

        log::debug!(
            "built reference store with {} points of dimension {:?}",
            points.len(),
            dimension
        );

        Ok(Self { points, dimension })
    }

    /// Builds a store from the first `boundary` points of `points` (the training part of a split).
    ///
    /// A boundary past the end takes every point.
    pub fn from_split(mut points: Vec<LabeledPoint>, boundary: usize) -> Result<Self, KnnError> {
        points.truncate(boundary);
        Self::new(points)
    }

    /// Builds a store from raw records using `extract` to produce each point.
    pub fn from_records<R, F>(records: &[R], extract: F) -> Result<Self, KnnError>
    where
        F: Fn(&R) -> LabeledPoint,
    {
        Self::new(records.iter().map(extract).collect())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of features per point, or `None` for an empty store.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Smallest and largest label in the store, or `None` if it is empty.
    pub fn label_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.label;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(p.label), hi.max(p.label))),
        )
    }
}
