use rayon::prelude::*;

use crate::error::KnnError;
use crate::ml::distance::{Euclidean, Metric};
use crate::ml::reference_store::ReferenceStore;

/// Neighbor count used when a caller does not ask for one.
pub const DEFAULT_K: usize = 5;

/// One selected reference point for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the point in the reference store.
    pub index: usize,
    pub distance: f64,
    pub label: f64,
}

/// A k-NN regressor that owns its reference data and predicts the mean label of the `k`
/// nearest reference points.
///
/// k-NN is lazy: construction only stores the reference set. Every prediction is an exhaustive
/// scan of the store, a stable sort by distance, and an average over the first `k` candidates.
/// Candidates at equal distance keep their store order, so predictions are deterministic even
/// on degenerate inputs.
///
/// # Type Parameters
/// - `M`: the distance metric. Defaults to [`Euclidean`].
///
/// The store is never mutated after construction, so a regressor can be shared between threads
/// (behind `&` or `Arc`) and queried concurrently without locking.
#[derive(Debug, Clone)]
pub struct KNNRegressor<M: Metric = Euclidean> {
    store: ReferenceStore,
    metric: M,
}

impl KNNRegressor<Euclidean> {
    /// Constructs a regressor over `store` using Euclidean distance.
    pub fn new(store: ReferenceStore) -> Self {
        Self::with_metric(store, Euclidean)
    }
}

impl<M: Metric> KNNRegressor<M> {
    /// Constructs a regressor over `store` using `metric` to rank neighbors.
    pub fn with_metric(store: ReferenceStore, metric: M) -> Self {
        Self { store, metric }
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    /// Predict the label of a single query point as the mean label of its `k` nearest neighbors.
    ///
    /// If `k` exceeds the store size every reference point is used.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`KnnError::EmptyReferenceStore`] if the store has no points.
    /// - [`KnnError::DimensionMismatch`] if `query` has the wrong length.
    /// - [`KnnError::InvalidK`] if `k == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use gradecast::ml::{KNNRegressor, LabeledPoint, ReferenceStore};
    ///
    /// let store = ReferenceStore::new(vec![
    ///     LabeledPoint::new(vec![90.0, 80.0, 70.0], 82.0),
    ///     LabeledPoint::new(vec![60.0, 60.0, 60.0], 60.0),
    ///     LabeledPoint::new(vec![95.0, 90.0, 85.0], 91.0),
    /// ])
    /// .unwrap();
    /// let knn = KNNRegressor::new(store);
    ///
    /// let predicted = knn.predict(&[92.0, 85.0, 80.0], 2).unwrap();
    /// assert_eq!(predicted, 86.5);
    /// ```
    pub fn predict(&self, query: &[f64], k: usize) -> Result<f64, KnnError> {
        let neighbors = self.neighbors(query, k)?;
        Ok(mean_label(&neighbors))
    }

    /// Predict labels for multiple query points in parallel.
    ///
    /// Either every query succeeds or the error of the first failing query is returned.
    pub fn predict_batch(&self, queries: &[Vec<f64>], k: usize) -> Result<Vec<f64>, KnnError> {
        let results: Vec<Result<f64, KnnError>> =
            queries.par_iter().map(|q| self.predict(q, k)).collect();
        // Sequential collect so the reported error is always the lowest failing index.
        results.into_iter().collect()
    }

    /// Returns the `min(k, store size)` nearest reference points, closest first.
    ///
    /// Errors are the same as [`predict`](Self::predict).
    pub fn neighbors(&self, query: &[f64], k: usize) -> Result<Vec<Neighbor>, KnnError> {
        let dim = self.store.dimension().ok_or(KnnError::EmptyReferenceStore)?;
        if query.len() != dim {
            return Err(KnnError::DimensionMismatch {
                expected: dim,
                found: query.len(),
            });
        }
        if k == 0 {
            return Err(KnnError::InvalidK(k));
        }

        let mut candidates = self
            .store
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| {
                Ok(Neighbor {
                    index,
                    distance: self.metric.distance(query, &point.features)?,
                    label: point.label,
                })
            })
            .collect::<Result<Vec<_>, KnnError>>()?;

        // `sort_by` is stable: equidistant candidates stay in store order.
        candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        candidates.truncate(k);
        Ok(candidates)
    }
}

/// Arithmetic mean of the neighbor labels, summed in neighbor order.
fn mean_label(neighbors: &[Neighbor]) -> f64 {
    let sum: f64 = neighbors.iter().map(|n| n.label).sum();
    sum / neighbors.len() as f64
}
