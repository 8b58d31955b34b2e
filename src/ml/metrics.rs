use crate::error::{Error, Result};

/// Mean squared error between ground-truth labels and predictions.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if both slices are empty.
/// - [`Error::LengthMismatch`] if the slices differ in length.
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::LengthMismatch {
            left: y_true.len(),
            right: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(Error::EmptyInput);
    }

    let sum: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| (t - p) * (t - p))
        .sum();
    Ok(sum / y_true.len() as f64)
}
