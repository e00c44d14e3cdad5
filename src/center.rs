use ndarray::{Array1, Array2, Axis};

use crate::error::{PcaError, Result};

/// Mean-centers a dataset of shape (n_samples, n_features).
///
/// Returns the centered copy together with the per-feature arithmetic mean;
/// the input is left untouched. The centered data has (numerically) zero
/// column means, which both PCA routes rely on.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the dataset has no rows.
///
/// # Examples
///
/// ```
/// use dual_pca::center;
/// use ndarray::array;
///
/// let x = array![[1.0, 2.0], [3.0, 4.0]];
/// let (centered, mean) = center(&x).unwrap();
/// assert_eq!(mean, array![2.0, 3.0]);
/// assert_eq!(centered, array![[-1.0, -1.0], [1.0, 1.0]]);
/// ```
pub fn center(x: &Array2<f64>) -> Result<(Array2<f64>, Array1<f64>)> {
    let mean = x.mean_axis(Axis(0)).ok_or_else(|| {
        PcaError::ShapeMismatch("cannot center a dataset with zero samples".to_string())
    })?;
    Ok((x - &mean, mean))
}
