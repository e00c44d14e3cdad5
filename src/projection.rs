use ndarray::Array2;
use ndarray_linalg::Inverse;

use crate::error::{PcaError, Result};

/// Orthogonal projector onto the column space of `basis`.
///
/// For a basis B of shape (n_features, m) with linearly independent
/// columns, returns P = B (BᵀB)⁻¹ Bᵀ of shape (n_features, n_features).
/// The columns do not need to be orthonormal. P is symmetric and
/// idempotent, and P·v = v for any v in span(B).
///
/// # Errors
///
/// Returns `ShapeMismatch` when the basis has no columns or more columns
/// than rows, and `SingularMatrix` when BᵀB is not invertible (duplicate or
/// otherwise linearly dependent columns, e.g. a basis wider than the rank
/// of the data it came from).
///
/// # Examples
///
/// ```
/// use dual_pca::projection_matrix;
/// use ndarray::array;
///
/// // Projector onto the x-y plane of R^3.
/// let basis = array![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]];
/// let p = projection_matrix(&basis).unwrap();
/// assert_eq!(p.dim(), (3, 3));
/// assert!((p[[2, 2]]).abs() < 1e-12);
/// ```
pub fn projection_matrix(basis: &Array2<f64>) -> Result<Array2<f64>> {
    let (rows, cols) = basis.dim();
    if cols == 0 || cols > rows {
        return Err(PcaError::ShapeMismatch(format!(
            "projection basis must have between 1 and {rows} columns, got {cols}"
        )));
    }

    let gram = basis.t().dot(basis);
    let gram_inv = gram.inv().map_err(|_| {
        PcaError::SingularMatrix(format!(
            "basis gram matrix ({cols}x{cols}) is not invertible; basis columns are linearly dependent"
        ))
    })?;

    Ok(basis.dot(&gram_inv).dot(&basis.t()))
}
