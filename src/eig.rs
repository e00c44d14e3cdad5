use log::warn;
use ndarray::{s, Array1, Array2, Axis};
use ndarray_linalg::{c64, Eig};

use crate::error::{PcaError, Result};

/// Largest imaginary magnitude that is discarded silently when coercing
/// eigendecomposition output to real. Anything above it is reported through
/// `log::warn!` before the real parts are used; a symmetric input stays far
/// below this bound.
pub const IMAG_TOLERANCE: f64 = 1e-9;

/// Columns with a Euclidean norm at or below this are treated as
/// numerically zero and left unnormalized.
const ZERO_NORM_GUARD: f64 = 1e-12;

/// Full eigendecomposition of a square matrix, sorted by descending
/// eigenvalue.
///
/// The general (non-symmetric-aware) LAPACK routine is used, so the output
/// is complex-valued; for the symmetric matrices PCA feeds in, the
/// imaginary parts are floating-point noise. Coerce with [`real_values`] /
/// [`real_vectors`] before further numeric use.
///
/// Sorting builds one index permutation over the eigenvalue real parts and
/// applies it to the eigenvalue vector and the eigenvector columns alike,
/// so value `i` always stays paired with column `i`.
///
/// No sign or scale normalization is applied here; callers that need a
/// reproducible basis apply [`normalize_basis`].
///
/// # Errors
///
/// Returns `ShapeMismatch` for a non-square input and `Linalg` if the
/// backend routine fails.
pub fn eig_sorted(matrix: &Array2<f64>) -> Result<(Array1<c64>, Array2<c64>)> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(PcaError::ShapeMismatch(format!(
            "eigendecomposition requires a square matrix, got {rows}x{cols}"
        )));
    }

    let (values, vectors) = matrix.eig()?;

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[j].re.total_cmp(&values[i].re));

    Ok((
        values.select(Axis(0), &order),
        vectors.select(Axis(1), &order),
    ))
}

/// Real parts of a complex eigenvalue vector.
///
/// Emits a warning when the largest discarded imaginary magnitude exceeds
/// [`IMAG_TOLERANCE`], which signals a non-symmetric or ill-conditioned
/// input; the computation proceeds with the real parts either way.
pub fn real_values(values: &Array1<c64>) -> Array1<f64> {
    let worst = values.iter().map(|v| v.im.abs()).fold(0.0, f64::max);
    if worst > IMAG_TOLERANCE {
        warn!(
            "discarding eigenvalue imaginary parts up to {worst:.3e} (tolerance {IMAG_TOLERANCE:.0e}); \
             input may be non-symmetric or ill-conditioned"
        );
    }
    values.mapv(|v| v.re)
}

/// Real parts of a complex eigenvector matrix; same advisory as
/// [`real_values`].
pub fn real_vectors(vectors: &Array2<c64>) -> Array2<f64> {
    let worst = vectors.iter().map(|v| v.im.abs()).fold(0.0, f64::max);
    if worst > IMAG_TOLERANCE {
        warn!(
            "discarding eigenvector imaginary parts up to {worst:.3e} (tolerance {IMAG_TOLERANCE:.0e}); \
             input may be non-symmetric or ill-conditioned"
        );
    }
    vectors.mapv(|v| v.re)
}

/// Applies the crate's sign and scale convention to a basis, in place.
///
/// Each column is divided by its Euclidean norm, then negated if its first
/// coordinate is negative. This makes the basis independent of the
/// eigensolver's arbitrary sign choice, so the two PCA routes produce
/// directly comparable components. Columns that are numerically zero
/// (norm ≤ 1e-12, i.e. zero-variance directions) are left untouched.
pub fn normalize_basis(basis: &mut Array2<f64>) {
    if basis.nrows() == 0 {
        return;
    }
    for i in 0..basis.ncols() {
        let mut column = basis.slice_mut(s![.., i]);
        let norm = column.dot(&column).sqrt();
        if norm > ZERO_NORM_GUARD {
            column.mapv_inplace(|v| v / norm);
        }
        if column[0] < 0.0 {
            column.mapv_inplace(|v| -v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn eigenvalues_come_out_descending() {
        let m = array![[2.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 3.0]];
        let (values, _) = eig_sorted(&m).unwrap();
        let values = real_values(&values);
        assert_abs_diff_eq!(values[0], 5.0, epsilon = 1e-10);
        assert_abs_diff_eq!(values[1], 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(values[2], 2.0, epsilon = 1e-10);
    }

    #[test]
    fn sorting_keeps_pairs_together() {
        // M v_i must still equal lambda_i v_i after the reordering.
        let m = array![
            [4.0, 1.0, 0.5],
            [1.0, 3.0, 0.25],
            [0.5, 0.25, 1.0]
        ];
        let (values, vectors) = eig_sorted(&m).unwrap();
        let values = real_values(&values);
        let vectors = real_vectors(&vectors);

        for i in 0..3 {
            let v = vectors.column(i);
            let residual = m.dot(&v) - values[i] * &v.to_owned();
            for &r in residual.iter() {
                assert_abs_diff_eq!(r, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn non_square_input_is_rejected() {
        let m = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            eig_sorted(&m),
            Err(PcaError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn real_coercion_preserves_real_parts() {
        let values = array![c64::new(3.0, 1e-15), c64::new(-1.0, 0.0)];
        let coerced = real_values(&values);
        assert_eq!(coerced, array![3.0, -1.0]);
    }

    #[test]
    fn normalized_columns_are_unit_length_with_non_negative_lead() {
        let mut basis = array![[-3.0, 0.0], [4.0, 2.0]];
        normalize_basis(&mut basis);

        for i in 0..2 {
            let column = basis.column(i);
            assert_abs_diff_eq!(column.dot(&column), 1.0, epsilon = 1e-12);
        }
        // First column was negated so its leading coordinate is positive.
        assert_abs_diff_eq!(basis[[0, 0]], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(basis[[1, 0]], -0.8, epsilon = 1e-12);
        // Second column has a zero lead, which counts as non-negative.
        assert_abs_diff_eq!(basis[[1, 1]], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_columns_survive_normalization_untouched() {
        let mut basis = array![[0.0], [0.0]];
        normalize_basis(&mut basis);
        assert_eq!(basis, array![[0.0], [0.0]]);
    }
}
