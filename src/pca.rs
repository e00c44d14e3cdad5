use log::debug;
use ndarray::{s, Array1, Array2};

use crate::center::center;
use crate::eig::{eig_sorted, normalize_basis, real_values, real_vectors};
use crate::error::{PcaError, Result};
use crate::projection::projection_matrix;

/// Result of a PCA run, shared by both computational routes.
#[derive(Debug, Clone)]
pub struct PcaOutput {
    /// Input data projected onto the principal subspace and mapped back
    /// into data space, with the mean re-added.
    /// Shape: (n_samples, n_features)
    pub reconstruction: Array2<f64>,
    /// Per-feature mean of the input data.
    /// Shape: (n_features)
    pub mean: Array1<f64>,
    /// Leading covariance eigenvalues, in descending order.
    /// Shape: (num_components)
    pub principal_values: Array1<f64>,
    /// The matching unit-length, sign-normalized eigenvectors as columns.
    /// Shape: (n_features, num_components)
    pub principal_components: Array2<f64>,
}

/// PCA reduction and reconstruction via the covariance matrix.
///
/// Centers `x` (shape (n_samples, n_features)), eigendecomposes the
/// covariance S = XcᵀXc / n_samples, and reconstructs the data from the
/// projection onto the top `num_components` eigenvectors. The cost is
/// dominated by the (n_features × n_features) eigendecomposition, so for
/// n_features ≫ n_samples prefer [`pca_high_dim`], which computes the same
/// result through a smaller intermediate.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the input is empty or `num_components` is
/// outside `1..=min(n_samples, n_features)`, `SingularMatrix` when the
/// selected components do not span a `num_components`-dimensional subspace,
/// and `Linalg` if a backend routine fails.
///
/// # Examples
///
/// ```
/// use dual_pca::pca;
/// use ndarray::array;
///
/// let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]];
/// let out = pca(&x, 1).unwrap();
/// assert_eq!(out.reconstruction.dim(), (4, 2));
/// assert!(out.principal_values[0] > 0.0);
/// ```
pub fn pca(x: &Array2<f64>, num_components: usize) -> Result<PcaOutput> {
    let (n_samples, n_features) = x.dim();
    validate_num_components(n_samples, n_features, num_components)?;
    debug!("direct PCA: {n_samples}x{n_features} input, {num_components} component(s)");

    let (centered, mean) = center(x)?;
    let covariance = centered.t().dot(&centered) / n_samples as f64;
    let (values, vectors) = eig_sorted(&covariance)?;

    let principal_values = real_values(&values.slice(s![..num_components]).to_owned());
    let mut components = real_vectors(&vectors.slice(s![.., ..num_components]).to_owned());
    normalize_basis(&mut components);

    let reconstruction = reconstruct(&centered, &mean, &components)?;
    Ok(PcaOutput {
        reconstruction,
        mean,
        principal_values,
        principal_components: components,
    })
}

/// PCA reduction and reconstruction via the dual (Gram-matrix) route.
///
/// Same contract as [`pca`], but built for n_features ≫ n_samples: the
/// covariance has rank at most n_samples, so its leading eigenvectors are
/// recovered from the (n_samples × n_samples) Gram matrix
/// M = XcXcᵀ / n_samples instead of the full covariance.
///
/// The sample-space eigenvectors of M are lifted into feature space as
/// B = Xcᵀ·U, and a second, small symmetric eigendecomposition of
/// BᵀB / n_samples re-orthogonalizes the lifted basis and recovers the
/// covariance eigenvalues (BᵀB equals n_samples·diag(λ) up to
/// floating-point noise). For n_features ≤ n_samples there is no efficiency
/// benefit, but the result still matches [`pca`] up to numerical tolerance.
///
/// # Errors
///
/// As for [`pca`].
pub fn pca_high_dim(x: &Array2<f64>, num_components: usize) -> Result<PcaOutput> {
    let (n_samples, n_features) = x.dim();
    validate_num_components(n_samples, n_features, num_components)?;
    debug!("dual PCA: {n_samples}x{n_features} input, {num_components} component(s)");

    let (centered, mean) = center(x)?;
    let gram = centered.dot(&centered.t()) / n_samples as f64;
    let (_, gram_vectors) = eig_sorted(&gram)?;

    // Only the first min(N, D) sample-space eigenvectors can carry
    // variance; any trailing ones pair with numerically-zero eigenvalues
    // and are discarded.
    let rank_bound = n_samples.min(n_features);
    let kept = real_vectors(&gram_vectors.slice(s![.., ..rank_bound]).to_owned());

    // Lift into feature space: each column of B = Xcᵀ·U is a (scaled)
    // eigenvector of the covariance. The second eigendecomposition runs on
    // the small (rank_bound × rank_bound) matrix BᵀB / n_samples, whose
    // eigenvalues are the covariance eigenvalues and whose eigenvectors
    // re-orthogonalize the lifted basis.
    let lifted = centered.t().dot(&kept);
    let small = lifted.t().dot(&lifted) / n_samples as f64;
    let (small_values, small_vectors) = eig_sorted(&small)?;

    let principal_values = real_values(&small_values.slice(s![..num_components]).to_owned());
    let rotation = real_vectors(&small_vectors.slice(s![.., ..num_components]).to_owned());
    let mut components = lifted.dot(&rotation);
    normalize_basis(&mut components);

    let reconstruction = reconstruct(&centered, &mean, &components)?;
    Ok(PcaOutput {
        reconstruction,
        mean,
        principal_values,
        principal_components: components,
    })
}

fn validate_num_components(
    n_samples: usize,
    n_features: usize,
    num_components: usize,
) -> Result<()> {
    if n_samples == 0 || n_features == 0 {
        return Err(PcaError::ShapeMismatch(format!(
            "input matrix must be non-empty, got {n_samples}x{n_features}"
        )));
    }
    let limit = n_samples.min(n_features);
    if num_components == 0 || num_components > limit {
        return Err(PcaError::ShapeMismatch(format!(
            "num_components must be in 1..={limit} for a {n_samples}x{n_features} input, got {num_components}"
        )));
    }
    Ok(())
}

/// Projects the centered data onto span(basis) and maps it back into data
/// space, re-adding the mean.
fn reconstruct(
    centered: &Array2<f64>,
    mean: &Array1<f64>,
    basis: &Array2<f64>,
) -> Result<Array2<f64>> {
    let projector = projection_matrix(basis)?;
    Ok(projector.dot(&centered.t()).reversed_axes() + mean)
}
