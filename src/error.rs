use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// The error type for PCA operations.
#[derive(Debug, Error)]
pub enum PcaError {
    /// Input dimensions are inconsistent with the requested operation.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A basis Gram matrix could not be inverted because the basis columns
    /// are linearly dependent.
    #[error("singular matrix: {0}")]
    SingularMatrix(String),

    /// The underlying LAPACK routine failed.
    #[error("linear algebra backend error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Result type alias for PCA operations.
pub type Result<T> = std::result::Result<T, PcaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_display_carries_context() {
        let err = PcaError::ShapeMismatch("expected a square matrix, got 3x4".to_string());
        assert!(err.to_string().contains("3x4"));
        assert!(err.to_string().starts_with("shape mismatch"));
    }
}
