// Principal component analysis via covariance and Gram-matrix eigendecomposition

#![doc = include_str!("../README.md")]

pub mod center;
pub mod eig;
pub mod error;
pub mod pca;
pub mod projection;

pub use center::center;
pub use eig::{eig_sorted, normalize_basis, real_values, real_vectors, IMAG_TOLERANCE};
pub use error::{PcaError, Result};
pub use pca::{pca, pca_high_dim, PcaOutput};
pub use projection::projection_matrix;
