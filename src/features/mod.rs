//! Kernel-induced feature mapping
//!
//! Builds a Gram matrix over the training set, eigendecomposes it, and
//! derives a Nystrom feature map that projects raw points into the
//! approximate kernel feature space.

pub mod gram;
pub mod nystrom;

pub use gram::{build_gram, EigenDecomposition, EIGENVALUE_CUTOFF};
pub use nystrom::{apply_kernel, NystromMap};

/// Map from raw (bias-less) feature vectors into a model feature space
///
/// Implementations capture whatever state they need (support set,
/// eigendecomposition) by value; the bias coordinate is appended by the
/// caller after mapping, never by the map itself.
pub trait FeatureMap: Send + Sync {
    /// Map a raw point into the feature space
    fn map(&self, x: &[f64]) -> Vec<f64>;

    /// Dimension of the mapped space, excluding the bias coordinate
    fn output_dim(&self) -> usize;
}

/// Identity map: the model's initial, linear feature space
#[derive(Debug, Clone, Copy)]
pub struct IdentityMap {
    dim: usize,
}

impl IdentityMap {
    /// Create an identity map over `dim` raw features
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl FeatureMap for IdentityMap {
    fn map(&self, x: &[f64]) -> Vec<f64> {
        x.to_vec()
    }

    fn output_dim(&self) -> usize {
        self.dim
    }
}
