//! Nystrom out-of-sample feature map
//!
//! Given the eigendecomposition (λ_k, v_k) of the training Gram matrix, the
//! mapped coordinate k of a point x is
//!
//!   (1 / sqrt(λ_k)) * Σ_i v_k[i] * K(x, x_i)
//!
//! where the x_i are the fixed training vectors (the support set). On a
//! support vector this reduces to sqrt(λ_k) * v_k[i], the i-th row of the
//! mapped training matrix.

use crate::core::Result;
use crate::features::gram::{build_gram, EigenDecomposition};
use crate::features::FeatureMap;
use crate::kernel::Kernel;
use std::sync::Arc;

/// Nystrom approximation of the kernel-induced feature space
pub struct NystromMap {
    kernel: Arc<dyn Kernel>,
    support: Vec<Vec<f64>>,
    eigen: EigenDecomposition,
}

impl NystromMap {
    /// Number of support vectors
    pub fn support_size(&self) -> usize {
        self.support.len()
    }

    /// The eigendecomposition this map is closed over
    pub fn eigen(&self) -> &EigenDecomposition {
        &self.eigen
    }
}

impl FeatureMap for NystromMap {
    fn map(&self, x: &[f64]) -> Vec<f64> {
        let kernel_row: Vec<f64> = self
            .support
            .iter()
            .map(|s| self.kernel.evaluate(x, s))
            .collect();

        (0..self.eigen.rank())
            .map(|k| {
                let column = self.eigen.eigenvectors().column(k);
                let projection: f64 = column
                    .iter()
                    .zip(kernel_row.iter())
                    .map(|(v, kx)| v * kx)
                    .sum();
                projection / self.eigen.eigenvalues()[k].sqrt()
            })
            .collect()
    }

    fn output_dim(&self) -> usize {
        self.eigen.rank()
    }
}

/// Build a Nystrom map over the raw training features and apply it to them
///
/// `raw_features` are bias-less training vectors; they become the map's
/// support set. Returns the map together with the mapped training vectors,
/// each with a trailing 1.0 bias coordinate appended.
pub fn apply_kernel(
    kernel: Arc<dyn Kernel>,
    raw_features: &[Vec<f64>],
) -> Result<(NystromMap, Vec<Vec<f64>>)> {
    let gram = build_gram(kernel.as_ref(), raw_features)?;
    let eigen = EigenDecomposition::of_gram(gram)?;

    let map = NystromMap {
        kernel,
        support: raw_features.to_vec(),
        eigen,
    };

    let mapped: Vec<Vec<f64>> = raw_features
        .iter()
        .map(|x| {
            let mut features = map.map(x);
            features.push(1.0);
            features
        })
        .collect();

    Ok((map, mapped))
}
