//! Gram matrix construction and eigendecomposition

use crate::core::{ModelError, Result};
use crate::kernel::Kernel;
use nalgebra::DMatrix;
use std::cmp::Ordering;

/// Relative eigenvalue cutoff: components with eigenvalue below
/// `EIGENVALUE_CUTOFF * λ_max` are dropped as numerical noise.
pub const EIGENVALUE_CUTOFF: f64 = 1e-10;

/// Build the n×n Gram matrix over a training feature set
///
/// Each unordered pair is evaluated once and mirrored, so the result is
/// symmetric by construction regardless of floating-point quirks in the
/// kernel.
pub fn build_gram(kernel: &dyn Kernel, features: &[Vec<f64>]) -> Result<DMatrix<f64>> {
    if features.is_empty() {
        return Err(ModelError::EmptyDataset);
    }

    let n = features.len();
    let mut gram = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in i..n {
            let value = kernel.evaluate(&features[i], &features[j]);
            gram[(i, j)] = value;
            gram[(j, i)] = value;
        }
    }
    Ok(gram)
}

/// Truncated eigendecomposition of a Gram matrix
///
/// Eigenvalues are sorted descending; only components above the stability
/// cutoff are retained. Each eigenvector's sign is normalized so its
/// largest-magnitude component is positive, which makes rebuilds of the same
/// decomposition reproducible despite the inherent sign ambiguity.
#[derive(Debug, Clone)]
pub struct EigenDecomposition {
    eigenvalues: Vec<f64>,
    eigenvectors: DMatrix<f64>,
}

impl EigenDecomposition {
    /// Decompose a symmetric Gram matrix, retaining stable components
    pub fn of_gram(gram: DMatrix<f64>) -> Result<Self> {
        let n = gram.nrows();
        let eigen = gram.symmetric_eigen();

        let mut order: Vec<usize> = (0..eigen.eigenvalues.len()).collect();
        order.sort_by(|&a, &b| {
            eigen.eigenvalues[b]
                .partial_cmp(&eigen.eigenvalues[a])
                .unwrap_or(Ordering::Equal)
        });

        let max_eigenvalue = eigen.eigenvalues[order[0]];
        if max_eigenvalue <= 0.0 {
            return Err(ModelError::DegenerateKernel);
        }

        let retained: Vec<usize> = order
            .into_iter()
            .filter(|&k| eigen.eigenvalues[k] > EIGENVALUE_CUTOFF * max_eigenvalue)
            .collect();
        if retained.is_empty() {
            return Err(ModelError::DegenerateKernel);
        }

        let mut eigenvalues = Vec::with_capacity(retained.len());
        let mut eigenvectors = DMatrix::zeros(n, retained.len());

        for (out_col, &k) in retained.iter().enumerate() {
            let column = eigen.eigenvectors.column(k);

            let mut max_abs = 0.0;
            let mut sign = 1.0;
            for &v in column.iter() {
                if v.abs() > max_abs {
                    max_abs = v.abs();
                    sign = if v < 0.0 { -1.0 } else { 1.0 };
                }
            }

            for i in 0..n {
                eigenvectors[(i, out_col)] = sign * column[i];
            }
            eigenvalues.push(eigen.eigenvalues[k]);
        }

        Ok(Self {
            eigenvalues,
            eigenvectors,
        })
    }

    /// Retained eigenvalues, sorted descending
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Retained eigenvectors as matrix columns, aligned with `eigenvalues`
    pub fn eigenvectors(&self) -> &DMatrix<f64> {
        &self.eigenvectors
    }

    /// Number of retained components
    pub fn rank(&self) -> usize {
        self.eigenvalues.len()
    }
}
