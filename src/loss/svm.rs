//! Least-squares SVM loss gradient
//!
//! For labels in {-1, +1}:
//!   diff = 1 - label * (w^T x)
//!   gradient = -label * diff * x
//!   loss = diff² / 2
//!
//! Penalizes any deviation of the margin from 1, on both sides, which keeps
//! the objective smooth (unlike the hinge).

use crate::loss::{axpy, dot, LossGradient};

/// Least-squares SVM loss/gradient strategy for classification
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquaresSvmGradient;

impl LeastSquaresSvmGradient {
    /// Create a new least-squares SVM strategy
    pub fn new() -> Self {
        Self
    }
}

impl LossGradient for LeastSquaresSvmGradient {
    fn compute_into(
        &self,
        data: &[f64],
        label: f64,
        weights: &[f64],
        cum_gradient: &mut [f64],
    ) -> f64 {
        let diff = 1.0 - label * dot(data, weights);
        axpy(-label * diff, data, cum_gradient);
        diff * diff / 2.0
    }
}
