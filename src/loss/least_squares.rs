//! Squared-error loss gradient
//!
//!   diff = label - w^T x
//!   gradient = -diff * x
//!   loss = diff² / 2

use crate::loss::{axpy, dot, LossGradient};

/// Ordinary least-squares loss/gradient strategy for regression
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquaresGradient;

impl LeastSquaresGradient {
    /// Create a new least-squares strategy
    pub fn new() -> Self {
        Self
    }
}

impl LossGradient for LeastSquaresGradient {
    fn compute_into(
        &self,
        data: &[f64],
        label: f64,
        weights: &[f64],
        cum_gradient: &mut [f64],
    ) -> f64 {
        let diff = label - dot(data, weights);
        axpy(-diff, data, cum_gradient);
        diff * diff / 2.0
    }
}
