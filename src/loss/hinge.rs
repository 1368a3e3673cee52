//! Hinge loss gradient
//!
//! For labels in {0, 1}, rescaled to {-1, +1}:
//!   s = 2 * label - 1
//!   gradient = -s * x      if s * (w^T x) < 1
//!   gradient = 0           otherwise
//!   loss = max(0, 1 - s * (w^T x))

use crate::loss::{axpy, dot, LossGradient};

/// Hinge loss/gradient strategy (SVM primal, subgradient at the kink)
#[derive(Debug, Clone, Copy, Default)]
pub struct HingeGradient;

impl HingeGradient {
    /// Create a new hinge strategy
    pub fn new() -> Self {
        Self
    }
}

impl LossGradient for HingeGradient {
    fn compute_into(
        &self,
        data: &[f64],
        label: f64,
        weights: &[f64],
        cum_gradient: &mut [f64],
    ) -> f64 {
        let label_scaled = 2.0 * label - 1.0;
        let dot_product = dot(data, weights);

        // Margin satisfied: contributes nothing, the accumulator is untouched
        if label_scaled * dot_product >= 1.0 {
            return 0.0;
        }

        axpy(-label_scaled, data, cum_gradient);
        1.0 - label_scaled * dot_product
    }
}
