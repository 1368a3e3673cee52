//! Per-example loss and gradient strategies
//!
//! Each strategy is a pure function of (data, label, weights): no shared
//! state, no allocation beyond the returned gradient. The weight vector and
//! the data vector both carry the bias as their last coordinate.

pub mod hinge;
pub mod least_squares;
pub mod logistic;
pub mod probit;
pub mod svm;

pub use hinge::HingeGradient;
pub use least_squares::LeastSquaresGradient;
pub use logistic::LogisticGradient;
pub use probit::ProbitGradient;
pub use svm::LeastSquaresSvmGradient;

/// Loss/gradient strategy for a single training example
///
/// The accumulating variant `compute_into` adds the gradient into a
/// caller-owned buffer; the allocating `compute` is defined in terms of it,
/// so both variants are numerically identical by construction.
pub trait LossGradient: Send + Sync {
    /// Add this example's gradient into `cum_gradient` and return its loss
    ///
    /// `cum_gradient` must have the same length as `weights`.
    fn compute_into(
        &self,
        data: &[f64],
        label: f64,
        weights: &[f64],
        cum_gradient: &mut [f64],
    ) -> f64;

    /// Compute (gradient, loss) for a single example
    fn compute(&self, data: &[f64], label: f64, weights: &[f64]) -> (Vec<f64>, f64) {
        let mut gradient = vec![0.0; weights.len()];
        let loss = self.compute_into(data, label, weights, &mut gradient);
        (gradient, loss)
    }
}

/// Dot product of the data and weight vectors
pub(crate) fn dot(data: &[f64], weights: &[f64]) -> f64 {
    debug_assert_eq!(data.len(), weights.len());
    data.iter().zip(weights.iter()).map(|(x, w)| x * w).sum()
}

/// Add `scale * data` into the accumulator
pub(crate) fn axpy(scale: f64, data: &[f64], cum_gradient: &mut [f64]) {
    debug_assert_eq!(data.len(), cum_gradient.len());
    for (g, &x) in cum_gradient.iter_mut().zip(data.iter()) {
        *g += scale * x;
    }
}
