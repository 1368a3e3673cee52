//! RBF (Radial Basis Function) kernel implementation
//!
//! The RBF kernel is defined as: K(x, y) = exp(-γ * ||x - y||²)
//! where γ (gamma) is a hyperparameter that controls the kernel width.

use crate::kernel::{HyperParams, Kernel};

/// RBF (Radial Basis Function) kernel: K(x, y) = exp(-γ * ||x - y||²)
///
/// The gamma parameter controls the "reach" of each training example:
/// - High gamma: close points have high influence (potential overfitting)
/// - Low gamma: distant points have influence (potential underfitting)
///
/// A common default is gamma = 1.0 / n_features.
#[derive(Debug, Clone, Copy)]
pub struct RbfKernel {
    gamma: f64,
}

impl RbfKernel {
    /// Create a new RBF kernel with specified gamma parameter
    ///
    /// # Panics
    /// Panics if gamma is not positive
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self { gamma }
    }

    /// Create RBF kernel with gamma = 1.0 / n_features
    pub fn with_auto_gamma(n_features: usize) -> Self {
        assert!(n_features > 0, "Number of features must be positive");
        Self::new(1.0 / n_features as f64)
    }

    /// Get the gamma parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for RbfKernel {
    /// Default RBF kernel with gamma = 1.0
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Kernel for RbfKernel {
    fn evaluate(&self, x: &[f64], y: &[f64]) -> f64 {
        let squared_distance = squared_euclidean_distance(x, y);
        (-self.gamma * squared_distance).exp()
    }

    fn hyper_params(&self) -> HyperParams {
        HyperParams::new().with("gamma", self.gamma)
    }
}

/// Squared Euclidean distance ||x - y||² over dense vectors
///
/// When the lengths differ, the excess coordinates of the longer vector
/// count against an implicit zero.
fn squared_euclidean_distance(x: &[f64], y: &[f64]) -> f64 {
    let common = x.len().min(y.len());
    let mut distance_sq = 0.0;

    for i in 0..common {
        let diff = x[i] - y[i];
        distance_sq += diff * diff;
    }
    for &v in &x[common..] {
        distance_sq += v * v;
    }
    for &v in &y[common..] {
        distance_sq += v * v;
    }

    distance_sq
}
