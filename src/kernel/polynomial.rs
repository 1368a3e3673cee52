//! Polynomial kernel implementation
//!
//! K(x, y) = (γ * x^T*y + coef0)^degree

use crate::kernel::linear::dot_product;
use crate::kernel::{HyperParams, Kernel};

/// Polynomial kernel: K(x, y) = (γ * x^T*y + coef0)^degree
///
/// Captures feature interactions up to the given degree. The degree is
/// structural and marked non-tunable in the hyperparameter snapshot; gamma
/// and coef0 are open for tuning.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialKernel {
    degree: u32,
    gamma: f64,
    coef0: f64,
}

impl PolynomialKernel {
    /// Create a new polynomial kernel
    ///
    /// # Panics
    /// Panics if degree is zero or gamma is not positive
    pub fn new(degree: u32, gamma: f64, coef0: f64) -> Self {
        assert!(degree >= 1, "Degree must be at least 1, got: {}", degree);
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self {
            degree,
            gamma,
            coef0,
        }
    }

    /// Quadratic kernel with unit gamma and coef0 = 1.0
    pub fn quadratic() -> Self {
        Self::new(2, 1.0, 1.0)
    }

    /// Cubic kernel with unit gamma and coef0 = 1.0
    pub fn cubic() -> Self {
        Self::new(3, 1.0, 1.0)
    }

    /// Get the polynomial degree
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Get the gamma parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Get the coef0 parameter
    pub fn coef0(&self) -> f64 {
        self.coef0
    }
}

impl Default for PolynomialKernel {
    fn default() -> Self {
        Self::quadratic()
    }
}

impl Kernel for PolynomialKernel {
    fn evaluate(&self, x: &[f64], y: &[f64]) -> f64 {
        (self.gamma * dot_product(x, y) + self.coef0).powi(self.degree as i32)
    }

    fn hyper_params(&self) -> HyperParams {
        HyperParams::new()
            .with("gamma", self.gamma)
            .with("coef0", self.coef0)
            .fixed("degree", self.degree as f64)
    }
}
