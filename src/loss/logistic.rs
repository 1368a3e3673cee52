//! Logistic loss gradient
//!
//! For labels in {0, 1}:
//!   margin = -w^T x
//!   gradient = (σ(margin) - label) * x       where σ(z) = 1 / (1 + e^-z)
//!   loss = log(1 + e^margin)                 for label > 0
//!   loss = log(1 + e^margin) - margin        otherwise

use crate::loss::{axpy, dot, LossGradient};

/// Logistic regression loss/gradient strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticGradient;

impl LogisticGradient {
    /// Create a new logistic strategy
    pub fn new() -> Self {
        Self
    }
}

impl LossGradient for LogisticGradient {
    fn compute_into(
        &self,
        data: &[f64],
        label: f64,
        weights: &[f64],
        cum_gradient: &mut [f64],
    ) -> f64 {
        let margin = -dot(data, weights);
        let multiplier = sigmoid(margin) - label;
        axpy(multiplier, data, cum_gradient);

        if label > 0.0 {
            log1p_exp(margin)
        } else {
            log1p_exp(margin) - margin
        }
    }
}

/// Standard logistic function σ(z) = 1 / (1 + e^-z)
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Numerically stable log(1 + e^z)
///
/// For large positive z, e^z overflows; rewrite as z + log(1 + e^-z).
fn log1p_exp(z: f64) -> f64 {
    if z > 0.0 {
        z + (-z).exp().ln_1p()
    } else {
        z.exp().ln_1p()
    }
}
