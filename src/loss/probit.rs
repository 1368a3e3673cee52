//! Probit loss gradient
//!
//! For labels in {0, 1}:
//!   margin = w^T x
//!   gradient = φ(margin) / Φ(margin) * x             for label > 0
//!   gradient = φ(margin) / (1 - Φ(margin)) * x       otherwise
//!   loss = 1 - Φ(margin)
//!
//! φ and Φ are the standard normal density and CDF.

use crate::loss::{axpy, dot, LossGradient};

/// Probit regression loss/gradient strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbitGradient;

/// Clamp for Φ in gradient denominators; keeps the inverse Mills ratio
/// finite for extreme margins.
const CDF_EPS: f64 = 1e-15;

impl ProbitGradient {
    /// Create a new probit strategy
    pub fn new() -> Self {
        Self
    }
}

impl LossGradient for ProbitGradient {
    fn compute_into(
        &self,
        data: &[f64],
        label: f64,
        weights: &[f64],
        cum_gradient: &mut [f64],
    ) -> f64 {
        let margin = dot(data, weights);
        let pdf = normal_pdf(margin);
        let cdf = normal_cdf(margin).clamp(CDF_EPS, 1.0 - CDF_EPS);

        let multiplier = if label > 0.0 {
            pdf / cdf
        } else {
            pdf / (1.0 - cdf)
        };
        axpy(multiplier, data, cum_gradient);

        1.0 - normal_cdf(margin)
    }
}

/// Standard normal density φ(z)
fn normal_pdf(z: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal CDF Φ(z) via the Abramowitz-Stegun erf approximation
/// (formula 7.1.26, absolute error below 1.5e-7)
fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_pdf_known_values() {
        assert_relative_eq!(normal_pdf(0.0), 0.3989422804014327, max_relative = 1e-12);
        assert_relative_eq!(normal_pdf(1.0), 0.24197072451914337, max_relative = 1e-12);
        assert_eq!(normal_pdf(1.0), normal_pdf(-1.0));
    }

    #[test]
    fn test_normal_cdf_known_values() {
        assert_relative_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-7);
        assert_relative_eq!(normal_cdf(1.0), 0.8413447460685429, epsilon = 1e-6);
        assert_relative_eq!(normal_cdf(-1.0), 0.15865525393145707, epsilon = 1e-6);
        assert!(normal_cdf(8.0) > 0.999999);
        assert!(normal_cdf(-8.0) < 1e-6);
    }

    #[test]
    fn test_probit_loss_is_survival_of_margin() {
        let strategy = ProbitGradient::new();
        let data = [1.0, 1.0];
        let weights = [0.5, 0.5];

        // margin = 1.0, loss = 1 - Phi(1)
        let (_, loss) = strategy.compute(&data, 1.0, &weights);
        assert_relative_eq!(loss, 1.0 - normal_cdf(1.0), max_relative = 1e-12);
    }

    #[test]
    fn test_probit_gradient_branches() {
        let strategy = ProbitGradient::new();
        let data = [2.0, 1.0];
        let weights = [0.3, -0.1];

        let margin = 0.5;
        let pdf = normal_pdf(margin);
        let cdf = normal_cdf(margin);

        let (grad_pos, _) = strategy.compute(&data, 1.0, &weights);
        assert_relative_eq!(grad_pos[0], pdf / cdf * 2.0, max_relative = 1e-9);

        let (grad_neg, _) = strategy.compute(&data, 0.0, &weights);
        assert_relative_eq!(grad_neg[0], pdf / (1.0 - cdf) * 2.0, max_relative = 1e-9);
    }

    #[test]
    fn test_probit_extreme_margin_stays_finite() {
        let strategy = ProbitGradient::new();
        let data = [100.0, 1.0];
        let weights = [1.0, 1.0];

        let (gradient, loss) = strategy.compute(&data, 0.0, &weights);
        assert!(gradient.iter().all(|g| g.is_finite()));
        assert!(loss.is_finite());
    }

    #[test]
    fn test_probit_variants_agree() {
        let strategy = ProbitGradient::new();
        let data = [0.3, -1.2, 1.0];
        let weights = [1.5, 0.7, -0.2];

        for &label in &[0.0, 1.0] {
            let (gradient, loss) = strategy.compute(&data, label, &weights);
            let mut acc = vec![0.0; weights.len()];
            let acc_loss = strategy.compute_into(&data, label, &weights, &mut acc);

            assert_relative_eq!(loss, acc_loss, max_relative = 1e-9);
            for (g, a) in gradient.iter().zip(acc.iter()) {
                assert_relative_eq!(g, a, max_relative = 1e-9);
            }
        }
    }
}
