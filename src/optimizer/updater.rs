//! Regularization updaters
//!
//! An updater turns (current weights, averaged gradient) into the next
//! weight vector and reports the regularization term it added to the loss.
//! The effective step size diminishes as step_size / sqrt(iteration).

/// Weight update strategy applying a regularization penalty
pub trait Updater: Send + Sync {
    /// Compute (new weights, regularization loss term)
    ///
    /// `iteration` is 1-based; it scales the diminishing step size.
    fn compute(
        &self,
        weights: &[f64],
        gradient: &[f64],
        step_size: f64,
        iteration: usize,
        reg_param: f64,
    ) -> (Vec<f64>, f64);
}

/// Step size for the given 1-based iteration
fn this_iter_step(step_size: f64, iteration: usize) -> f64 {
    step_size / (iteration as f64).sqrt()
}

/// Squared-L2 (weight decay) updater
///
/// Applies decay `w * (1 - step * reg)` before the gradient step and reports
/// `0.5 * reg * ||w_new||²` as the regularization loss.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredL2Updater;

impl Updater for SquaredL2Updater {
    fn compute(
        &self,
        weights: &[f64],
        gradient: &[f64],
        step_size: f64,
        iteration: usize,
        reg_param: f64,
    ) -> (Vec<f64>, f64) {
        let step = this_iter_step(step_size, iteration);
        let decay = 1.0 - step * reg_param;

        let new_weights: Vec<f64> = weights
            .iter()
            .zip(gradient.iter())
            .map(|(&w, &g)| w * decay - step * g)
            .collect();

        let norm_sq: f64 = new_weights.iter().map(|&w| w * w).sum();
        (new_weights, 0.5 * reg_param * norm_sq)
    }
}

/// L1 (lasso) updater via soft-thresholding
///
/// Takes the plain gradient step, then shrinks each coordinate toward zero
/// by `step * reg`, zeroing coordinates that cross the origin. Reports
/// `reg * ||w_new||₁` as the regularization loss.
#[derive(Debug, Clone, Copy, Default)]
pub struct L1Updater;

impl Updater for L1Updater {
    fn compute(
        &self,
        weights: &[f64],
        gradient: &[f64],
        step_size: f64,
        iteration: usize,
        reg_param: f64,
    ) -> (Vec<f64>, f64) {
        let step = this_iter_step(step_size, iteration);
        let shrinkage = step * reg_param;

        let new_weights: Vec<f64> = weights
            .iter()
            .zip(gradient.iter())
            .map(|(&w, &g)| {
                let stepped = w - step * g;
                stepped.signum() * (stepped.abs() - shrinkage).max(0.0)
            })
            .collect();

        let norm_l1: f64 = new_weights.iter().map(|&w| w.abs()).sum();
        (new_weights, reg_param * norm_l1)
    }
}

/// Unregularized updater: plain diminishing-step gradient descent
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleUpdater;

impl Updater for SimpleUpdater {
    fn compute(
        &self,
        weights: &[f64],
        gradient: &[f64],
        step_size: f64,
        iteration: usize,
        _reg_param: f64,
    ) -> (Vec<f64>, f64) {
        let step = this_iter_step(step_size, iteration);

        let new_weights: Vec<f64> = weights
            .iter()
            .zip(gradient.iter())
            .map(|(&w, &g)| w - step * g)
            .collect();

        (new_weights, 0.0)
    }
}
