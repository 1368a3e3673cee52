//! Gradient descent optimization engine
//!
//! Runs full-batch gradient descent: each iteration accumulates per-example
//! gradients through a [`LossGradient`] strategy, averages them, and hands
//! the result to an [`Updater`] for the regularized weight step.

pub mod updater;

pub use updater::{L1Updater, SimpleUpdater, SquaredL2Updater, Updater};

use crate::core::{GradientDescentConfig, ModelError, Result, Sample};
use crate::loss::LossGradient;
use log::debug;
use std::sync::Arc;

/// Floor for the relative-change denominator in the convergence check
const CONVERGENCE_DENOM_FLOOR: f64 = 1e-12;

/// Batch gradient descent over a fixed training set
pub struct GradientDescent {
    loss: Arc<dyn LossGradient>,
    updater: Arc<dyn Updater>,
    config: GradientDescentConfig,
}

impl GradientDescent {
    /// Create a new engine from a loss strategy, an updater, and a config
    pub fn new(
        loss: Arc<dyn LossGradient>,
        updater: Arc<dyn Updater>,
        config: GradientDescentConfig,
    ) -> Self {
        Self {
            loss,
            updater,
            config,
        }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &GradientDescentConfig {
        &self.config
    }

    /// Run gradient descent from `initial_weights` and return the final weights
    ///
    /// Iterates `num_iterations` full passes over `samples` in stored order,
    /// or stops early when the relative loss change drops below the
    /// configured tolerance. Never mutates the samples.
    pub fn optimize(&self, initial_weights: &[f64], samples: &[Sample]) -> Result<Vec<f64>> {
        self.config.validate()?;

        if samples.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        let dim = initial_weights.len();
        for sample in samples {
            if sample.features.len() != dim {
                return Err(ModelError::DimensionMismatch {
                    expected: dim,
                    actual: sample.features.len(),
                });
            }
        }

        let n = samples.len() as f64;
        let mut weights = initial_weights.to_vec();
        let mut prev_loss: Option<f64> = None;

        for iteration in 1..=self.config.num_iterations {
            let mut cum_gradient = vec![0.0; dim];
            let mut data_loss = 0.0;

            for sample in samples {
                data_loss +=
                    self.loss
                        .compute_into(&sample.features, sample.label, &weights, &mut cum_gradient);
            }

            for g in cum_gradient.iter_mut() {
                *g /= n;
            }

            let (new_weights, reg_loss) = self.updater.compute(
                &weights,
                &cum_gradient,
                self.config.step_size,
                iteration,
                self.config.reg_param,
            );
            weights = new_weights;

            let total_loss = data_loss / n + reg_loss;
            debug!(
                "iteration {}/{}: loss = {:.6e}",
                iteration, self.config.num_iterations, total_loss
            );

            if let (Some(tolerance), Some(prev)) = (self.config.tolerance, prev_loss) {
                let relative_change =
                    (prev - total_loss).abs() / prev.abs().max(CONVERGENCE_DENOM_FLOOR);
                if relative_change < tolerance {
                    debug!("converged after {iteration} iterations");
                    break;
                }
            }
            prev_loss = Some(total_loss);
        }

        Ok(weights)
    }
}
