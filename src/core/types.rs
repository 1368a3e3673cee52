//! Core type definitions for model fitting

use crate::core::{ModelError, Result};

/// Training sample with a dense feature vector and a scalar label
///
/// The feature vector carries a trailing 1.0 bias coordinate, appended once
/// at ingestion. Kernel mapping replaces the vector wholesale (new mapped
/// coordinates plus a fresh trailing 1.0), never mutates it in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Dense feature vector, bias coordinate last
    pub features: Vec<f64>,
    /// Target value (class label or regression target)
    pub label: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label }
    }

    /// Feature vector length including the bias coordinate
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

/// Prediction task, resolved once at model construction
///
/// Selects the loss/updater pair and the decision rule applied to raw scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Binary classification with labels in {-1, +1}; predictions are sign(score)
    Classification,
    /// Real-valued regression; predictions are the raw score
    Regression,
}

/// Configuration for the gradient descent engine
#[derive(Debug, Clone)]
pub struct GradientDescentConfig {
    /// Number of full passes over the training set (must be >= 1)
    pub num_iterations: usize,
    /// Base step size, diminished by sqrt(iteration) inside the updater (must be > 0)
    pub step_size: f64,
    /// Regularization strength (must be >= 0)
    pub reg_param: f64,
    /// Optional early-stopping tolerance on the relative loss change
    pub tolerance: Option<f64>,
}

impl Default for GradientDescentConfig {
    fn default() -> Self {
        Self {
            num_iterations: 200,
            step_size: 0.01,
            reg_param: 0.0,
            tolerance: None,
        }
    }
}

impl GradientDescentConfig {
    /// Validate hyperparameters, failing fast on out-of-range values
    pub fn validate(&self) -> Result<()> {
        if self.num_iterations < 1 {
            return Err(ModelError::InvalidConfiguration(format!(
                "num_iterations must be at least 1, got: {}",
                self.num_iterations
            )));
        }
        if self.step_size <= 0.0 {
            return Err(ModelError::InvalidConfiguration(format!(
                "step_size must be positive, got: {}",
                self.step_size
            )));
        }
        if self.reg_param < 0.0 {
            return Err(ModelError::InvalidConfiguration(format!(
                "reg_param must be non-negative, got: {}",
                self.reg_param
            )));
        }
        if let Some(tol) = self.tolerance {
            if tol <= 0.0 {
                return Err(ModelError::InvalidConfiguration(format!(
                    "tolerance must be positive, got: {tol}"
                )));
            }
        }
        Ok(())
    }
}
