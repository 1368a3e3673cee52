//! Model orchestration
//!
//! [`GaussianLinearModel`] ties the pieces together: it owns the dataset
//! store, delegates weight fitting to [`GradientDescent`], and delegates
//! nonlinearity to the Nystrom feature mapper. The loss/updater pair is
//! resolved from the task exactly once, at construction.

use crate::core::{GradientDescentConfig, ModelError, Result, Sample, Task};
use crate::features::{self, FeatureMap, IdentityMap};
use crate::kernel::Kernel;
use crate::loss::{LeastSquaresGradient, LeastSquaresSvmGradient, LossGradient};
use crate::metrics::{BinaryMetrics, RegressionMetrics};
use crate::optimizer::{GradientDescent, SquaredL2Updater, Updater};
use crate::store::DatasetStore;
use log::debug;
use std::sync::Arc;

/// Evaluation summary, task-dependent
#[derive(Debug, Clone)]
pub enum Evaluation {
    Binary(BinaryMetrics),
    Regression(RegressionMetrics),
}

/// Linear model over an optional kernel-induced feature space
pub struct GaussianLinearModel {
    store: DatasetStore,
    feature_map: Arc<dyn FeatureMap>,
    task: Task,
    loss: Arc<dyn LossGradient>,
    updater: Arc<dyn Updater>,
    config: GradientDescentConfig,
}

/// Loss/updater pair for a task; the fixed dispatch table
fn default_strategies(task: Task) -> (Arc<dyn LossGradient>, Arc<dyn Updater>) {
    match task {
        Task::Classification => (
            Arc::new(LeastSquaresSvmGradient::new()),
            Arc::new(SquaredL2Updater),
        ),
        Task::Regression => (
            Arc::new(LeastSquaresGradient::new()),
            Arc::new(SquaredL2Updater),
        ),
    }
}

impl GaussianLinearModel {
    /// Build a model from raw rows (last field = label) with default config
    pub fn from_rows(rows: &[Vec<f64>], task: Task) -> Result<Self> {
        ModelBuilder::new(task).build(rows)
    }

    /// Start a builder for custom hyperparameters or strategies
    pub fn builder(task: Task) -> ModelBuilder {
        ModelBuilder::new(task)
    }

    /// The model's task
    pub fn task(&self) -> Task {
        self.task
    }

    /// Current weight vector (bias as last coordinate)
    pub fn weights(&self) -> &[f64] {
        self.store.parameter()
    }

    /// The dataset store backing this model
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Raw decision score for a bias-less point
    ///
    /// Applies the active feature map, appends the bias coordinate, and dots
    /// with the parameter vector.
    pub fn score(&self, point: &[f64]) -> f64 {
        let mut mapped = self.feature_map.map(point);
        mapped.push(1.0);
        debug_assert_eq!(mapped.len(), self.store.parameter().len());
        mapped
            .iter()
            .zip(self.store.parameter().iter())
            .map(|(x, w)| x * w)
            .sum()
    }

    /// Task-dependent prediction: sign of the score for classification,
    /// the raw score for regression
    pub fn predict(&self, point: &[f64]) -> f64 {
        let score = self.score(point);
        match self.task {
            Task::Classification => {
                if score > 0.0 {
                    1.0
                } else if score < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            Task::Regression => score,
        }
    }

    /// Fit the weight vector with gradient descent
    ///
    /// Reads (features, label) pairs through the store's edge traversal,
    /// optimizes from the current parameter vector, and writes the result
    /// back to the store.
    pub fn train(&mut self) -> Result<()> {
        let samples: Vec<Sample> = self
            .store
            .parameter_out_edges()
            .map(|edge| self.store.pair_for(edge))
            .collect();

        let engine = GradientDescent::new(
            Arc::clone(&self.loss),
            Arc::clone(&self.updater),
            self.config.clone(),
        );
        let weights = engine.optimize(self.store.parameter(), &samples)?;
        self.store.set_parameter(weights);
        Ok(())
    }

    /// Replace the feature space with a Nystrom map induced by `kernel`
    ///
    /// Rebuilds the map from the stored raw features, rewrites every
    /// example's feature vector in traversal order, and resets the parameter
    /// vector to ones of the new mapped dimension. Every rewrite completes
    /// before this method returns, so `score`/`predict` never observe a
    /// stale dimensionality.
    pub fn apply_kernel<K: Kernel + 'static>(&mut self, kernel: K) -> Result<()> {
        let raw = self.store.all_raw_features();
        let (map, mapped) = features::apply_kernel(Arc::new(kernel), &raw)?;
        debug!(
            "kernel applied: {} raw dims -> {} mapped dims over {} support vectors",
            self.store.raw_dim(),
            map.output_dim(),
            map.support_size()
        );

        let edges: Vec<_> = self.store.parameter_out_edges().collect();
        for edge in edges {
            let example = self.store.example_for(edge);
            self.store
                .set_feature_vector(example, mapped[example].clone());
        }
        self.store.create_parameter_node(map.output_dim() + 1);
        self.feature_map = Arc::new(map);
        Ok(())
    }

    /// Scores over the stored training examples, paired with their labels
    pub fn scores(&self) -> Vec<(f64, f64)> {
        (0..self.store.len())
            .map(|i| {
                let score = self.score(self.store.raw_features(i));
                (score, self.store.label(i))
            })
            .collect()
    }

    /// Evaluate the model against its own training data
    pub fn evaluate(&self) -> Result<Evaluation> {
        let scores = self.scores();
        match self.task {
            Task::Classification => Ok(Evaluation::Binary(BinaryMetrics::from_scores(&scores))),
            Task::Regression => RegressionMetrics::from_scores(&scores)
                .map(Evaluation::Regression)
                .ok_or(ModelError::EmptyDataset),
        }
    }
}

/// Builder for [`GaussianLinearModel`]
pub struct ModelBuilder {
    task: Task,
    config: GradientDescentConfig,
    loss: Option<Arc<dyn LossGradient>>,
    updater: Option<Arc<dyn Updater>>,
}

impl ModelBuilder {
    /// Create a builder for the given task with default configuration
    pub fn new(task: Task) -> Self {
        Self {
            task,
            config: GradientDescentConfig::default(),
            loss: None,
            updater: None,
        }
    }

    /// Set the base step size
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.config.step_size = step_size;
        self
    }

    /// Set the number of gradient descent iterations
    pub fn with_iterations(mut self, num_iterations: usize) -> Self {
        self.config.num_iterations = num_iterations;
        self
    }

    /// Set the regularization strength
    pub fn with_reg_param(mut self, reg_param: f64) -> Self {
        self.config.reg_param = reg_param;
        self
    }

    /// Enable early stopping on relative loss change
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = Some(tolerance);
        self
    }

    /// Override the task's default loss strategy
    pub fn with_loss<L: LossGradient + 'static>(mut self, loss: L) -> Self {
        self.loss = Some(Arc::new(loss));
        self
    }

    /// Override the task's default updater
    pub fn with_updater<U: Updater + 'static>(mut self, updater: U) -> Self {
        self.updater = Some(Arc::new(updater));
        self
    }

    /// Ingest raw rows and build the model
    pub fn build(self, rows: &[Vec<f64>]) -> Result<GaussianLinearModel> {
        self.config.validate()?;
        let store = DatasetStore::from_rows(rows)?;

        let (default_loss, default_updater) = default_strategies(self.task);
        let raw_dim = store.raw_dim();

        Ok(GaussianLinearModel {
            store,
            feature_map: Arc::new(IdentityMap::new(raw_dim)),
            task: self.task,
            loss: self.loss.unwrap_or(default_loss),
            updater: self.updater.unwrap_or(default_updater),
            config: self.config,
        })
    }
}
