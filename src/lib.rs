//! Gradient-descent fitting for linear and kernelized models
//!
//! Linear models are trained with pluggable per-example loss strategies and
//! regularization updaters; nonlinearity comes from a Nystrom approximation
//! of a kernel-induced feature space, persisted back into the dataset store.

pub mod core;
pub mod data;
pub mod features;
pub mod kernel;
pub mod loss;
pub mod metrics;
pub mod model;
pub mod optimizer;
pub mod store;

// Re-export main types for convenience
pub use crate::core::{GradientDescentConfig, ModelError, Result, Sample, Task};
pub use crate::data::CsvDataset;
pub use crate::features::{FeatureMap, IdentityMap, NystromMap};
pub use crate::kernel::{HyperParams, Kernel, LinearKernel, PolynomialKernel, RbfKernel};
pub use crate::loss::{
    HingeGradient, LeastSquaresGradient, LeastSquaresSvmGradient, LogisticGradient, LossGradient,
    ProbitGradient,
};
pub use crate::metrics::{BinaryMetrics, RegressionMetrics};
pub use crate::model::{Evaluation, GaussianLinearModel, ModelBuilder};
pub use crate::optimizer::{
    GradientDescent, L1Updater, SimpleUpdater, SquaredL2Updater, Updater,
};
pub use crate::store::{DatasetStore, EdgeId};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
