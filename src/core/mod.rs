//! Core types and error definitions

pub mod error;
pub mod types;

pub use error::{ModelError, Result};
pub use types::{GradientDescentConfig, Sample, Task};
