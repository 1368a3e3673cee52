//! Kernel functions for feature mapping

pub mod linear;
pub mod polynomial;
pub mod rbf;
pub mod traits;

pub use linear::LinearKernel;
pub use polynomial::PolynomialKernel;
pub use rbf::RbfKernel;
pub use traits::{HyperParam, HyperParams, Kernel};
