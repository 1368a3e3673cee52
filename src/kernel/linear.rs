//! Linear kernel implementation

use crate::kernel::Kernel;

/// Linear kernel: K(x, y) = x^T * y
///
/// The simplest kernel function, computing the dot product between two
/// vectors. Feature mapping with this kernel reproduces (a rotation of) the
/// original feature space.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearKernel;

impl LinearKernel {
    /// Create a new linear kernel
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for LinearKernel {
    fn evaluate(&self, x: &[f64], y: &[f64]) -> f64 {
        dot_product(x, y)
    }
}

/// Dot product over the shared prefix of two dense vectors
pub(crate) fn dot_product(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y.iter()).map(|(a, b)| a * b).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_kernel_basic() {
        let kernel = LinearKernel::new();

        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];

        // 1*4 + 2*5 + 3*6 = 32
        assert_eq!(kernel.evaluate(&x, &y), 32.0);
    }

    #[test]
    fn test_linear_kernel_identical() {
        let kernel = LinearKernel::new();

        let x = [1.0, 2.0, 3.0];

        // x^T * x = 1 + 4 + 9 = 14
        assert_eq!(kernel.evaluate(&x, &x), 14.0);
    }

    #[test]
    fn test_linear_kernel_orthogonal() {
        let kernel = LinearKernel::new();

        let x = [1.0, 0.0];
        let y = [0.0, 1.0];

        assert_eq!(kernel.evaluate(&x, &y), 0.0);
    }

    #[test]
    fn test_linear_kernel_no_hyper_params() {
        let kernel = LinearKernel::new();
        assert!(kernel.hyper_params().is_empty());
    }
}
