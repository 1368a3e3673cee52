//! Kernel trait definition

/// Kernel function trait
///
/// A kernel function K(x, y) must satisfy Mercer's condition for the Gram
/// matrix to be positive semi-definite. Evaluation must be a pure function of
/// its two inputs: Gram construction relies on K(x, y) == K(y, x).
pub trait Kernel: Send + Sync {
    /// Compute kernel value K(x, y) on dense feature vectors
    fn evaluate(&self, x: &[f64], y: &[f64]) -> f64;

    /// Snapshot of the kernel's named hyperparameters
    fn hyper_params(&self) -> HyperParams {
        HyperParams::new()
    }
}

/// Named hyperparameter with a tunable/fixed marker
#[derive(Debug, Clone, PartialEq)]
pub struct HyperParam {
    pub name: &'static str,
    pub value: f64,
    pub tunable: bool,
}

/// Explicit hyperparameter snapshot for a kernel
///
/// Replaces mutable "blocked parameter" state on kernel instances: which
/// parameters are tunable is part of the configuration value itself, so
/// Gram-matrix construction and hyperparameter search see the same immutable
/// description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HyperParams {
    entries: Vec<HyperParam>,
}

impl HyperParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tunable parameter
    pub fn with(mut self, name: &'static str, value: f64) -> Self {
        self.entries.push(HyperParam {
            name,
            value,
            tunable: true,
        });
        self
    }

    /// Add a fixed (non-tunable) parameter
    pub fn fixed(mut self, name: &'static str, value: f64) -> Self {
        self.entries.push(HyperParam {
            name,
            value,
            tunable: false,
        });
        self
    }

    /// Look up a parameter value by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|p| p.name == name).map(|p| p.value)
    }

    /// Whether a named parameter is open for tuning
    pub fn is_tunable(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|p| p.name == name && p.tunable)
    }

    /// All parameter entries in declaration order
    pub fn entries(&self) -> &[HyperParam] {
        &self.entries
    }

    /// Number of named parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the parameter set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyper_params_lookup() {
        let params = HyperParams::new().with("gamma", 0.5).fixed("degree", 3.0);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("gamma"), Some(0.5));
        assert_eq!(params.get("degree"), Some(3.0));
        assert_eq!(params.get("coef0"), None);
    }

    #[test]
    fn test_hyper_params_tunable_flags() {
        let params = HyperParams::new().with("gamma", 1.0).fixed("degree", 2.0);

        assert!(params.is_tunable("gamma"));
        assert!(!params.is_tunable("degree"));
        assert!(!params.is_tunable("missing"));
    }

    #[test]
    fn test_hyper_params_empty() {
        let params = HyperParams::new();
        assert!(params.is_empty());
        assert_eq!(params.entries().len(), 0);
    }
}
