//! Dataset and parameter storage
//!
//! Flat reimagining of a graph-shaped store: one parameter node, a vector of
//! example nodes, and control edges from the parameter node to each example
//! expressed as plain integer foreign keys. Traversal order is insertion
//! order and is stable, which keeps training epochs reproducible.

use crate::core::{ModelError, Result, Sample};

/// Handle to a control edge from the parameter node to an example
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeId(usize);

/// Stored example: immutable raw features plus the current feature vector
#[derive(Debug, Clone)]
struct ExampleNode {
    /// Bias-less raw features as ingested; kernel application always starts here
    raw_features: Vec<f64>,
    /// Current feature vector with trailing bias; replaced wholesale by kernel rewrites
    features: Vec<f64>,
    label: f64,
}

/// Store holding the parameter vector and all training examples
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    parameter: Vec<f64>,
    examples: Vec<ExampleNode>,
    /// edge index -> example index
    edges: Vec<usize>,
}

impl DatasetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw rows, last field of each row being the label
    ///
    /// Appends the 1.0 bias coordinate to each feature vector and creates a
    /// ones-initialized parameter node of matching length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        let raw_dim = rows[0].len().saturating_sub(1);
        if raw_dim == 0 {
            return Err(ModelError::ParseError(
                "each row needs at least one feature and a label".to_string(),
            ));
        }

        let mut store = Self::new();
        for row in rows {
            if row.len() != raw_dim + 1 {
                return Err(ModelError::DimensionMismatch {
                    expected: raw_dim + 1,
                    actual: row.len(),
                });
            }
            let (features, label) = row.split_at(raw_dim);
            store.add_example(features.to_vec(), label[0]);
        }
        store.create_parameter_node(raw_dim + 1);

        Ok(store)
    }

    /// Initialize the parameter node with a ones-vector of the given length
    pub fn create_parameter_node(&mut self, dim: usize) {
        self.parameter = vec![1.0; dim];
    }

    /// Add an example node and its control edge from the parameter node
    ///
    /// `raw_features` is bias-less; the stored feature vector gets the 1.0
    /// bias coordinate appended. Returns the example index.
    pub fn add_example(&mut self, raw_features: Vec<f64>, label: f64) -> usize {
        let mut features = raw_features.clone();
        features.push(1.0);

        let index = self.examples.len();
        self.examples.push(ExampleNode {
            raw_features,
            features,
            label,
        });
        self.edges.push(index);
        index
    }

    /// Traverse all control edges out of the parameter node, in insertion order
    pub fn parameter_out_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Resolve an edge to its example's (current features, label) pair
    ///
    /// # Panics
    /// Panics if the edge does not belong to this store
    pub fn pair_for(&self, edge: EdgeId) -> Sample {
        let node = &self.examples[self.edges[edge.0]];
        Sample::new(node.features.clone(), node.label)
    }

    /// Example index an edge points at
    pub fn example_for(&self, edge: EdgeId) -> usize {
        self.edges[edge.0]
    }

    /// Current parameter vector
    pub fn parameter(&self) -> &[f64] {
        &self.parameter
    }

    /// Replace the parameter vector wholesale
    pub fn set_parameter(&mut self, parameter: Vec<f64>) {
        self.parameter = parameter;
    }

    /// Replace an example's current feature vector (kernel rewrite hook)
    ///
    /// # Panics
    /// Panics if the example index is out of range
    pub fn set_feature_vector(&mut self, example: usize, features: Vec<f64>) {
        self.examples[example].features = features;
    }

    /// Bias-less raw features of an example, as ingested
    pub fn raw_features(&self, example: usize) -> &[f64] {
        &self.examples[example].raw_features
    }

    /// Label of an example
    pub fn label(&self, example: usize) -> f64 {
        self.examples[example].label
    }

    /// Snapshot of all raw feature vectors in insertion order
    pub fn all_raw_features(&self) -> Vec<Vec<f64>> {
        self.examples
            .iter()
            .map(|e| e.raw_features.clone())
            .collect()
    }

    /// Number of stored examples
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Check if the store holds no examples
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Bias-less raw feature dimension
    pub fn raw_dim(&self) -> usize {
        self.examples
            .first()
            .map(|e| e.raw_features.len())
            .unwrap_or(0)
    }
}
