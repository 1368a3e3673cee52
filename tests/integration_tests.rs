//! Integration tests for the kernelfit library
//!
//! These tests verify end-to-end functionality across multiple modules:
//! ingestion, training, kernel feature mapping, and evaluation.

use approx::assert_relative_eq;
use kernelfit::{
    CsvDataset, Evaluation, GaussianLinearModel, LogisticGradient, ModelError, RbfKernel, Task,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Regression on the unit-square plane z = x + y: the fitted weights must
/// approximate [1, 1, 0].
#[test]
fn test_regression_plane_recovery() {
    let rows = vec![
        vec![0.0, 0.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 1.0, 2.0],
    ];

    let mut model = GaussianLinearModel::builder(Task::Regression)
        .with_step_size(1.0)
        .with_iterations(200)
        .with_reg_param(0.0)
        .build(&rows)
        .expect("Model construction should succeed");
    model.train().expect("Training should succeed");

    let weights = model.weights();
    assert_relative_eq!(weights[0], 1.0, epsilon = 0.05);
    assert_relative_eq!(weights[1], 1.0, epsilon = 0.05);
    assert_relative_eq!(weights[2], 0.0, epsilon = 0.05);

    // Predictions on the training corners follow the plane
    assert_relative_eq!(model.predict(&[1.0, 1.0]), 2.0, epsilon = 0.15);
    assert_relative_eq!(model.predict(&[0.0, 0.0]), 0.0, epsilon = 0.15);
}

/// Linearly separable classification with the default least-squares SVM loss.
#[test]
fn test_classification_separable_points() {
    let rows = vec![vec![2.0, 2.0, 1.0], vec![-2.0, -2.0, -1.0]];

    let mut model = GaussianLinearModel::builder(Task::Classification)
        .with_step_size(0.1)
        .with_iterations(500)
        .build(&rows)
        .expect("Model construction should succeed");
    model.train().expect("Training should succeed");

    assert_eq!(model.predict(&[1.0, 1.0]), 1.0);
    assert_eq!(model.predict(&[-1.0, -1.0]), -1.0);
}

/// Full pipeline with a kernel feature map: XOR is not linearly separable,
/// but an RBF feature space makes it so.
#[test]
fn test_kernelized_classification_xor() {
    let rows = vec![
        vec![0.0, 0.0, -1.0],
        vec![1.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];

    let mut model = GaussianLinearModel::builder(Task::Classification)
        .with_step_size(0.5)
        .with_iterations(2000)
        .build(&rows)
        .expect("Model construction should succeed");

    model
        .apply_kernel(RbfKernel::new(2.0))
        .expect("Kernel application should succeed");
    model.train().expect("Training should succeed");

    assert_eq!(model.predict(&[0.0, 0.0]), -1.0);
    assert_eq!(model.predict(&[1.0, 0.0]), 1.0);
    assert_eq!(model.predict(&[0.0, 1.0]), 1.0);
    assert_eq!(model.predict(&[1.0, 1.0]), -1.0);
}

/// Applying the same kernel twice starts from raw features both times, so
/// the stored feature vectors and parameter length are reproduced.
#[test]
fn test_kernel_application_idempotence() {
    let rows = vec![
        vec![0.0, 0.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 1.0, 2.0],
    ];

    let mut model = GaussianLinearModel::from_rows(&rows, Task::Regression)
        .expect("Model construction should succeed");

    model.apply_kernel(RbfKernel::new(1.0)).unwrap();
    let first: Vec<Vec<f64>> = model
        .store()
        .parameter_out_edges()
        .map(|e| model.store().pair_for(e).features)
        .collect();
    let first_dim = model.weights().len();

    model.apply_kernel(RbfKernel::new(1.0)).unwrap();
    let second: Vec<Vec<f64>> = model
        .store()
        .parameter_out_edges()
        .map(|e| model.store().pair_for(e).features)
        .collect();

    assert_eq!(model.weights().len(), first_dim);
    for (a_row, b_row) in first.iter().zip(second.iter()) {
        assert_eq!(a_row.len(), b_row.len());
        for (a, b) in a_row.iter().zip(b_row.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }
}

/// CSV ingestion feeding the full training pipeline.
#[test]
fn test_csv_to_trained_model() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(temp_file, "feature1,feature2,label").expect("Failed to write");
    writeln!(temp_file, "2.0,1.0,1").expect("Failed to write");
    writeln!(temp_file, "1.8,1.1,1").expect("Failed to write");
    writeln!(temp_file, "-2.0,-1.0,-1").expect("Failed to write");
    writeln!(temp_file, "-1.8,-1.1,-1").expect("Failed to write");
    temp_file.flush().expect("Failed to flush");

    let dataset = CsvDataset::from_file(temp_file.path()).expect("CSV loading should succeed");
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.dim(), 2);

    let mut model = GaussianLinearModel::builder(Task::Classification)
        .with_step_size(0.1)
        .with_iterations(500)
        .build(dataset.rows())
        .expect("Model construction should succeed");
    model.train().expect("Training should succeed");

    match model.evaluate().expect("Evaluation should succeed") {
        Evaluation::Binary(metrics) => {
            assert!(
                metrics.accuracy() >= 0.75,
                "Accuracy should be high for separable data, got: {}",
                metrics.accuracy()
            );
            assert_eq!(metrics.roc_auc(), Some(1.0));
        }
        Evaluation::Regression(_) => panic!("expected binary metrics"),
    }
}

/// Alternative loss strategies plug into the same model via the builder.
#[test]
fn test_logistic_loss_override() {
    // Logistic expects labels in {0, 1}
    let rows = vec![
        vec![2.0, 2.0, 1.0],
        vec![1.5, 2.5, 1.0],
        vec![-2.0, -2.0, 0.0],
        vec![-2.5, -1.5, 0.0],
    ];

    let mut model = GaussianLinearModel::builder(Task::Classification)
        .with_loss(LogisticGradient::new())
        .with_step_size(0.5)
        .with_iterations(1000)
        .build(&rows)
        .expect("Model construction should succeed");
    model.train().expect("Training should succeed");

    assert!(model.score(&[2.0, 2.0]) > model.score(&[-2.0, -2.0]));
}

/// Early stopping keeps a huge iteration budget from running to completion.
#[test]
fn test_convergence_tolerance_pipeline() {
    let rows = vec![vec![1.0, 1.0], vec![-1.0, -1.0]];

    let mut model = GaussianLinearModel::builder(Task::Regression)
        .with_step_size(0.01)
        .with_iterations(5_000_000)
        .with_tolerance(1e-10)
        .build(&rows)
        .expect("Model construction should succeed");

    // Finishing in test time at all demonstrates the early stop
    model.train().expect("Training should succeed");
}

/// Configuration errors surface before any training work happens.
#[test]
fn test_invalid_configuration_fails_fast() {
    let rows = vec![vec![1.0, 1.0], vec![-1.0, -1.0]];

    let result = GaussianLinearModel::builder(Task::Regression)
        .with_step_size(-0.1)
        .build(&rows);
    assert!(matches!(result, Err(ModelError::InvalidConfiguration(_))));

    let result = GaussianLinearModel::from_rows(&[], Task::Regression);
    assert!(matches!(result, Err(ModelError::EmptyDataset)));
}
