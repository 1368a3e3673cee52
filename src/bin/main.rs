//! kernelfit command line interface
//!
//! Trains linear or kernelized models on CSV data (last column is the
//! label) and reports evaluation metrics.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use kernelfit::{
    CsvDataset, Evaluation, GaussianLinearModel, LinearKernel, PolynomialKernel, RbfKernel,
    Result, Task,
};
use log::{error, info};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "kernelfit")]
#[command(about = "Gradient-descent training for linear and kernelized models")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a model and report metrics on the training data
    Train(TrainArgs),
    /// Train on one file, evaluate on another
    Evaluate(EvaluateArgs),
}

#[derive(Args)]
struct TrainArgs {
    /// Training data file (CSV, last column is the label)
    #[arg(long)]
    data: PathBuf,

    #[command(flatten)]
    options: FitOptions,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Training data file
    #[arg(long)]
    train: PathBuf,

    /// Held-out evaluation data file
    #[arg(long)]
    test: PathBuf,

    #[command(flatten)]
    options: FitOptions,
}

#[derive(Args)]
struct FitOptions {
    /// Prediction task
    #[arg(short, long, default_value = "classification")]
    task: CliTask,

    /// Base step size
    #[arg(long, default_value = "0.01")]
    step_size: f64,

    /// Number of gradient descent iterations
    #[arg(short, long, default_value = "200")]
    iterations: usize,

    /// Regularization strength
    #[arg(long, default_value = "0.0")]
    reg_param: f64,

    /// Early-stopping tolerance on relative loss change
    #[arg(long)]
    tolerance: Option<f64>,

    /// Kernel feature mapping to apply before training
    #[arg(short, long)]
    kernel: Option<CliKernel>,

    /// RBF/polynomial gamma parameter
    #[arg(long, default_value = "1.0")]
    gamma: f64,

    /// Polynomial degree
    #[arg(long, default_value = "2")]
    degree: u32,

    /// Polynomial coef0 parameter
    #[arg(long, default_value = "1.0")]
    coef0: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliTask {
    Classification,
    Regression,
}

impl From<CliTask> for Task {
    fn from(task: CliTask) -> Self {
        match task {
            CliTask::Classification => Task::Classification,
            CliTask::Regression => Task::Regression,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliKernel {
    Linear,
    Rbf,
    Polynomial,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Train(args) => train_command(args),
        Commands::Evaluate(args) => evaluate_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn fit_model(data: &PathBuf, options: &FitOptions) -> Result<GaussianLinearModel> {
    info!("Loading dataset from {data:?}");
    let dataset = CsvDataset::from_file(data)?;
    info!(
        "Loaded {} examples with {} features",
        dataset.len(),
        dataset.dim()
    );

    let mut builder = GaussianLinearModel::builder(options.task.into())
        .with_step_size(options.step_size)
        .with_iterations(options.iterations)
        .with_reg_param(options.reg_param);
    if let Some(tolerance) = options.tolerance {
        builder = builder.with_tolerance(tolerance);
    }
    let mut model = builder.build(dataset.rows())?;

    if let Some(kernel) = options.kernel {
        info!("Applying {kernel:?} kernel feature map");
        match kernel {
            CliKernel::Linear => model.apply_kernel(LinearKernel::new())?,
            CliKernel::Rbf => model.apply_kernel(RbfKernel::new(options.gamma))?,
            CliKernel::Polynomial => model.apply_kernel(PolynomialKernel::new(
                options.degree,
                options.gamma,
                options.coef0,
            ))?,
        }
        info!("Mapped feature dimension: {}", model.weights().len());
    }

    info!(
        "Training: step_size={}, iterations={}, reg_param={}",
        options.step_size, options.iterations, options.reg_param
    );
    model.train()?;
    info!("Training completed");

    Ok(model)
}

fn print_evaluation(evaluation: &Evaluation) {
    match evaluation {
        Evaluation::Binary(metrics) => {
            println!("Accuracy:    {:.4}", metrics.accuracy());
            println!("Precision:   {:.4}", metrics.precision());
            println!("Recall:      {:.4}", metrics.recall());
            println!("F1 score:    {:.4}", metrics.f1_score());
            println!("Specificity: {:.4}", metrics.specificity());
            match metrics.roc_auc() {
                Some(auc) => println!("ROC AUC:     {auc:.4}"),
                None => println!("ROC AUC:     undefined (single class)"),
            }
        }
        Evaluation::Regression(metrics) => {
            println!("MSE: {:.6}", metrics.mean_squared_error);
            println!("MAE: {:.6}", metrics.mean_absolute_error);
            println!("R²:  {:.4}", metrics.r_squared);
        }
    }
}

fn train_command(args: TrainArgs) -> Result<()> {
    let model = fit_model(&args.data, &args.options)?;

    println!("Training metrics:");
    print_evaluation(&model.evaluate()?);
    Ok(())
}

fn evaluate_command(args: EvaluateArgs) -> Result<()> {
    let model = fit_model(&args.train, &args.options)?;

    info!("Loading test data from {:?}", args.test);
    let test = CsvDataset::from_file(&args.test)?;

    let scores: Vec<(f64, f64)> = test
        .rows()
        .iter()
        .map(|row| {
            let (features, label) = row.split_at(row.len() - 1);
            (model.score(features), label[0])
        })
        .collect();

    println!("Test metrics ({} examples):", scores.len());
    match Task::from(args.options.task) {
        Task::Classification => {
            let metrics = kernelfit::BinaryMetrics::from_scores(&scores);
            print_evaluation(&Evaluation::Binary(metrics));
        }
        Task::Regression => {
            let metrics = kernelfit::RegressionMetrics::from_scores(&scores)
                .ok_or(kernelfit::ModelError::EmptyDataset)?;
            print_evaluation(&Evaluation::Regression(metrics));
        }
    }
    Ok(())
}
