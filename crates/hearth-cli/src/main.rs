//! Command-line orchestration for the house-price workflow.
//!
//! Wires the preprocessing and learning stages in data-flow order, each
//! stage configured by a selector string: ingest, missing values,
//! feature engineering, outliers, split, build, evaluate. Logging is
//! initialized here, once for the whole process; the libraries only
//! emit events.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hearth_learning::metrics::MSE_KEY;
use hearth_learning::{ModelBuilder, ModelEvaluator, selector as model_selector};
use hearth_processing::{
    DataSplitter, FeatureEngineer, MissingValueHandler, OutlierDetector, dataset,
    ingest::ingestor_for_path, selector,
};

#[derive(Debug, Parser)]
#[command(name = "hearth", about = "Train and evaluate a house-price regression model")]
struct Args {
    /// Path to the CSV dataset.
    #[arg(long)]
    data: PathBuf,

    /// Name of the target column.
    #[arg(long, default_value = "SalePrice")]
    target: String,

    /// Missing-value strategy: drop, mean, median, mode, constant.
    #[arg(long, default_value = "mean")]
    missing: String,

    /// Columns to log-transform before modeling.
    #[arg(long = "log-feature")]
    log_features: Vec<String>,

    /// Categorical columns to one-hot encode.
    #[arg(long = "encode")]
    encode_features: Vec<String>,

    /// Outlier detection strategy: z_score, IQR.
    #[arg(long, default_value = "z_score")]
    outlier: String,

    /// Z-score threshold.
    #[arg(long, default_value_t = 3.0)]
    threshold: f64,

    /// Outlier handling method: remove, cap.
    #[arg(long, default_value = "remove")]
    outlier_method: String,

    /// Columns to emit box-plot diagnostics for, as JSON on stdout.
    #[arg(long = "plot")]
    plot_features: Vec<String>,

    /// Fraction of rows held out for testing.
    #[arg(long, default_value_t = 0.2)]
    test_size: f64,

    /// Shuffle seed for the train/test split.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Model-building strategy.
    #[arg(long, default_value = "linear_regression")]
    model: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Stage 1: ingestion.
    let ingestor = ingestor_for_path(&args.data)?;
    let df = ingestor
        .ingest(&args.data)
        .with_context(|| format!("failed to ingest {}", args.data.display()))?;

    // Stage 2: missing values.
    let handler = MissingValueHandler::new(selector::missing_value_strategy(&args.missing)?);
    let df = handler.handle(&df)?;

    // Stage 3: feature engineering.
    let df = if args.log_features.is_empty() {
        df
    } else {
        let engineer = FeatureEngineer::new(selector::feature_engineering_strategy(
            "log",
            args.log_features.clone(),
        )?);
        engineer.apply(&df)?
    };
    let df = if args.encode_features.is_empty() {
        df
    } else {
        let engineer = FeatureEngineer::new(selector::feature_engineering_strategy(
            "onehot_encoding",
            args.encode_features.clone(),
        )?);
        engineer.apply(&df)?
    };

    // Stage 4: outliers, plus optional diagnostics.
    let detector = OutlierDetector::new(selector::outlier_strategy(&args.outlier, args.threshold)?);
    if !args.plot_features.is_empty() {
        let names: Vec<&str> = args.plot_features.iter().map(String::as_str).collect();
        let plots = detector.visualize_outliers(&df, &names)?;
        println!("{}", serde_json::to_string_pretty(&plots)?);
    }
    let df = detector.handle_outliers(&df, &args.outlier_method)?;

    // The model consumes numeric columns only; anything still
    // categorical at this point is dropped from the feature set.
    let df = dataset::numeric_subset(&df)?;

    // Stage 5: split.
    let splitter = DataSplitter::new(selector::split_strategy(
        "train_test",
        args.test_size,
        args.seed,
    )?);
    let split = splitter.split(&df, &args.target)?;
    info!(
        train_rows = split.x_train.height(),
        test_rows = split.x_test.height(),
        "Dataset split"
    );

    // Stage 6: build and train.
    let builder = ModelBuilder::new(model_selector::model_building_strategy(&args.model)?);
    let pipeline = builder.build(&split.x_train, &split.y_train)?;

    // Stage 7: evaluate.
    let evaluator = ModelEvaluator::new(model_selector::model_evaluation_strategy("regression")?);
    let metrics = evaluator.evaluate(&pipeline, &split.x_test, &split.y_test)?;

    println!("{}", serde_json::to_string_pretty(&metrics)?);
    if let Some(mse) = metrics.get(MSE_KEY) {
        info!(mse = *mse, "Headline error");
    }

    Ok(())
}
