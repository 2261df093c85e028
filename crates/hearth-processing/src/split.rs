//! Train/test splitting.

use polars::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::error::{ProcessingError, Result};

/// The four-way result of a split: feature frames and target series for
/// the train and test partitions. The target column never appears in the
/// feature frames.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: DataFrame,
    pub x_test: DataFrame,
    pub y_train: Series,
    pub y_test: Series,
}

/// A pluggable policy for partitioning a dataset around a target column.
pub trait SplitStrategy: Send + Sync {
    fn split(&self, df: &DataFrame, target_column: &str) -> Result<TrainTestSplit>;
}

/// Seeded shuffle split into train and test partitions.
///
/// Row indices are shuffled with a seeded generator and the first
/// `ceil(n * test_size)` shuffled rows become the test partition, so
/// repeated calls with the same seed produce identical partitions.
#[derive(Debug, Clone)]
pub struct SimpleTrainTestSplit {
    test_size: f64,
    seed: u64,
}

impl Default for SimpleTrainTestSplit {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            seed: 42,
        }
    }
}

impl SimpleTrainTestSplit {
    pub fn new(test_size: f64, seed: u64) -> Self {
        Self { test_size, seed }
    }
}

impl SplitStrategy for SimpleTrainTestSplit {
    fn split(&self, df: &DataFrame, target_column: &str) -> Result<TrainTestSplit> {
        info!(
            test_size = self.test_size,
            seed = self.seed,
            "Performing simple train-test split"
        );

        let n = df.height();
        if n == 0 {
            return Err(ProcessingError::EmptyDataset);
        }
        let y = df
            .column(target_column)
            .map_err(|_| ProcessingError::ColumnNotFound(target_column.to_string()))?
            .as_materialized_series()
            .clone();
        let x = df.drop(target_column)?;

        let mut indices: Vec<u32> = (0..n as u32).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let n_test = ((n as f64 * self.test_size).ceil() as usize).min(n);
        debug!(n_test, n_train = n - n_test, "Partition sizes computed");

        let test_idx = IdxCa::from_vec("idx".into(), indices[..n_test].to_vec());
        let train_idx = IdxCa::from_vec("idx".into(), indices[n_test..].to_vec());

        let split = TrainTestSplit {
            x_train: x.take(&train_idx)?,
            x_test: x.take(&test_idx)?,
            y_train: y.take(&train_idx)?,
            y_test: y.take(&test_idx)?,
        };
        info!("Train-test split completed");
        Ok(split)
    }
}

/// Context holding the currently selected split strategy.
pub struct DataSplitter {
    strategy: Box<dyn SplitStrategy>,
}

static_assertions::assert_impl_all!(DataSplitter: Send);

impl DataSplitter {
    /// Create a splitter with an initial strategy.
    pub fn new(strategy: Box<dyn SplitStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the held strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn SplitStrategy>) {
        debug!("Switching data splitting strategy");
        self.strategy = strategy;
    }

    /// Split the dataset using the current strategy.
    pub fn split(&self, df: &DataFrame, target_column: &str) -> Result<TrainTestSplit> {
        debug!("Splitting data using the selected strategy");
        self.strategy.split(df, target_column)
    }
}
