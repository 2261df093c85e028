//! Strategy-based tabular preprocessing.
//!
//! This library provides the data-side half of the hearth house-price
//! workflow: a family of interchangeable transformation policies over an
//! in-memory [`polars`] DataFrame, one policy family per concern:
//!
//! - **Missing values**: drop rows or fill cells (mean, median, mode,
//!   constant)
//! - **Outliers**: z-score or IQR detection, row removal, box-plot
//!   diagnostics
//! - **Feature engineering**: log transform, standard scaling, min-max
//!   scaling, one-hot encoding over explicit target columns
//! - **Splitting**: seeded, deterministic train/test partitioning
//!
//! Each family pairs a strategy trait with a small context object that
//! owns the currently selected strategy and delegates to it; the
//! [`selector`] module maps configuration strings to strategies so the
//! orchestration layer never constructs them directly.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hearth_processing::{selector, MissingValueHandler, OutlierDetector, DataSplitter};
//!
//! let handler = MissingValueHandler::new(selector::missing_value_strategy("mean")?);
//! let df = handler.handle(&df)?;
//!
//! let detector = OutlierDetector::new(selector::outlier_strategy("z_score", 3.0)?);
//! let df = detector.handle_outliers(&df, "remove")?;
//!
//! let splitter = DataSplitter::new(selector::split_strategy("train_test", 0.2, 42)?);
//! let split = splitter.split(&df, "SalePrice")?;
//! ```
//!
//! Every stage is a pure transformation: dataset in, new dataset out.
//! Contexts hold no state beyond the strategy reference, so they can be
//! invoked in isolation, in any order, and repeatedly.

pub mod dataset;
pub mod error;
pub mod features;
pub mod ingest;
pub mod missing;
pub mod outliers;
pub mod selector;
pub mod split;

// Re-exports for convenient access
pub use error::{ProcessingError, Result as ProcessingResult};
pub use features::{
    FeatureEngineer, FeatureEngineeringStrategy, LogTransformation, MinMaxScaling, OneHotEncoding,
    StandardScaling,
};
pub use ingest::{CsvIngestor, DataIngestor, ingestor_for_path};
pub use missing::{
    DropMissingValues, FillMissingValues, FillValue, MissingValueHandler, MissingValueStrategy,
};
pub use outliers::{
    BoxPlot, IqrDetection, OutlierDetectionStrategy, OutlierDetector, ZScoreDetection,
};
pub use split::{DataSplitter, SimpleTrainTestSplit, SplitStrategy, TrainTestSplit};
