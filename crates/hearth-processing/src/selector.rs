//! String-keyed strategy selection.
//!
//! The orchestration layer configures each stage with a plain selector
//! string; these factories map the string to a boxed strategy. An
//! unknown name fails with [`ProcessingError::UnsupportedStrategy`]
//! before any data is touched.

use crate::error::{ProcessingError, Result};
use crate::features::{
    FeatureEngineeringStrategy, LogTransformation, MinMaxScaling, OneHotEncoding, StandardScaling,
};
use crate::missing::{DropMissingValues, FillMissingValues, MissingValueStrategy};
use crate::outliers::{IqrDetection, OutlierDetectionStrategy, ZScoreDetection};
use crate::split::{SimpleTrainTestSplit, SplitStrategy};

/// Select a missing-value strategy by name.
///
/// Recognized: `"drop"`, `"mean"`, `"median"`, `"mode"`, `"constant"`.
pub fn missing_value_strategy(name: &str) -> Result<Box<dyn MissingValueStrategy>> {
    match name {
        "drop" => Ok(Box::new(DropMissingValues::default())),
        "mean" | "median" | "mode" | "constant" => Ok(Box::new(FillMissingValues::new(name))),
        _ => Err(ProcessingError::unsupported("missing value handling", name)),
    }
}

/// Select an outlier detection strategy by name.
///
/// Recognized: `"z_score"` (uses `threshold`), `"IQR"`.
pub fn outlier_strategy(name: &str, threshold: f64) -> Result<Box<dyn OutlierDetectionStrategy>> {
    match name {
        "z_score" => Ok(Box::new(ZScoreDetection::new(threshold))),
        "IQR" => Ok(Box::new(IqrDetection)),
        _ => Err(ProcessingError::unsupported("outlier detection", name)),
    }
}

/// Select a feature-engineering strategy by name, confined to `features`.
///
/// Recognized: `"log"`, `"standard_scaling"`, `"minmax_scaling"`,
/// `"onehot_encoding"`.
pub fn feature_engineering_strategy(
    name: &str,
    features: Vec<String>,
) -> Result<Box<dyn FeatureEngineeringStrategy>> {
    match name {
        "log" => Ok(Box::new(LogTransformation::new(features))),
        "standard_scaling" => Ok(Box::new(StandardScaling::new(features))),
        "minmax_scaling" => Ok(Box::new(MinMaxScaling::new(features))),
        "onehot_encoding" => Ok(Box::new(OneHotEncoding::new(features))),
        _ => Err(ProcessingError::unsupported("feature engineering", name)),
    }
}

/// Select a split strategy by name.
///
/// Recognized: `"train_test"` (uses `test_size` and `seed`).
pub fn split_strategy(name: &str, test_size: f64, seed: u64) -> Result<Box<dyn SplitStrategy>> {
    match name {
        "train_test" => Ok(Box::new(SimpleTrainTestSplit::new(test_size, seed))),
        _ => Err(ProcessingError::unsupported("data split", name)),
    }
}
