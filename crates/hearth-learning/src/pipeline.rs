//! The fitted model artifact.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::regression::LinearRegression;
use crate::scaler::StandardScaler;

/// A trained two-stage pipeline: a fitted preprocessing transform
/// followed by a fitted regressor.
///
/// The stages stay individually addressable so an evaluator can re-apply
/// the exact training-time transform to new data before scoring. Every
/// model-building strategy produces this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPipeline {
    scaler: StandardScaler,
    regressor: LinearRegression,
}

impl ModelPipeline {
    /// Assemble a pipeline from its fitted stages.
    pub fn new(scaler: StandardScaler, regressor: LinearRegression) -> Self {
        Self { scaler, regressor }
    }

    /// The fitted preprocessing stage.
    pub fn preprocessor(&self) -> &StandardScaler {
        &self.scaler
    }

    /// The fitted regression stage.
    pub fn regressor(&self) -> &LinearRegression {
        &self.regressor
    }

    /// Run both stages on a feature frame.
    pub fn predict(&self, df: &DataFrame) -> Result<Vec<f64>> {
        let scaled = self.scaler.transform(df)?;
        let predictions = self.regressor.predict(&scaled)?;
        Ok(predictions.to_vec())
    }
}
