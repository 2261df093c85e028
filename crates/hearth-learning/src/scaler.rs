//! Feature standardization.

use ndarray::Array2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{column_names, feature_matrix};
use crate::error::{LearningError, Result};

/// A fitted standardization transform: per-column mean and sample
/// standard deviation captured at fit time.
///
/// `transform` always reuses the fitted statistics; it never recomputes
/// them from the frame it is given. Columns are resolved by name, so a
/// reordered frame transforms identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    columns: Vec<String>,
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit the scaler on a training frame.
    pub fn fit(df: &DataFrame) -> Result<StandardScaler> {
        let columns = column_names(df);
        let matrix = feature_matrix(df, &columns)?;
        let n = matrix.nrows() as f64;

        let mut means = Vec::with_capacity(columns.len());
        let mut stds = Vec::with_capacity(columns.len());
        for col in matrix.columns() {
            let mean = col.sum() / n;
            let std = if n > 1.0 {
                (col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
            } else {
                0.0
            };
            means.push(mean);
            // A constant column has no spread; dividing by one keeps the
            // centered zeros instead of blowing up.
            stds.push(if std > 0.0 { std } else { 1.0 });
        }

        debug!(columns = columns.len(), "Standard scaler fitted");
        Ok(StandardScaler {
            columns,
            means,
            stds,
        })
    }

    /// Apply the fitted transform to a frame.
    ///
    /// The frame must carry every fitted column (by name); extra columns
    /// are ignored.
    pub fn transform(&self, df: &DataFrame) -> Result<Array2<f64>> {
        if df.height() == 0 {
            return Err(LearningError::EmptyDataset);
        }
        let mut matrix = feature_matrix(df, &self.columns)?;
        for (j, col) in matrix.columns_mut().into_iter().enumerate() {
            let mean = self.means[j];
            let std = self.stds[j];
            for value in col {
                *value = (*value - mean) / std;
            }
        }
        Ok(matrix)
    }

    /// Names of the fitted columns, in fit order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Fitted per-column means.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Fitted per-column standard deviations.
    pub fn stds(&self) -> &[f64] {
        &self.stds
    }
}
