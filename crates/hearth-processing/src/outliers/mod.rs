//! Outlier detection and treatment.
//!
//! Detection strategies produce a boolean mask frame shaped like the
//! numeric subset of the input, `true` marking an outlier cell. The
//! [`OutlierDetector`] context selects the strategy and offers row-level
//! treatment plus box-plot diagnostics.

mod boxplot;
mod iqr;
mod zscore;

pub use boxplot::BoxPlot;
pub use iqr::IqrDetection;
pub use zscore::ZScoreDetection;

use polars::prelude::*;
use tracing::{debug, info, warn};

use crate::error::Result;

/// A pluggable policy for flagging outlier cells in numeric columns.
pub trait OutlierDetectionStrategy: Send + Sync {
    /// Returns a boolean frame with one column per numeric column of the
    /// input, aligned row-for-row; `true` marks an outlier cell. Null
    /// cells are never flagged.
    fn detect(&self, df: &DataFrame) -> Result<DataFrame>;
}

/// Context holding the currently selected outlier detection strategy.
pub struct OutlierDetector {
    strategy: Box<dyn OutlierDetectionStrategy>,
}

static_assertions::assert_impl_all!(OutlierDetector: Send);

impl OutlierDetector {
    /// Create a detector with an initial strategy.
    pub fn new(strategy: Box<dyn OutlierDetectionStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the held strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn OutlierDetectionStrategy>) {
        debug!("Switching outlier detection strategy");
        self.strategy = strategy;
    }

    /// Run the current detection strategy.
    pub fn detect(&self, df: &DataFrame) -> Result<DataFrame> {
        debug!("Executing outlier detection strategy");
        self.strategy.detect(df)
    }

    /// Detect outliers and treat them according to `method`.
    ///
    /// - `"remove"` drops every row in which any numeric column is
    ///   flagged.
    /// - `"cap"` is a recognized method that currently performs no
    ///   transformation; the input passes through unchanged.
    /// - Any other value logs a warning and returns the input unchanged.
    pub fn handle_outliers(&self, df: &DataFrame, method: &str) -> Result<DataFrame> {
        let mask = self.detect(df)?;
        match method {
            "remove" => {
                info!("Removing outlier rows from the dataset");
                let mut keep = vec![true; df.height()];
                for column in mask.get_columns() {
                    let flags = column.as_materialized_series().bool()?.clone();
                    for (i, flagged) in (&flags).into_iter().enumerate() {
                        if flagged.unwrap_or(false) {
                            keep[i] = false;
                        }
                    }
                }
                let keep_mask = BooleanChunked::from_slice("keep".into(), &keep);
                let cleaned = df.filter(&keep_mask)?;
                info!(
                    rows_removed = df.height() - cleaned.height(),
                    "Outlier handling completed"
                );
                Ok(cleaned)
            }
            "cap" => {
                // Recognized but intentionally not implemented; rows pass
                // through untouched.
                info!("Capping outliers requested; dataset passed through unchanged");
                Ok(df.clone())
            }
            other => {
                warn!(method = other, "Unknown method, no outlier handling performed");
                Ok(df.clone())
            }
        }
    }

    /// Produce one box-plot artifact per requested feature.
    ///
    /// The artifacts are a pure side output for external display; nothing
    /// downstream consumes them.
    pub fn visualize_outliers(&self, df: &DataFrame, features: &[&str]) -> Result<Vec<BoxPlot>> {
        let mut plots = Vec::with_capacity(features.len());
        for feature in features {
            plots.push(BoxPlot::from_column(df, feature)?);
        }
        info!(plots = plots.len(), "Outlier visualization completed");
        Ok(plots)
    }
}
