//! Value-substitution strategy for missing values.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::dataset::{
    fill_numeric_nulls, fill_string_nulls, is_numeric_dtype, is_string_dtype, numeric_mode,
    string_mode,
};
use crate::error::Result;
use crate::missing::MissingValueStrategy;

/// A caller-supplied constant used by the `"constant"` fill method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillValue {
    Number(f64),
    Text(String),
}

/// Fills null cells with a per-column statistic or a constant.
///
/// Supported methods:
/// - `"mean"` / `"median"`: numeric columns only
/// - `"mode"`: every column, most frequent value per column
/// - `"constant"`: the supplied [`FillValue`], applied to columns of the
///   matching type
///
/// An unrecognized method logs a warning and returns the dataset
/// unchanged; it never fails. Callers that depend on the fill happening
/// should check the output for remaining nulls.
#[derive(Debug, Clone)]
pub struct FillMissingValues {
    method: String,
    fill_value: Option<FillValue>,
}

impl FillMissingValues {
    /// Create a fill strategy for one of the statistic-based methods.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            fill_value: None,
        }
    }

    /// Create a `"constant"` fill strategy with the value to substitute.
    pub fn constant(value: FillValue) -> Self {
        Self {
            method: "constant".to_string(),
            fill_value: Some(value),
        }
    }

    fn fill_numeric_statistic(
        &self,
        df: &DataFrame,
        statistic: impl Fn(&Series) -> Option<f64>,
    ) -> Result<DataFrame> {
        let mut out = df.clone();
        for column in df.get_columns() {
            if !is_numeric_dtype(column.dtype()) || column.null_count() == 0 {
                continue;
            }
            let series = column.as_materialized_series();
            let Some(fill) = statistic(series) else {
                debug!(column = %column.name(), "No non-null values, skipping fill");
                continue;
            };
            let filled = fill_numeric_nulls(df, column.name().as_str(), fill)?;
            out.replace(column.name().as_str(), filled)?;
        }
        Ok(out)
    }

    fn fill_mode(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut out = df.clone();
        for column in df.get_columns() {
            if column.null_count() == 0 {
                continue;
            }
            let series = column.as_materialized_series();
            if is_numeric_dtype(series.dtype()) {
                let values = series.cast(&DataType::Float64)?;
                if let Some(fill) = numeric_mode(values.f64()?) {
                    let filled = fill_numeric_nulls(df, column.name().as_str(), fill)?;
                    out.replace(column.name().as_str(), filled)?;
                }
            } else if is_string_dtype(series.dtype()) {
                if let Some(fill) = string_mode(series) {
                    let filled = fill_string_nulls(series, &fill)?;
                    out.replace(column.name().as_str(), filled)?;
                }
            } else {
                debug!(column = %column.name(), "Mode fill skipped for unsupported dtype");
            }
        }
        Ok(out)
    }

    fn fill_constant(&self, df: &DataFrame) -> Result<DataFrame> {
        let Some(value) = &self.fill_value else {
            warn!("Constant fill requested without a fill value; dataset unchanged");
            return Ok(df.clone());
        };

        let mut out = df.clone();
        for column in df.get_columns() {
            if column.null_count() == 0 {
                continue;
            }
            let series = column.as_materialized_series();
            match value {
                FillValue::Number(n) if is_numeric_dtype(series.dtype()) => {
                    let filled = fill_numeric_nulls(df, column.name().as_str(), *n)?;
                    out.replace(column.name().as_str(), filled)?;
                }
                FillValue::Text(t) if is_string_dtype(series.dtype()) => {
                    let filled = fill_string_nulls(series, t)?;
                    out.replace(column.name().as_str(), filled)?;
                }
                _ => {
                    debug!(
                        column = %column.name(),
                        "Constant fill value does not match column type, skipping"
                    );
                }
            }
        }
        Ok(out)
    }
}

impl MissingValueStrategy for FillMissingValues {
    fn handle(&self, df: &DataFrame) -> Result<DataFrame> {
        let filled = match self.method.as_str() {
            "mean" => self.fill_numeric_statistic(df, |s| s.mean())?,
            "median" => self.fill_numeric_statistic(df, |s| s.median())?,
            "mode" => self.fill_mode(df)?,
            "constant" => self.fill_constant(df)?,
            other => {
                warn!(method = other, "Unknown fill method, no missing values handled");
                return Ok(df.clone());
            }
        };
        info!(method = %self.method, "Missing values filled");
        Ok(filled)
    }
}
