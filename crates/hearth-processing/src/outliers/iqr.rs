//! Interquartile-range outlier detection.

use polars::prelude::*;
use tracing::info;

use crate::dataset::{column_as_f64, numeric_column_names, sorted_quantile};
use crate::error::Result;
use crate::outliers::OutlierDetectionStrategy;

/// Flags cells outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` per column.
///
/// Quartiles are taken at sorted-index positions over the non-null
/// values.
#[derive(Debug, Clone, Default)]
pub struct IqrDetection;

/// Whisker multiplier for the IQR fences.
pub(crate) const IQR_FENCE: f64 = 1.5;

/// Lower and upper fences for a column, `None` when the column has no
/// non-null values.
pub(crate) fn iqr_bounds(values: &Float64Chunked) -> Option<(f64, f64)> {
    let q1 = sorted_quantile(values, 0.25)?;
    let q3 = sorted_quantile(values, 0.75)?;
    let iqr = q3 - q1;
    Some((q1 - IQR_FENCE * iqr, q3 + IQR_FENCE * iqr))
}

impl OutlierDetectionStrategy for IqrDetection {
    fn detect(&self, df: &DataFrame) -> Result<DataFrame> {
        info!("Detecting outliers using the IQR method");

        let mut mask_columns = Vec::new();
        for name in numeric_column_names(df) {
            let values = column_as_f64(df, &name)?;
            let bounds = iqr_bounds(&values);

            let flags: BooleanChunked = (&values)
                .into_iter()
                .map(|v| {
                    let flagged = match (v, bounds) {
                        (Some(val), Some((lower, upper))) => val < lower || val > upper,
                        _ => false,
                    };
                    Some(flagged)
                })
                .collect();
            let mut series = flags.into_series();
            series.rename(name.as_str().into());
            mask_columns.push(series.into());
        }

        let mask = DataFrame::new(mask_columns)?;
        info!("Outliers detected using the IQR method");
        Ok(mask)
    }
}
