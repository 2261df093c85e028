//! Box-plot diagnostics for outlier inspection.

use polars::prelude::*;
use serde::Serialize;

use crate::dataset::{column_as_f64, sorted_quantile};
use crate::error::{ProcessingError, Result};
use crate::outliers::iqr::{IQR_FENCE, iqr_bounds};

/// Five-number summary of one feature, plus the points beyond the
/// whiskers.
///
/// This is plot data, not a rendered image: quartile box, whisker reach
/// and the individual outlying values, ready for any external display
/// layer to draw.
#[derive(Debug, Clone, Serialize)]
pub struct BoxPlot {
    pub feature: String,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within `Q1 - 1.5*IQR`.
    pub whisker_low: f64,
    /// Largest value within `Q3 + 1.5*IQR`.
    pub whisker_high: f64,
    /// Values beyond the whiskers, in row order.
    pub outliers: Vec<f64>,
}

impl BoxPlot {
    /// Summarize a numeric column of the dataset.
    ///
    /// Fails with `ColumnNotFound` / `NotNumeric` for a bad feature name
    /// and `EmptyDataset` when the column holds no non-null values.
    pub fn from_column(df: &DataFrame, feature: &str) -> Result<Self> {
        let values = column_as_f64(df, feature)?;
        let non_null: Vec<f64> = (&values).into_iter().flatten().collect();
        if non_null.is_empty() {
            return Err(ProcessingError::EmptyDataset);
        }

        let (Some(q1), Some(median), Some(q3), Some((lower, upper))) = (
            sorted_quantile(&values, 0.25),
            sorted_quantile(&values, 0.5),
            sorted_quantile(&values, 0.75),
            iqr_bounds(&values),
        ) else {
            return Err(ProcessingError::ContractViolation(format!(
                "quartiles unavailable for non-empty column '{feature}'"
            )));
        };

        let mut whisker_low = f64::INFINITY;
        let mut whisker_high = f64::NEG_INFINITY;
        let mut outliers = Vec::new();
        for val in &non_null {
            if *val < lower || *val > upper {
                outliers.push(*val);
            } else {
                whisker_low = whisker_low.min(*val);
                whisker_high = whisker_high.max(*val);
            }
        }

        // Every value outside the fences: collapse the whiskers onto the box.
        if whisker_low > whisker_high {
            whisker_low = q1;
            whisker_high = q3;
        }

        Ok(Self {
            feature: feature.to_string(),
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    /// Width of the interquartile box.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Reach of the whiskers as configured by the IQR fence rule.
    pub fn fence(&self) -> f64 {
        IQR_FENCE * self.iqr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_of_clean_column() {
        let df = df!["v" => (1..=8).map(|v| v as f64).collect::<Vec<_>>()].unwrap();
        let plot = BoxPlot::from_column(&df, "v").unwrap();

        assert_eq!(plot.feature, "v");
        assert_eq!(plot.q1, 3.0);
        assert_eq!(plot.median, 5.0);
        assert_eq!(plot.q3, 7.0);
        assert_eq!(plot.whisker_low, 1.0);
        assert_eq!(plot.whisker_high, 8.0);
        assert!(plot.outliers.is_empty());
    }

    #[test]
    fn test_outlier_points_listed() {
        let df = df!["v" => [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]].unwrap();
        let plot = BoxPlot::from_column(&df, "v").unwrap();

        assert_eq!(plot.outliers, vec![100.0]);
        assert!(plot.whisker_high <= 9.0);
    }

    #[test]
    fn test_serializes_for_external_display() {
        let df = df!["v" => [1.0, 2.0, 3.0, 4.0]].unwrap();
        let plot = BoxPlot::from_column(&df, "v").unwrap();

        let json = serde_json::to_string(&plot).unwrap();
        assert!(json.contains("\"feature\":\"v\""));
        assert!(json.contains("whisker_low"));
    }

    #[test]
    fn test_all_null_column_fails() {
        let df = df!["v" => [None::<f64>, None]].unwrap();
        let err = BoxPlot::from_column(&df, "v").unwrap_err();
        assert!(matches!(err, ProcessingError::EmptyDataset));
    }
}
