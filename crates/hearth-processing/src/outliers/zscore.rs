//! Z-score outlier detection.

use polars::prelude::*;
use tracing::info;

use crate::dataset::{column_as_f64, mean, numeric_column_names, sample_std};
use crate::error::Result;
use crate::outliers::OutlierDetectionStrategy;

/// Flags cells whose absolute z-score exceeds a threshold.
///
/// The score is `|x - mean| / std` per column, with the sample standard
/// deviation (n - 1). A constant column has no spread and flags nothing.
#[derive(Debug, Clone)]
pub struct ZScoreDetection {
    threshold: f64,
}

impl Default for ZScoreDetection {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

impl ZScoreDetection {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl OutlierDetectionStrategy for ZScoreDetection {
    fn detect(&self, df: &DataFrame) -> Result<DataFrame> {
        info!(threshold = self.threshold, "Detecting outliers using the z-score method");

        let mut mask_columns = Vec::new();
        for name in numeric_column_names(df) {
            let values = column_as_f64(df, &name)?;
            let col_mean = mean(&values);
            let col_std = sample_std(&values);

            let flags: BooleanChunked = (&values)
                .into_iter()
                .map(|v| {
                    let flagged = match (v, col_mean) {
                        (Some(val), Some(m)) if col_std > 0.0 => {
                            ((val - m) / col_std).abs() > self.threshold
                        }
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
        info!(threshold = self.threshold, "Outliers detected with z-score threshold");
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged_count(mask: &DataFrame, column: &str) -> usize {
        mask.column(column)
            .unwrap()
            .as_materialized_series()
            .bool()
            .unwrap()
            .into_iter()
            .filter(|v| v.unwrap_or(false))
            .count()
    }

    #[test]
    fn test_extreme_value_flagged() {
        // 99 values around 200k plus one at 10M: the extreme cell is far
        // beyond three sample standard deviations.
        let mut values: Vec<f64> = (0..99)
            .map(|i| 200_000.0 + (i as f64 - 49.0) * 1_000.0)
            .collect();
        values.push(10_000_000.0);
        let df = df!["SalePrice" => values].unwrap();

        let mask = ZScoreDetection::default().detect(&df).unwrap();

        assert_eq!(mask.height(), df.height());
        assert_eq!(flagged_count(&mask, "SalePrice"), 1);
        let flags = mask
            .column("SalePrice")
            .unwrap()
            .as_materialized_series()
            .bool()
            .unwrap()
            .clone();
        assert_eq!(flags.get(99), Some(true));
    }

    #[test]
    fn test_mask_shape_matches_numeric_subset() {
        let df = df![
            "a" => [1.0, 2.0, 3.0],
            "label" => ["x", "y", "z"],
            "b" => [10i64, 20, 30],
        ]
        .unwrap();

        let mask = ZScoreDetection::default().detect(&df).unwrap();

        assert_eq!(mask.height(), 3);
        assert_eq!(mask.width(), 2);
        assert!(mask.column("a").is_ok());
        assert!(mask.column("b").is_ok());
        assert!(mask.column("label").is_err());
    }

    #[test]
    fn test_higher_threshold_flags_no_more_cells() {
        let mut values: Vec<f64> = (0..50).map(|i| i as f64).collect();
        values.push(1_000.0);
        let df = df!["v" => values].unwrap();

        let lenient = ZScoreDetection::new(2.0).detect(&df).unwrap();
        let strict = ZScoreDetection::new(4.0).detect(&df).unwrap();

        assert!(flagged_count(&strict, "v") <= flagged_count(&lenient, "v"));
    }

    #[test]
    fn test_constant_column_flags_nothing() {
        let df = df!["v" => [5.0, 5.0, 5.0, 5.0]].unwrap();
        let mask = ZScoreDetection::default().detect(&df).unwrap();
        assert_eq!(flagged_count(&mask, "v"), 0);
    }

    #[test]
    fn test_null_cells_never_flagged() {
        let df = df!["v" => [Some(1.0), None, Some(2.0), Some(3.0)]].unwrap();
        let mask = ZScoreDetection::new(0.1).detect(&df).unwrap();
        let flags = mask
            .column("v")
            .unwrap()
            .as_materialized_series()
            .bool()
            .unwrap()
            .clone();
        assert_eq!(flags.get(1), Some(false));
    }
}
