//! Column scaling strategies.

use polars::prelude::*;
use tracing::{debug, info};

use crate::dataset::{column_as_f64, mean, sample_std};
use crate::error::Result;
use crate::features::FeatureEngineeringStrategy;

/// Scales each target column to zero mean and unit variance.
///
/// A constant column has no spread and scales to all zeros.
#[derive(Debug, Clone)]
pub struct StandardScaling {
    features: Vec<String>,
}

impl StandardScaling {
    pub fn new(features: Vec<String>) -> Self {
        Self { features }
    }
}

impl FeatureEngineeringStrategy for StandardScaling {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        info!(features = ?self.features, "Applying standard scaling");

        let mut out = df.clone();
        for feature in &self.features {
            let values = column_as_f64(df, feature)?;
            let Some(col_mean) = mean(&values) else {
                debug!(column = %feature, "No non-null values, skipping scaling");
                continue;
            };
            let col_std = sample_std(&values);
            let divisor = if col_std > 0.0 { col_std } else { 1.0 };

            let scaled: Float64Chunked = (&values)
                .into_iter()
                .map(|v| v.map(|val| (val - col_mean) / divisor))
                .collect();
            let mut series = scaled.into_series();
            series.rename(feature.as_str().into());
            out.replace(feature.as_str(), series)?;
        }
        Ok(out)
    }
}

/// Scales each target column linearly into `[0, 1]`.
///
/// A constant column maps to the lower bound.
#[derive(Debug, Clone)]
pub struct MinMaxScaling {
    features: Vec<String>,
}

impl MinMaxScaling {
    pub fn new(features: Vec<String>) -> Self {
        Self { features }
    }
}

impl FeatureEngineeringStrategy for MinMaxScaling {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        info!(features = ?self.features, "Applying min-max scaling");

        let mut out = df.clone();
        for feature in &self.features {
            let values = column_as_f64(df, feature)?;
            let non_null: Vec<f64> = (&values).into_iter().flatten().collect();
            if non_null.is_empty() {
                debug!(column = %feature, "No non-null values, skipping scaling");
                continue;
            }
            let min = non_null.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = non_null.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let span = max - min;

            let scaled: Float64Chunked = (&values)
                .into_iter()
                .map(|v| {
                    v.map(|val| if span > 0.0 { (val - min) / span } else { 0.0 })
                })
                .collect();
            let mut series = scaled.into_series();
            series.rename(feature.as_str().into());
            out.replace(feature.as_str(), series)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== StandardScaling tests ====================

    #[test]
    fn test_standard_scaling_zero_mean_unit_variance() {
        let df = df!["v" => [1.0, 2.0, 3.0, 4.0, 5.0]].unwrap();
        let out = StandardScaling::new(vec!["v".into()]).apply(&df).unwrap();

        let scaled = column_as_f64(&out, "v").unwrap();
        let new_mean = mean(&scaled).unwrap();
        let new_std = sample_std(&scaled);
        assert!(new_mean.abs() < 1e-12);
        assert!((new_std - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_standard_scaling_constant_column() {
        let df = df!["v" => [7.0, 7.0, 7.0]].unwrap();
        let out = StandardScaling::new(vec!["v".into()]).apply(&df).unwrap();

        let scaled = column_as_f64(&out, "v").unwrap();
        assert!((&scaled).into_iter().flatten().all(|v| v == 0.0));
    }

    #[test]
    fn test_standard_scaling_only_touches_targets() {
        let df = df![
            "v" => [1.0, 2.0, 3.0],
            "w" => [10.0, 20.0, 30.0],
        ]
        .unwrap();
        let out = StandardScaling::new(vec!["v".into()]).apply(&df).unwrap();

        let w = column_as_f64(&out, "w").unwrap();
        assert_eq!(w.get(0), Some(10.0));
    }

    // ==================== MinMaxScaling tests ====================

    #[test]
    fn test_minmax_scales_into_unit_interval() {
        let df = df!["v" => [10.0, 20.0, 30.0]].unwrap();
        let out = MinMaxScaling::new(vec!["v".into()]).apply(&df).unwrap();

        let scaled = column_as_f64(&out, "v").unwrap();
        assert_eq!(scaled.get(0), Some(0.0));
        assert_eq!(scaled.get(1), Some(0.5));
        assert_eq!(scaled.get(2), Some(1.0));
    }

    #[test]
    fn test_minmax_constant_column_maps_to_zero() {
        let df = df!["v" => [4.0, 4.0]].unwrap();
        let out = MinMaxScaling::new(vec!["v".into()]).apply(&df).unwrap();

        let scaled = column_as_f64(&out, "v").unwrap();
        assert!((&scaled).into_iter().flatten().all(|v| v == 0.0));
    }

    #[test]
    fn test_minmax_preserves_nulls() {
        let df = df!["v" => [Some(1.0), None, Some(3.0)]].unwrap();
        let out = MinMaxScaling::new(vec!["v".into()]).apply(&df).unwrap();
        assert_eq!(out.column("v").unwrap().null_count(), 1);
    }
}
