//! Log transformation for skewed numeric features.

use polars::prelude::*;
use tracing::info;

use crate::dataset::column_as_f64;
use crate::error::Result;
use crate::features::FeatureEngineeringStrategy;

/// Applies `ln(1 + x)` to each target column.
///
/// The shifted logarithm keeps zero-valued cells finite, which matters
/// for count-like house features (porch area, basement area) that are
/// frequently zero.
#[derive(Debug, Clone)]
pub struct LogTransformation {
    features: Vec<String>,
}

impl LogTransformation {
    pub fn new(features: Vec<String>) -> Self {
        Self { features }
    }
}

impl FeatureEngineeringStrategy for LogTransformation {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        info!(features = ?self.features, "Applying log transformation");

        let mut out = df.clone();
        for feature in &self.features {
            let values = column_as_f64(df, feature)?;
            let transformed: Float64Chunked =
                (&values).into_iter().map(|v| v.map(f64::ln_1p)).collect();
            let mut series = transformed.into_series();
            series.rename(feature.as_str().into());
            out.replace(feature.as_str(), series)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_transform_values() {
        let df = df![
            "area" => [0.0, 1.0, 99.0],
            "price" => [100.0, 200.0, 300.0],
        ]
        .unwrap();

        let out = LogTransformation::new(vec!["area".into()])
            .apply(&df)
            .unwrap();

        let area = out.column("area").unwrap().as_materialized_series().clone();
        let values = area.f64().unwrap();
        assert_eq!(values.get(0), Some(0.0));
        assert!((values.get(1).unwrap() - 2f64.ln()).abs() < 1e-12);
        assert!((values.get(2).unwrap() - 100f64.ln()).abs() < 1e-12);

        // Untargeted columns stay untouched.
        let price = out.column("price").unwrap().as_materialized_series().clone();
        assert_eq!(price.f64().unwrap().get(0), Some(100.0));
    }

    #[test]
    fn test_log_transform_preserves_nulls() {
        let df = df!["area" => [Some(1.0), None]].unwrap();
        let out = LogTransformation::new(vec!["area".into()])
            .apply(&df)
            .unwrap();
        assert_eq!(out.column("area").unwrap().null_count(), 1);
    }

    #[test]
    fn test_missing_target_column_fails() {
        let df = df!["area" => [1.0]].unwrap();
        let err = LogTransformation::new(vec!["nope".into()])
            .apply(&df)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ProcessingError::ColumnNotFound(_)
        ));
    }

    #[test]
    fn test_non_numeric_target_fails() {
        let df = df!["kind" => ["a", "b"]].unwrap();
        let err = LogTransformation::new(vec!["kind".into()])
            .apply(&df)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ProcessingError::NotNumeric { .. }
        ));
    }
}
