//! One-hot encoding for categorical features.

use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{ProcessingError, Result};
use crate::features::FeatureEngineeringStrategy;

/// Replaces each target column with indicator columns, one per category.
///
/// Categories are ordered lexicographically and the first one is dropped,
/// so k categories produce k - 1 indicators and the encoding stays free
/// of redundant columns for linear models. Indicator columns are named
/// `{column}_{category}` and appended after the remaining columns; null
/// cells encode as all zeros.
#[derive(Debug, Clone)]
pub struct OneHotEncoding {
    features: Vec<String>,
}

impl OneHotEncoding {
    pub fn new(features: Vec<String>) -> Self {
        Self { features }
    }

    fn categories(series: &Series) -> Result<Vec<String>> {
        let str_chunked = series.str().map_err(|_| ProcessingError::ShapeMismatch {
            expected: format!("string column '{}'", series.name()),
            actual: series.dtype().to_string(),
        })?;
        let mut categories: Vec<String> = Vec::new();
        for val in str_chunked.into_iter().flatten() {
            if !categories.iter().any(|c| c == val) {
                categories.push(val.to_string());
            }
        }
        categories.sort();
        Ok(categories)
    }
}

impl FeatureEngineeringStrategy for OneHotEncoding {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        info!(features = ?self.features, "Applying one-hot encoding");

        let mut out = df.clone();
        for feature in &self.features {
            let column = df
                .column(feature)
                .map_err(|_| ProcessingError::ColumnNotFound(feature.clone()))?;
            let series = column.as_materialized_series();
            let categories = Self::categories(series)?;
            if categories.len() < 2 {
                debug!(column = %feature, "Fewer than two categories, dropping column only");
                out = out.drop(feature)?;
                continue;
            }

            out = out.drop(feature)?;
            let str_chunked = series.str().map_err(|_| ProcessingError::ShapeMismatch {
                expected: format!("string column '{feature}'"),
                actual: series.dtype().to_string(),
            })?;
            // First category is the implicit baseline.
            for category in &categories[1..] {
                let indicator: Float64Chunked = str_chunked
                    .into_iter()
                    .map(|v| Some(if v == Some(category.as_str()) { 1.0 } else { 0.0 }))
                    .collect();
                let mut series = indicator.into_series();
                series.rename(format!("{feature}_{category}").as_str().into());
                out.with_column(series)?;
            }
        }
        Ok(out)
    }
}
