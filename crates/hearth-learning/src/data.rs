//! DataFrame-to-matrix conversion.
//!
//! The strategies accept polars frames at the boundary and work on
//! ndarray internally. Conversion is strict: model inputs must be fully
//! numeric and fully observed, anything else is a structural error the
//! caller has to fix upstream (that is what the preprocessing stages are
//! for).

use ndarray::{Array1, Array2};
use polars::prelude::*;

use crate::error::{LearningError, Result};

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Extract one named column as a dense f64 vector.
pub fn column_vector(df: &DataFrame, name: &str) -> Result<Array1<f64>> {
    let column = df
        .column(name)
        .map_err(|_| LearningError::ColumnNotFound(name.to_string()))?;
    series_vector(column.as_materialized_series())
}

/// Convert a series to a dense f64 vector.
///
/// Fails on non-numeric dtype or null cells.
pub fn series_vector(series: &Series) -> Result<Array1<f64>> {
    if !is_numeric_dtype(series.dtype()) {
        return Err(LearningError::NotNumeric {
            column: series.name().to_string(),
        });
    }
    if series.null_count() > 0 {
        return Err(LearningError::shape(
            format!("column '{}' without missing values", series.name()),
            format!("{} missing values", series.null_count()),
        ));
    }
    let cast = series.cast(&DataType::Float64)?;
    let values: Vec<f64> = cast.f64()?.into_iter().flatten().collect();
    Ok(Array1::from_vec(values))
}

/// Convert named columns of a frame into a dense row-major matrix.
///
/// Column order in the output follows `columns`, not the frame, so the
/// caller controls feature order regardless of how the frame is laid
/// out.
pub fn feature_matrix(df: &DataFrame, columns: &[String]) -> Result<Array2<f64>> {
    if df.height() == 0 || columns.is_empty() {
        return Err(LearningError::EmptyDataset);
    }

    let mut matrix = Array2::zeros((df.height(), columns.len()));
    for (j, name) in columns.iter().enumerate() {
        let vector = column_vector(df, name)?;
        for (i, value) in vector.iter().enumerate() {
            matrix[[i, j]] = *value;
        }
    }
    Ok(matrix)
}

/// All column names of a frame, in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_matrix_follows_requested_order() {
        let df = df![
            "a" => [1.0, 2.0],
            "b" => [10.0, 20.0],
        ]
        .unwrap();

        let matrix = feature_matrix(&df, &["b".into(), "a".into()]).unwrap();
        assert_eq!(matrix.shape(), &[2, 2]);
        assert_eq!(matrix[[0, 0]], 10.0);
        assert_eq!(matrix[[0, 1]], 1.0);
    }

    #[test]
    fn test_feature_matrix_rejects_missing_column() {
        let df = df!["a" => [1.0]].unwrap();
        let err = feature_matrix(&df, &["b".into()]).unwrap_err();
        assert!(matches!(err, LearningError::ColumnNotFound(_)));
    }

    #[test]
    fn test_feature_matrix_rejects_empty_frame() {
        let df = DataFrame::empty();
        let err = feature_matrix(&df, &["a".into()]).unwrap_err();
        assert!(matches!(err, LearningError::EmptyDataset));
    }

    #[test]
    fn test_series_vector_rejects_strings() {
        let series = Series::new("kind".into(), &["a", "b"]);
        let err = series_vector(&series).unwrap_err();
        assert!(matches!(err, LearningError::NotNumeric { .. }));
    }

    #[test]
    fn test_series_vector_rejects_nulls() {
        let series = Series::new("v".into(), &[Some(1.0), None]);
        let err = series_vector(&series).unwrap_err();
        assert!(matches!(err, LearningError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_series_vector_casts_integers() {
        let series = Series::new("v".into(), &[1i64, 2, 3]);
        let vector = series_vector(&series).unwrap();
        assert_eq!(vector.to_vec(), vec![1.0, 2.0, 3.0]);
    }
}
