//! Shared dataset helpers.
//!
//! Common column-level operations used across the preprocessing strategies.
//! Columns are always addressed by name; nothing in this module depends on
//! column order.

use polars::prelude::*;

use crate::error::{ProcessingError, Result};

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
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

/// Check if a DataType holds string/categorical data.
#[inline]
pub fn is_string_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String | DataType::Categorical(_, _))
}

/// Names of the numeric columns, in frame order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

/// Project the dataset onto its numeric columns.
pub fn numeric_subset(df: &DataFrame) -> Result<DataFrame> {
    let names = numeric_column_names(df);
    Ok(df.select(names)?)
}

/// Materialize a column as an f64 ChunkedArray, preserving nulls.
pub fn column_as_f64(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)
        .map_err(|_| ProcessingError::ColumnNotFound(name.to_string()))?;
    let series = column.as_materialized_series();
    if !is_numeric_dtype(series.dtype()) {
        return Err(ProcessingError::NotNumeric {
            column: name.to_string(),
        });
    }
    let cast = series.cast(&DataType::Float64)?;
    Ok(cast.f64()?.clone())
}

/// Sample standard deviation (n - 1 denominator) over non-null values.
pub fn sample_std(values: &Float64Chunked) -> f64 {
    let non_null: Vec<f64> = values.into_iter().flatten().collect();
    let n = non_null.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }
    let mean = non_null.iter().sum::<f64>() / n;
    let variance = non_null.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Mean over non-null values, `None` when every value is null.
pub fn mean(values: &Float64Chunked) -> Option<f64> {
    let non_null: Vec<f64> = values.into_iter().flatten().collect();
    if non_null.is_empty() {
        return None;
    }
    Some(non_null.iter().sum::<f64>() / non_null.len() as f64)
}

/// Quantile by sorted-index position over non-null values.
///
/// `None` when the column holds no non-null values.
pub fn sorted_quantile(values: &Float64Chunked, quantile: f64) -> Option<f64> {
    let mut non_null: Vec<f64> = values.into_iter().flatten().collect();
    if non_null.is_empty() {
        return None;
    }
    non_null.sort_by(|a, b| a.total_cmp(b));
    let idx = (non_null.len() as f64 * quantile) as usize;
    let idx = idx.min(non_null.len() - 1);
    Some(non_null[idx])
}

/// Most frequent non-null value of a numeric column.
///
/// Ties resolve to the value seen first.
pub fn numeric_mode(values: &Float64Chunked) -> Option<f64> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for val in values.into_iter().flatten() {
        match counts.iter_mut().find(|(v, _)| v.to_bits() == val.to_bits()) {
            Some((_, count)) => *count += 1,
            None => counts.push((val, 1)),
        }
    }
    // Strict comparison keeps the first-seen value on ties.
    let mut best: Option<(f64, usize)> = None;
    for &(val, count) in &counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((val, count));
        }
    }
    best.map(|(val, _)| val)
}

/// Most frequent non-null value of a string column.
///
/// Ties resolve to the value seen first.
pub fn string_mode(series: &Series) -> Option<String> {
    let str_chunked = series.str().ok()?;
    let mut counts: Vec<(String, usize)> = Vec::new();
    for val in str_chunked.into_iter().flatten() {
        match counts.iter_mut().find(|(v, _)| v == val) {
            Some((_, count)) => *count += 1,
            None => counts.push((val.to_string(), 1)),
        }
    }
    // Strict comparison keeps the first-seen value on ties.
    let mut best: Option<(usize, usize)> = None;
    for (i, (_, count)) in counts.iter().enumerate() {
        if best.is_none_or(|(_, c)| *count > c) {
            best = Some((i, *count));
        }
    }
    best.map(|(i, _)| counts.swap_remove(i).0)
}

/// Fill null cells of a numeric column with a specific value.
///
/// The result is always Float64, matching how statistics-derived fill
/// values behave.
pub fn fill_numeric_nulls(df: &DataFrame, name: &str, fill_value: f64) -> Result<Series> {
    let values = column_as_f64(df, name)?;
    let filled: Float64Chunked = (&values)
        .into_iter()
        .map(|v| Some(v.unwrap_or(fill_value)))
        .collect();
    let mut series = filled.into_series();
    series.rename(name.into());
    Ok(series)
}

/// Fill null cells of a string column with a specific value.
pub fn fill_string_nulls(series: &Series, fill_value: &str) -> Result<Series> {
    let str_chunked = series.str().map_err(|_| ProcessingError::ShapeMismatch {
        expected: format!("string column '{}'", series.name()),
        actual: series.dtype().to_string(),
    })?;
    let filled: StringChunked = str_chunked
        .into_iter()
        .map(|v| Some(v.unwrap_or(fill_value).to_string()))
        .collect();
    let mut out = filled.into_series();
    out.rename(series.name().clone());
    Ok(out)
}

/// Total null count across all columns.
pub fn total_null_count(df: &DataFrame) -> usize {
    df.get_columns().iter().map(|col| col.null_count()).sum()
}
