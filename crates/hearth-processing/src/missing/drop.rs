//! Row-dropping strategy for missing values.

use polars::prelude::*;
use tracing::info;

use crate::error::Result;
use crate::missing::MissingValueStrategy;

/// Removes every row containing at least one null cell.
///
/// `axis` and `thresh` are accepted for configuration compatibility, but
/// the drop is always row-wise and unconditional: any row with a null in
/// any column goes, regardless of the configured axis or threshold. This
/// matches the long-standing behavior downstream callers rely on.
#[derive(Debug, Clone)]
pub struct DropMissingValues {
    axis: u8,
    thresh: usize,
}

impl Default for DropMissingValues {
    fn default() -> Self {
        Self { axis: 0, thresh: 0 }
    }
}

impl DropMissingValues {
    pub fn new(axis: u8, thresh: usize) -> Self {
        Self { axis, thresh }
    }
}

impl MissingValueStrategy for DropMissingValues {
    fn handle(&self, df: &DataFrame) -> Result<DataFrame> {
        info!(
            axis = self.axis,
            thresh = self.thresh,
            "Dropping rows with missing values"
        );

        let mut keep = vec![true; df.height()];
        for column in df.get_columns() {
            let null_mask = column.as_materialized_series().is_null();
            for (i, is_null) in (&null_mask).into_iter().enumerate() {
                if is_null.unwrap_or(false) {
                    keep[i] = false;
                }
            }
        }

        let mask = BooleanChunked::from_slice("keep".into(), &keep);
        let cleaned = df.filter(&mask)?;
        info!(
            rows_removed = df.height() - cleaned.height(),
            "Missing values dropped"
        );
        Ok(cleaned)
    }
}
