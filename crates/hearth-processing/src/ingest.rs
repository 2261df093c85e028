//! Dataset ingestion.
//!
//! Ingestors turn an on-disk source into an in-memory [`DataFrame`]. The
//! factory keys on the file extension, so the orchestration layer can
//! stay format-agnostic.

use std::path::Path;

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::info;

use crate::error::{ProcessingError, Result};

/// A source-format-specific dataset reader.
pub trait DataIngestor: Send + Sync + std::fmt::Debug {
    fn ingest(&self, path: &Path) -> Result<DataFrame>;
}

/// Reads a headered CSV file into a DataFrame.
#[derive(Debug, Clone, Default)]
pub struct CsvIngestor;

impl DataIngestor for CsvIngestor {
    fn ingest(&self, path: &Path) -> Result<DataFrame> {
        info!(path = %path.display(), "Ingesting CSV dataset");
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;
        info!(
            rows = df.height(),
            columns = df.width(),
            "Dataset ingested"
        );
        Ok(df)
    }
}

/// Pick an ingestor for the given path by its extension.
pub fn ingestor_for_path(path: &Path) -> Result<Box<dyn DataIngestor>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "csv" => Ok(Box::new(CsvIngestor)),
        _ => Err(ProcessingError::UnsupportedSource(
            path.display().to_string(),
        )),
    }
}
