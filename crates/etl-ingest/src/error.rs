//! Error types for raw data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading raw sources.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Neither a clean nor a messy source exists for the table.
    #[error("no data found for table {table} in {dir}")]
    NoSourceData { table: String, dir: PathBuf },

    /// Failed to open or parse a CSV file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file has no header row: {path}")]
    MissingHeader { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::NoSourceData {
            table: "claims".to_string(),
            dir: PathBuf::from("data/raw"),
        };
        assert_eq!(err.to_string(), "no data found for table claims in data/raw");
    }
}
