//! Raw batch provider: merge a table's clean and messy sources.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use etl_model::{Batch, TableKind};

use crate::csv_batch::read_csv_batch;
use crate::discovery::source_paths;
use crate::error::{IngestError, Result};

/// Supplies the raw batch for a table.
pub trait BatchSource {
    fn load(&self, kind: TableKind) -> Result<Batch>;
}

/// Reads raw CSV sources from a directory.
#[derive(Debug, Clone)]
pub struct CsvSource {
    raw_dir: PathBuf,
}

impl CsvSource {
    pub fn new(raw_dir: impl Into<PathBuf>) -> Self {
        Self {
            raw_dir: raw_dir.into(),
        }
    }

    pub fn raw_dir(&self) -> &Path {
        &self.raw_dir
    }
}

impl BatchSource for CsvSource {
    fn load(&self, kind: TableKind) -> Result<Batch> {
        load_raw_table(&self.raw_dir, kind)
    }
}

/// Load and concatenate every raw source of `kind`.
///
/// Headers are the union of source headers in first-seen order. Rows are
/// re-indexed `0..n` across sources. Fails with
/// [`IngestError::NoSourceData`] when no source exists.
pub fn load_raw_table(raw_dir: &Path, kind: TableKind) -> Result<Batch> {
    let sources = source_paths(raw_dir, kind);
    if sources.is_empty() {
        return Err(IngestError::NoSourceData {
            table: kind.source_name().to_string(),
            dir: raw_dir.to_path_buf(),
        });
    }

    let schema = kind.schema();
    let mut combined = Batch::default();
    for (variant, path) in sources {
        let batch = read_csv_batch(&path, schema, combined.len())?;
        debug!(
            table = %kind,
            source = variant.suffix(),
            path = %path.display(),
            rows = batch.len(),
            "read raw source"
        );
        for column in &batch.columns {
            combined.ensure_column(column);
        }
        combined.rows.extend(batch.rows);
    }
    info!(table = %kind, rows = combined.len(), "loaded raw table");
    Ok(combined)
}
