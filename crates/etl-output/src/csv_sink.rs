//! CSV writers for transformed and rejected batches.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use serde::Serialize;
use tracing::{info, warn};

use etl_model::{Batch, REJECTION_REASON_COLUMN, RejectedBatch, Row, TableKind};

use crate::error::{OutputError, Result};

/// Where a batch was written and how many rows it held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinkReport {
    pub path: PathBuf,
    pub rows: usize,
}

/// Persists the two halves of a partitioned table.
pub trait BatchSink {
    fn write_valid(&mut self, kind: TableKind, batch: &Batch) -> Result<SinkReport>;
    fn write_rejected(&mut self, kind: TableKind, batch: &RejectedBatch) -> Result<SinkReport>;
}

/// Writes `<dir>/<output_name>.csv` files.
#[derive(Debug, Clone)]
pub struct CsvSink {
    transformed_dir: PathBuf,
    rejected_dir: PathBuf,
}

impl CsvSink {
    pub fn new(transformed_dir: impl Into<PathBuf>, rejected_dir: impl Into<PathBuf>) -> Self {
        Self {
            transformed_dir: transformed_dir.into(),
            rejected_dir: rejected_dir.into(),
        }
    }
}

impl BatchSink for CsvSink {
    fn write_valid(&mut self, kind: TableKind, batch: &Batch) -> Result<SinkReport> {
        write_transformed(&self.transformed_dir, kind, batch)
    }

    fn write_rejected(&mut self, kind: TableKind, batch: &RejectedBatch) -> Result<SinkReport> {
        write_rejected(&self.rejected_dir, kind, batch)
    }
}

/// Keeps written batches in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub valid: Vec<(TableKind, Batch)>,
    pub rejected: Vec<(TableKind, RejectedBatch)>,
}

impl BatchSink for MemorySink {
    fn write_valid(&mut self, kind: TableKind, batch: &Batch) -> Result<SinkReport> {
        self.valid.push((kind, batch.clone()));
        Ok(SinkReport {
            path: PathBuf::from(format!("memory://transformed/{}", kind.output_name())),
            rows: batch.len(),
        })
    }

    fn write_rejected(&mut self, kind: TableKind, batch: &RejectedBatch) -> Result<SinkReport> {
        self.rejected.push((kind, batch.clone()));
        Ok(SinkReport {
            path: PathBuf::from(format!("memory://rejected/{}", kind.output_name())),
            rows: batch.len(),
        })
    }
}

/// Write the valid rows of `kind` to `<dir>/<output_name>.csv`.
pub fn write_transformed(dir: &Path, kind: TableKind, batch: &Batch) -> Result<SinkReport> {
    let path = output_path(dir, kind)?;
    let file = create_file(&path)?;
    write_valid_csv(file, batch).map_err(|source| OutputError::CsvWrite {
        path: path.clone(),
        source,
    })?;
    info!(table = %kind, rows = batch.len(), path = %path.display(), "saved transformed rows");
    Ok(SinkReport {
        path,
        rows: batch.len(),
    })
}

/// Write rejected rows of `kind`, with a trailing `rejection_reason` column.
pub fn write_rejected(dir: &Path, kind: TableKind, batch: &RejectedBatch) -> Result<SinkReport> {
    let path = output_path(dir, kind)?;
    let file = create_file(&path)?;
    write_rejected_csv(file, batch).map_err(|source| OutputError::CsvWrite {
        path: path.clone(),
        source,
    })?;
    warn!(table = %kind, rows = batch.len(), path = %path.display(), "saved rejected rows");
    Ok(SinkReport {
        path,
        rows: batch.len(),
    })
}

/// Serialize valid rows as CSV into `writer`.
pub fn write_valid_csv<W: Write>(writer: W, batch: &Batch) -> csv::Result<()> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    csv.write_record(&batch.columns)?;
    for row in &batch.rows {
        csv.write_record(render_cells(row, &batch.columns))?;
    }
    csv.flush()?;
    Ok(())
}

/// Serialize rejected rows as CSV into `writer`.
pub fn write_rejected_csv<W: Write>(writer: W, batch: &RejectedBatch) -> csv::Result<()> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    let mut header: Vec<&str> = batch.columns.iter().map(String::as_str).collect();
    header.push(REJECTION_REASON_COLUMN);
    csv.write_record(&header)?;
    for rejected in &batch.rows {
        let mut record = render_cells(&rejected.row, &batch.columns);
        record.push(rejected.reason.clone());
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

// Absent columns render as empty cells.
fn render_cells(row: &Row, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|column| row.get(column).map(ToString::to_string).unwrap_or_default())
        .collect()
}

fn output_path(dir: &Path, kind: TableKind) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir.join(format!("{}.csv", kind.output_name())))
}

fn create_file(path: &Path) -> Result<fs::File> {
    fs::File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })
}
