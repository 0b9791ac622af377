//! Per-table pipeline: load, clean, normalize, partition, write.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span, trace, warn};

use etl_ingest::{BatchSource, CsvSource};
use etl_model::{Row, TableKind};
use etl_output::{BatchSink, CsvSink, SinkReport};
use etl_transform::{NormalizeOptions, clean_batch, normalize_table};
use etl_validate::{Partition, partition, partition_parallel};

use crate::config::{PipelineConfig, ValidationConfig};
use crate::logging::redact_value;

/// Row counts and output locations for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub table: TableKind,
    pub loaded: usize,
    pub duplicates_removed: usize,
    pub valid: usize,
    pub rejected: usize,
    pub transformed_output: Option<SinkReport>,
    pub rejected_output: Option<SinkReport>,
}

impl TableSummary {
    pub fn processed(&self) -> usize {
        self.valid + self.rejected
    }
}

/// Run one table against the configured directories.
///
/// With `dry_run` nothing is written.
pub fn run_table(kind: TableKind, config: &PipelineConfig, dry_run: bool) -> Result<TableSummary> {
    let source = CsvSource::new(&config.paths.raw);
    if dry_run {
        process_table(kind, &config.validation, &source, None)
    } else {
        let mut csv = CsvSink::new(&config.paths.transformed, &config.paths.rejected);
        let sink: &mut dyn BatchSink = &mut csv;
        process_table(kind, &config.validation, &source, Some(sink))
    }
}

/// Run `tables` in order, stopping at the first failure.
pub fn run_tables(
    tables: &[TableKind],
    config: &PipelineConfig,
    dry_run: bool,
) -> Result<Vec<TableSummary>> {
    tables
        .iter()
        .map(|&kind| run_table(kind, config, dry_run))
        .collect()
}

/// Run every table in processing order.
pub fn run_all(config: &PipelineConfig, dry_run: bool) -> Result<Vec<TableSummary>> {
    run_tables(&TableKind::ALL, config, dry_run)
}

/// Process one table from `source` into `sink`.
///
/// The rejected half is only written when it holds rows.
pub fn process_table(
    kind: TableKind,
    options: &ValidationConfig,
    source: &dyn BatchSource,
    sink: Option<&mut dyn BatchSink>,
) -> Result<TableSummary> {
    let span = info_span!("table", table = %kind);
    let _guard = span.enter();

    let raw = source
        .load(kind)
        .with_context(|| format!("load raw data for {kind}"))?;
    let loaded = raw.len();

    let cleaned = clean_batch(raw);
    let duplicates_removed = loaded - cleaned.len();
    debug!(rows = cleaned.len(), duplicates_removed, "cleaned");

    let prepared = if options.normalize {
        let normalize = NormalizeOptions {
            gender_fallback: options.gender_fallback,
        };
        normalize_table(kind, cleaned, &normalize)
    } else {
        cleaned
    };

    let schema = kind.schema();
    let Partition { valid, rejected } = if options.parallel {
        partition_parallel(prepared, schema)
    } else {
        partition(prepared, schema)
    };
    info!(valid = valid.len(), rejected = rejected.len(), "validated");
    for entry in &rejected.rows {
        debug!(row = entry.row.index, reason = %entry.reason, "rejected row");
        trace!(row = entry.row.index, values = %redact_value(&render_row(&entry.row)));
    }

    let (transformed_output, rejected_output) = match sink {
        Some(sink) => {
            let transformed = sink
                .write_valid(kind, &valid)
                .with_context(|| format!("write transformed {kind}"))?;
            let rejected_report = if rejected.is_empty() {
                None
            } else {
                Some(
                    sink.write_rejected(kind, &rejected)
                        .with_context(|| format!("write rejected {kind}"))?,
                )
            };
            (Some(transformed), rejected_report)
        }
        None => {
            warn!("dry run, outputs not written");
            (None, None)
        }
    };

    Ok(TableSummary {
        table: kind,
        loaded,
        duplicates_removed,
        valid: valid.len(),
        rejected: rejected.len(),
        transformed_output,
        rejected_output,
    })
}

fn render_row(row: &Row) -> String {
    row.cells
        .iter()
        .map(|(column, value)| format!("{column}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
