use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use etl_cli::config::{PipelineConfig, load_config};
use etl_cli::pipeline::{TableSummary, run_tables};
use etl_model::TableKind;
use etl_transform::GenderFallback;

use crate::cli::{GenderFallbackArg, RunArgs};

/// Everything one `run` produced, as written by `--report`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub tables: Vec<TableSummary>,
}

pub fn run_pipeline(args: &RunArgs, config_path: Option<&Path>) -> Result<RunReport> {
    let mut config = load_config(config_path).context("load configuration")?;
    apply_run_args(&mut config, args);
    let tables = selected_tables(&args.table)?;
    info!(
        tables = tables.len(),
        raw = %config.paths.raw.display(),
        dry_run = args.dry_run,
        "starting run"
    );

    let summaries = run_tables(&tables, &config, args.dry_run)?;
    let report = RunReport {
        dry_run: args.dry_run,
        tables: summaries,
    };
    if let Some(path) = &args.report {
        write_report(path, &report)?;
    }
    Ok(report)
}

pub fn run_db_url(config_path: Option<&Path>) -> Result<String> {
    let config = load_config(config_path).context("load configuration")?;
    Ok(config.database.masked_url())
}

/// `all` or a single table name.
fn selected_tables(name: &str) -> Result<Vec<TableKind>> {
    if name.trim().eq_ignore_ascii_case("all") {
        return Ok(TableKind::ALL.to_vec());
    }
    let kind = name
        .parse::<TableKind>()
        .with_context(|| format!("select table {name:?}"))?;
    Ok(vec![kind])
}

fn apply_run_args(config: &mut PipelineConfig, args: &RunArgs) {
    if let Some(dir) = &args.raw_dir {
        config.paths.raw = dir.clone();
    }
    if let Some(dir) = &args.transformed_dir {
        config.paths.transformed = dir.clone();
    }
    if let Some(dir) = &args.rejected_dir {
        config.paths.rejected = dir.clone();
    }
    if args.no_normalize {
        config.validation.normalize = false;
    }
    if args.parallel {
        config.validation.parallel = true;
    }
    if let Some(fallback) = args.gender_fallback {
        config.validation.gender_fallback = match fallback {
            GenderFallbackArg::PassThrough => GenderFallback::PassThrough,
            GenderFallbackArg::Other => GenderFallback::Other,
        };
    }
}

fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "wrote run report");
    Ok(())
}
