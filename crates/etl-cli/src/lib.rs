//! Library side of the insurance ETL command line.
//!
//! - **config**: TOML and environment configuration
//! - **logging**: tracing subscriber setup and value redaction
//! - **pipeline**: per-table orchestration over sources and sinks

pub mod config;
pub mod logging;
pub mod pipeline;

pub use config::{PipelineConfig, load_config};
pub use pipeline::{TableSummary, process_table, run_all, run_table, run_tables};
