//! Raw data ingestion for the insurance ETL pipeline.
//!
//! - **discovery**: locating `<table>_clean.csv` / `<table>_messy.csv`
//! - **csv_batch**: reading one CSV file into typed cells
//! - **source**: merging a table's sources into one batch

pub mod csv_batch;
pub mod discovery;
pub mod error;
pub mod source;

pub use csv_batch::{parse_cell, read_csv_batch};
pub use discovery::{SourceVariant, source_path, source_paths};
pub use error::{IngestError, Result};
pub use source::{BatchSource, CsvSource, load_raw_table};
