//! Cleaning and normalization for insurance ETL batches.
//!
//! - **cleaning**: whitespace trimming and exact-duplicate removal
//! - **normalization**: field-level standardization functions
//! - **tables**: which normalizations apply to which table columns

pub mod cleaning;
pub mod normalization;
pub mod tables;

pub use cleaning::{clean_batch, dedupe_rows, trim_row};
pub use normalization::{GenderFallback, normalize_date};
pub use tables::{NormalizeOptions, normalize_row, normalize_table};
