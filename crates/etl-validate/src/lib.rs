//! Validation engine for the insurance ETL pipeline.
//!
//! - **coercion**: decides whether one cell satisfies a primitive type
//! - **row**: applies the coercion check to every schema column of a row
//! - **partition**: splits a batch into valid and rejected rows
//!
//! Validation failures are data: nothing in this crate returns an error for
//! a bad value.

pub mod coercion;
pub mod partition;
pub mod row;

pub use coercion::check;
pub use etl_model::{CoercionFailure, ColumnFailure, ValidationOutcome};
pub use partition::{Partition, partition, partition_parallel, validation_mask};
pub use row::validate_row;
