//! Output sinks for the insurance ETL pipeline.
//!
//! Valid rows are written to the transformed directory and rejected rows to
//! the rejected directory, one `<output_name>.csv` per table. Rejected files
//! carry the source columns plus a trailing `rejection_reason` column.

mod csv_sink;
mod error;

pub use csv_sink::{
    BatchSink, CsvSink, MemorySink, SinkReport, write_rejected, write_rejected_csv,
    write_transformed, write_valid_csv,
};
pub use error::{OutputError, Result};
