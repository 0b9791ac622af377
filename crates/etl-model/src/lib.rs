//! Data model for the insurance ETL pipeline.
//!
//! - **value**: tagged cell values (integer, float, text, missing)
//! - **schema**: column types, table schemas, and the schema registry
//! - **table**: rows, batches, and rejected batches
//! - **outcome**: per-row validation outcomes and rejection reasons

pub mod error;
pub mod outcome;
pub mod schema;
pub mod table;
pub mod value;

pub use error::{ModelError, Result};
pub use outcome::{CoercionFailure, ColumnFailure, ValidationOutcome};
pub use schema::{Column, FieldType, Schema, TableKind};
pub use table::{
    Batch, REASON_SEPARATOR, REJECTION_REASON_COLUMN, RejectedBatch, RejectedRow, Row,
};
pub use value::CellValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_row_serializes() {
        let rejected = RejectedRow {
            row: Row::from_cells(3, [("customer_id", CellValue::text("X"))]),
            reason: "'customer_id': Invalid type: expected integer (got text)".to_string(),
        };
        let json = serde_json::to_string(&rejected).expect("serialize rejected row");
        let round: RejectedRow = serde_json::from_str(&json).expect("deserialize rejected row");
        assert_eq!(round.row.index, 3);
        assert_eq!(round.reason, rejected.reason);
    }
}
