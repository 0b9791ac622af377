//! Row-level validation against a table schema.

use etl_model::{ColumnFailure, Row, Schema, ValidationOutcome};

use crate::coercion::check;

/// Validate every schema column of `row`, in schema order.
///
/// Columns absent from the row are checked as Missing. Columns not in the
/// schema are ignored. All failures are collected.
pub fn validate_row(row: &Row, schema: &Schema) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();
    for column in schema.columns() {
        let value = row.value_or_missing(&column.name);
        if let Err(failure) = check(value, column.field_type) {
            outcome.push(ColumnFailure {
                column: column.name.clone(),
                failure,
                found: value.kind().to_string(),
            });
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use etl_model::{CellValue, FieldType};

    use super::*;

    fn schema() -> Schema {
        Schema::new([
            ("c1", FieldType::Integer),
            ("c2", FieldType::Integer),
            ("c3", FieldType::Text),
            ("c4", FieldType::Float),
            ("c5", FieldType::Float),
        ])
        .unwrap()
    }

    #[test]
    fn collects_failures_in_schema_order() {
        let row = Row::from_cells(
            0,
            [
                ("c5", CellValue::text("n/a")),
                ("c1", CellValue::Integer(1)),
                ("c2", CellValue::Float(2.5)),
                ("c3", CellValue::text("ok")),
                ("c4", CellValue::Float(1.0)),
            ],
        );
        let outcome = validate_row(&row, &schema());
        let columns: Vec<&str> = outcome
            .failures
            .iter()
            .map(|failure| failure.column.as_str())
            .collect();
        assert_eq!(columns, vec!["c2", "c5"]);
        let joined = outcome.joined_reason();
        assert!(joined.find("'c2'").unwrap() < joined.find("'c5'").unwrap());
    }

    #[test]
    fn extra_columns_are_ignored_and_absent_ones_missing() {
        let row = Row::from_cells(
            0,
            [
                ("c1", CellValue::Integer(1)),
                ("c2", CellValue::Integer(2)),
                ("c3", CellValue::text("x")),
                ("c4", CellValue::Float(0.5)),
                ("notes", CellValue::text("Preferred customer")),
            ],
        );
        let outcome = validate_row(&row, &schema());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].column, "c5");
        assert_eq!(outcome.failures[0].found, "missing");
    }
}
