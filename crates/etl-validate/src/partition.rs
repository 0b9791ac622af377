//! Split a batch into valid rows and rejected rows with reasons.
//!
//! Both outputs keep the input order and each row's original index. Every
//! input row lands in exactly one output.

use rayon::prelude::*;

use etl_model::{Batch, RejectedBatch, RejectedRow, Schema, ValidationOutcome};

use crate::row::validate_row;

/// Valid and rejected halves of one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub valid: Batch,
    pub rejected: RejectedBatch,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.valid.len() + self.rejected.len()
    }
}

/// Validate every row of `batch` and split it.
pub fn partition(batch: Batch, schema: &Schema) -> Partition {
    let outcomes: Vec<ValidationOutcome> = batch
        .rows
        .iter()
        .map(|row| validate_row(row, schema))
        .collect();
    split(batch, outcomes)
}

/// Same result as [`partition`], with rows validated on the rayon pool.
pub fn partition_parallel(batch: Batch, schema: &Schema) -> Partition {
    // Indexed collect keeps outcomes aligned with input order.
    let outcomes: Vec<ValidationOutcome> = batch
        .rows
        .par_iter()
        .map(|row| validate_row(row, schema))
        .collect();
    split(batch, outcomes)
}

/// Per-row validity flags, aligned with `batch.rows`.
pub fn validation_mask(batch: &Batch, schema: &Schema) -> Vec<bool> {
    batch
        .rows
        .iter()
        .map(|row| validate_row(row, schema).is_valid())
        .collect()
}

fn split(batch: Batch, outcomes: Vec<ValidationOutcome>) -> Partition {
    let Batch { columns, rows } = batch;
    let mut valid = Batch::new(columns.clone());
    let mut rejected = RejectedBatch::new(columns);
    for (row, outcome) in rows.into_iter().zip(outcomes) {
        if outcome.is_valid() {
            valid.push_row(row);
        } else {
            rejected.rows.push(RejectedRow {
                reason: outcome.joined_reason(),
                row,
            });
        }
    }
    Partition { valid, rejected }
}

#[cfg(test)]
mod tests {
    use etl_model::{CellValue, FieldType, Row};

    use super::*;

    #[test]
    fn empty_batch_yields_empty_halves() {
        let schema = Schema::new([("a", FieldType::Integer)]).unwrap();
        let result = partition(Batch::default(), &schema);
        assert!(result.valid.is_empty());
        assert!(result.rejected.is_empty());
    }

    #[test]
    fn mask_matches_partition() {
        let schema = Schema::new([("a", FieldType::Integer)]).unwrap();
        let batch = Batch::with_rows(
            vec!["a".to_string()],
            vec![
                Row::from_cells(0, [("a", CellValue::Integer(1))]),
                Row::from_cells(1, [("a", CellValue::text("x"))]),
                Row::from_cells(2, [("a", CellValue::Float(3.0))]),
            ],
        );
        assert_eq!(validation_mask(&batch, &schema), vec![true, false, true]);
        let result = partition(batch, &schema);
        assert_eq!(result.valid.indices(), vec![0, 2]);
        assert_eq!(result.rejected.indices(), vec![1]);
        assert_eq!(result.rejected.columns, vec!["a"]);
    }
}
