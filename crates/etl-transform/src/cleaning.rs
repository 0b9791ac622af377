//! Whitespace trimming and exact-duplicate removal.

use std::collections::HashSet;

use etl_model::{Batch, CellValue, Row};

/// Trim every text cell, then drop rows whose cells repeat an earlier row.
///
/// Survivors keep their relative order and original indices. Trimming runs
/// first so that rows differing only by padding collapse in a single pass.
pub fn clean_batch(batch: Batch) -> Batch {
    let Batch { columns, rows } = batch;
    let trimmed = rows.into_iter().map(trim_row).collect();
    dedupe_rows(Batch::with_rows(columns, trimmed))
}

/// Strip leading and trailing whitespace from text cells of `row`.
pub fn trim_row(mut row: Row) -> Row {
    for value in row.cells.values_mut() {
        if let CellValue::Text(text) = value {
            let trimmed = text.trim();
            if trimmed.len() != text.len() {
                *text = trimmed.to_string();
            }
        }
    }
    row
}

/// Keep the first occurrence of each distinct set of cells.
///
/// An absent column and a Missing cell are the same value here, so rows
/// merged from sources with different headers still collapse.
pub fn dedupe_rows(batch: Batch) -> Batch {
    let Batch { columns, rows } = batch;
    let mut seen = HashSet::with_capacity(rows.len());
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(dedupe_key(&row)) {
            kept.push(row);
        }
    }
    Batch::with_rows(columns, kept)
}

fn dedupe_key(row: &Row) -> Vec<(String, CellValue)> {
    row.cells
        .iter()
        .filter(|(_, value)| !value.is_missing())
        .map(|(column, value)| (column.clone(), value.clone()))
        .collect()
}
