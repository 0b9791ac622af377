#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Name of the column appended to persisted rejected rows.
pub const REJECTION_REASON_COLUMN: &str = "rejection_reason";

/// Separator between per-column reasons of one rejected row.
pub const REASON_SEPARATOR: &str = "; ";

/// One record of a batch.
///
/// `index` is the row's position in the batch it was loaded into and is kept
/// through cleaning, normalization, and partitioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub index: usize,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: BTreeMap::new(),
        }
    }

    /// Build a row from `(column, value)` pairs.
    pub fn from_cells<I, K, V>(index: usize, cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellValue>,
    {
        Self {
            index,
            cells: cells
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Value of `column`, with absent columns read as Missing.
    pub fn value_or_missing(&self, column: &str) -> &CellValue {
        static MISSING: CellValue = CellValue::Missing;
        self.cells.get(column).unwrap_or(&MISSING)
    }

    pub fn get_mut(&mut self, column: &str) -> Option<&mut CellValue> {
        self.cells.get_mut(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// True when both rows hold identical cells, regardless of index.
    pub fn same_cells(&self, other: &Row) -> bool {
        self.cells == other.cells
    }
}

/// Ordered rows of one table at one pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Header order used when the batch is persisted.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Batch {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Add a header column if it is not present yet.
    pub fn ensure_column(&mut self, column: &str) {
        if !self.columns.iter().any(|existing| existing == column) {
            self.columns.push(column.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.index).collect()
    }
}

/// An invalid row together with its joined rejection reasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub row: Row,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectedBatch {
    /// Header order of the source batch; `rejection_reason` is appended on write.
    pub columns: Vec<String>,
    pub rows: Vec<RejectedRow>,
}

impl RejectedBatch {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.rows.iter().map(|rejected| rejected.row.index).collect()
    }
}
