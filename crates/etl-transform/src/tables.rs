//! Table-specific field normalization.
//!
//! Each table names the columns it rewrites and the function applied to
//! them. Only text cells are rewritten; numbers and Missing stay as loaded,
//! except the customer risk score which is coerced to a float.

use tracing::debug;

use etl_model::{Batch, CellValue, Row, TableKind};

use crate::normalization::{
    GenderFallback, coerce_risk_score, normalize_date, normalize_email, normalize_gender,
    normalize_name, normalize_phone, normalize_region,
};

/// Options for table normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub gender_fallback: GenderFallback,
}

/// Normalize the fields of `batch` according to its table kind.
pub fn normalize_table(kind: TableKind, batch: Batch, options: &NormalizeOptions) -> Batch {
    let Batch { columns, rows } = batch;
    let mut changed = 0usize;
    let rows: Vec<Row> = rows
        .into_iter()
        .map(|mut row| {
            changed += normalize_row(kind, &mut row, options);
            row
        })
        .collect();
    debug!(table = %kind, rows = rows.len(), changed_cells = changed, "normalized fields");
    Batch::with_rows(columns, rows)
}

/// Normalize one row in place; returns the number of cells that changed.
pub fn normalize_row(kind: TableKind, row: &mut Row, options: &NormalizeOptions) -> usize {
    match kind {
        TableKind::Customers => normalize_customer(row, options.gender_fallback),
        TableKind::Policies => {
            rewrite_text(row, "start_date", normalize_date)
                + rewrite_text(row, "end_date", normalize_date)
        }
        TableKind::Adjusters => {
            rewrite_text(row, "name", normalize_name) + rewrite_text(row, "region", normalize_region)
        }
        TableKind::Claims | TableKind::Dates => 0,
    }
}

fn normalize_customer(row: &mut Row, fallback: GenderFallback) -> usize {
    let mut changed = rewrite_text(row, "first_name", normalize_name)
        + rewrite_text(row, "last_name", normalize_name)
        + rewrite_text(row, "birth_date", normalize_date)
        + rewrite_text(row, "gender", |value| normalize_gender(value, fallback))
        + rewrite_text(row, "email", normalize_email)
        + rewrite_text(row, "phone_number", normalize_phone)
        + rewrite_text(row, "region", normalize_region);
    if let Some(score) = row.get_mut("risk_score") {
        let coerced = coerce_risk_score(score);
        if coerced != *score {
            *score = coerced;
            changed += 1;
        }
    }
    changed
}

fn rewrite_text<F>(row: &mut Row, column: &str, normalize: F) -> usize
where
    F: Fn(&str) -> String,
{
    let Some(CellValue::Text(text)) = row.get_mut(column) else {
        return 0;
    };
    let normalized = normalize(text);
    if normalized == *text {
        0
    } else {
        *text = normalized;
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_row_is_standardized() {
        let mut row = Row::from_cells(
            0,
            [
                ("customer_id", CellValue::Integer(1)),
                ("first_name", CellValue::text("aNNa")),
                ("birth_date", CellValue::text("03/15/1990")),
                ("gender", CellValue::text("female")),
                ("email", CellValue::text("Anna@Mail.COM")),
                ("phone_number", CellValue::text("(555) 010-9999")),
                ("region", CellValue::text("midwest")),
                ("risk_score", CellValue::text("4.25")),
            ],
        );
        let changed = normalize_row(TableKind::Customers, &mut row, &NormalizeOptions::default());
        assert_eq!(changed, 7);
        assert_eq!(row.get("first_name"), Some(&CellValue::text("Anna")));
        assert_eq!(row.get("birth_date"), Some(&CellValue::text("1990-03-15")));
        assert_eq!(row.get("gender"), Some(&CellValue::text("F")));
        assert_eq!(row.get("email"), Some(&CellValue::text("anna@mail.com")));
        assert_eq!(row.get("phone_number"), Some(&CellValue::text("5550109999")));
        assert_eq!(row.get("region"), Some(&CellValue::text("Midwest")));
        assert_eq!(row.get("risk_score"), Some(&CellValue::Float(4.25)));
        assert_eq!(row.get("customer_id"), Some(&CellValue::Integer(1)));
    }

    #[test]
    fn numeric_cells_in_text_columns_are_left_alone() {
        let mut row = Row::from_cells(0, [("phone_number", CellValue::Integer(5551234567))]);
        let changed = normalize_row(TableKind::Customers, &mut row, &NormalizeOptions::default());
        assert_eq!(changed, 0);
    }

    #[test]
    fn claims_are_not_rewritten() {
        let mut row = Row::from_cells(0, [("status", CellValue::text("approved"))]);
        let changed = normalize_row(TableKind::Claims, &mut row, &NormalizeOptions::default());
        assert_eq!(changed, 0);
        assert_eq!(row.get("status"), Some(&CellValue::text("approved")));
    }
}
