//! Read one raw CSV file into a typed batch.

use std::path::Path;

use csv::ReaderBuilder;

use etl_model::{Batch, CellValue, FieldType, Row, Schema};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Type a raw CSV cell for `column`.
///
/// Empty cells are Missing. Text-typed schema columns keep their raw text so
/// values such as phone numbers are not read as numbers. Every other column
/// infers integer, then float, then text. Raw text is not trimmed here.
pub fn parse_cell(raw: &str, field_type: Option<FieldType>) -> CellValue {
    match field_type {
        _ if raw.is_empty() => CellValue::Missing,
        Some(FieldType::Text) => CellValue::Text(raw.to_string()),
        _ => CellValue::infer(raw),
    }
}

/// Read `path` as a batch. Rows are indexed from `first_index`.
///
/// Short records leave their trailing columns absent; cells beyond the header
/// are dropped.
pub fn read_csv_batch(path: &Path, schema: &Schema, first_index: usize) -> Result<Batch> {
    let csv_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    let field_types: Vec<Option<FieldType>> = headers
        .iter()
        .map(|header| schema.field_type(header))
        .collect();

    let mut batch = Batch::new(headers.clone());
    for (offset, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let mut row = Row::new(first_index + offset);
        for ((header, field_type), raw) in headers.iter().zip(&field_types).zip(record.iter()) {
            row.insert(header.as_str(), parse_cell(raw, *field_type));
        }
        batch.push_row(row);
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_columns_keep_raw_digits() {
        assert_eq!(
            parse_cell("0123456789", Some(FieldType::Text)),
            CellValue::text("0123456789")
        );
        assert_eq!(parse_cell("12", Some(FieldType::Integer)), CellValue::Integer(12));
        assert_eq!(parse_cell("12.5", None), CellValue::Float(12.5));
        assert_eq!(parse_cell("", Some(FieldType::Text)), CellValue::Missing);
        assert_eq!(parse_cell(" 4 ", Some(FieldType::Integer)), CellValue::text(" 4 "));
    }
}
