//! Numeric normalization utilities.

use etl_model::CellValue;

/// Parses a string as a finite f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

/// Coerce a risk score to a float. Anything unparseable becomes Missing and
/// is left for validation to reject.
pub fn coerce_risk_score(value: &CellValue) -> CellValue {
    match value {
        CellValue::Float(v) if v.is_finite() => CellValue::Float(*v),
        CellValue::Integer(v) => CellValue::Float(*v as f64),
        CellValue::Text(text) => parse_f64(text).map_or(CellValue::Missing, CellValue::Float),
        _ => CellValue::Missing,
    }
}
