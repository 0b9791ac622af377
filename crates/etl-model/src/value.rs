use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single cell of a raw or cleaned row.
///
/// Floats compare and hash by bit pattern, so two cells are equal only when
/// they are field-by-field identical. Deduplication relies on this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Short name of the value kind, used in rejection reasons.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Integer(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
            CellValue::Missing => "missing",
        }
    }

    /// Infer a cell from raw CSV text: empty is Missing, then integer, float, text.
    ///
    /// Whole numbers outside the `i64` range stay text so they are written
    /// back digit for digit.
    pub fn infer(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Missing;
        }
        if let Ok(value) = raw.parse::<i64>() {
            return CellValue::Integer(value);
        }
        if is_integer_literal(raw) {
            return CellValue::Text(raw.to_string());
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => CellValue::Float(value),
            _ => CellValue::Text(raw.to_string()),
        }
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Integer(a), CellValue::Integer(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => a.to_bits() == b.to_bits(),
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            (CellValue::Missing, CellValue::Missing) => true,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Integer(value) => value.hash(state),
            CellValue::Float(value) => value.to_bits().hash(state),
            CellValue::Text(value) => value.hash(state),
            CellValue::Missing => {}
        }
    }
}

impl fmt::Display for CellValue {
    /// Renders the value the way it is written to CSV. Whole floats keep a
    /// trailing `.0` so they read back as floats.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            CellValue::Float(value) => write!(f, "{value}"),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_prefers_integer_then_float() {
        assert_eq!(CellValue::infer(""), CellValue::Missing);
        assert_eq!(CellValue::infer("42"), CellValue::Integer(42));
        assert_eq!(CellValue::infer("3.5"), CellValue::Float(3.5));
        assert_eq!(CellValue::infer("inf"), CellValue::text("inf"));
        assert_eq!(CellValue::infer(" 7 "), CellValue::text(" 7 "));
        assert_eq!(CellValue::infer("abc"), CellValue::text("abc"));
    }

    #[test]
    fn oversized_integers_stay_text() {
        assert_eq!(
            CellValue::infer("99999999999999999999"),
            CellValue::text("99999999999999999999")
        );
        assert_eq!(
            CellValue::infer("-99999999999999999999"),
            CellValue::text("-99999999999999999999")
        );
        assert_eq!(CellValue::infer("1e20"), CellValue::Float(1e20));
    }

    #[test]
    fn display_keeps_float_marker() {
        assert_eq!(CellValue::Float(4.0).to_string(), "4.0");
        assert_eq!(CellValue::Float(3.25).to_string(), "3.25");
        assert_eq!(CellValue::Integer(-3).to_string(), "-3");
        assert_eq!(CellValue::Missing.to_string(), "");
    }

    #[test]
    fn equality_is_kind_sensitive() {
        assert_ne!(CellValue::Integer(1), CellValue::Float(1.0));
        assert_ne!(CellValue::text("1"), CellValue::Integer(1));
        assert_eq!(CellValue::Float(f64::NAN), CellValue::Float(f64::NAN));
    }
}
