//! Type coercion checks for a single cell.
//!
//! Numeric-looking text (`"42"`) coerces to integer and float columns.
//! Integer columns additionally require a zero fractional part, so `4.0`
//! passes and `4.5` fails with [`CoercionFailure::NonInteger`].

use etl_model::{CellValue, CoercionFailure, FieldType};

/// Check whether `value` can be read as `expected`.
///
/// `Ok(())` means the value is acceptable; the error carries the reason.
pub fn check(value: &CellValue, expected: FieldType) -> Result<(), CoercionFailure> {
    let invalid = CoercionFailure::InvalidType { expected };
    match expected {
        FieldType::Text => {
            if value.is_missing() {
                Err(invalid)
            } else {
                Ok(())
            }
        }
        FieldType::Float => as_number(value).map(|_| ()).ok_or(invalid),
        FieldType::Integer => {
            let number = as_number(value).ok_or(invalid)?;
            if number.fract() == 0.0 {
                Ok(())
            } else {
                Err(CoercionFailure::NonInteger)
            }
        }
    }
}

/// Numeric reading of a cell; only finite values count.
fn as_number(value: &CellValue) -> Option<f64> {
    let number = match value {
        CellValue::Integer(v) => *v as f64,
        CellValue::Float(v) => *v,
        CellValue::Text(text) => parse_decimal(text)?,
        CellValue::Missing => return None,
    };
    number.is_finite().then_some(number)
}

// Surrounding whitespace is ignored; blank text is not a number.
fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_boundary() {
        assert_eq!(check(&CellValue::Float(4.0), FieldType::Integer), Ok(()));
        assert_eq!(
            check(&CellValue::Float(4.5), FieldType::Integer),
            Err(CoercionFailure::NonInteger)
        );
        let err = check(&CellValue::text("abc"), FieldType::Integer).unwrap_err();
        assert!(err.to_string().contains("integer"));
    }

    #[test]
    fn numeric_text_coerces() {
        assert_eq!(check(&CellValue::text("42"), FieldType::Integer), Ok(()));
        assert_eq!(check(&CellValue::text("4.0"), FieldType::Integer), Ok(()));
        assert_eq!(check(&CellValue::text("3.5"), FieldType::Float), Ok(()));
        assert_eq!(check(&CellValue::Integer(7), FieldType::Float), Ok(()));
    }

    #[test]
    fn blanks_fail_numeric_types() {
        for value in [
            CellValue::text(""),
            CellValue::text("   "),
            CellValue::Missing,
        ] {
            assert!(check(&value, FieldType::Integer).is_err(), "{value:?}");
            assert!(check(&value, FieldType::Float).is_err(), "{value:?}");
        }
    }

    #[test]
    fn padded_numeric_text_coerces() {
        assert_eq!(check(&CellValue::text(" 4 "), FieldType::Integer), Ok(()));
        assert_eq!(check(&CellValue::text("\t2.5\n"), FieldType::Float), Ok(()));
        assert_eq!(
            check(&CellValue::text(" 4.5 "), FieldType::Integer),
            Err(CoercionFailure::NonInteger)
        );
    }

    #[test]
    fn non_finite_values_are_not_numbers() {
        assert!(check(&CellValue::text("inf"), FieldType::Float).is_err());
        assert!(check(&CellValue::text("NaN"), FieldType::Float).is_err());
        assert!(check(&CellValue::Float(f64::INFINITY), FieldType::Integer).is_err());
    }

    #[test]
    fn text_accepts_everything_but_missing() {
        assert_eq!(check(&CellValue::text(""), FieldType::Text), Ok(()));
        assert_eq!(check(&CellValue::Integer(1), FieldType::Text), Ok(()));
        assert_eq!(check(&CellValue::Float(2.5), FieldType::Text), Ok(()));
        assert_eq!(
            check(&CellValue::Missing, FieldType::Text),
            Err(CoercionFailure::InvalidType {
                expected: FieldType::Text
            })
        );
    }
}
