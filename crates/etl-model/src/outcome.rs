use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::FieldType;
use crate::table::REASON_SEPARATOR;

/// Why a value could not be read as its expected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoercionFailure {
    /// Not parseable as the expected type, or missing.
    InvalidType { expected: FieldType },
    /// Numeric, but with a fractional part where an integer is required.
    NonInteger,
}

impl fmt::Display for CoercionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionFailure::InvalidType { expected } => {
                write!(f, "Invalid type: expected {expected}")
            }
            CoercionFailure::NonInteger => f.write_str("Non-integer value"),
        }
    }
}

/// One failing column of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFailure {
    pub column: String,
    pub failure: CoercionFailure,
    /// Kind of the value that was found (`text`, `float`, `missing`, ...).
    pub found: String,
}

impl fmt::Display for ColumnFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {} (got {})", self.column, self.failure, self.found)
    }
}

/// Result of validating one row; failures follow schema column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub failures: Vec<ColumnFailure>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn push(&mut self, failure: ColumnFailure) {
        self.failures.push(failure);
    }

    pub fn reasons(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    /// Reasons joined with `"; "`, the form stored on rejected rows.
    pub fn joined_reason(&self) -> String {
        self.reasons().join(REASON_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_reason_keeps_failure_order() {
        let mut outcome = ValidationOutcome::default();
        outcome.push(ColumnFailure {
            column: "day".to_string(),
            failure: CoercionFailure::NonInteger,
            found: "float".to_string(),
        });
        outcome.push(ColumnFailure {
            column: "year".to_string(),
            failure: CoercionFailure::InvalidType {
                expected: FieldType::Integer,
            },
            found: "missing".to_string(),
        });
        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.joined_reason(),
            "'day': Non-integer value (got float); \
             'year': Invalid type: expected integer (got missing)"
        );
    }
}
