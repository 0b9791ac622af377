use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Primitive type expected for a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Integer,
    Float,
    Text,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Text => "text",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub field_type: FieldType,
}

/// Ordered column-to-type mapping for one table kind.
///
/// Column order is declaration order and drives the order of rejection
/// reasons. Column names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new<I, S>(columns: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (S, FieldType)>,
        S: Into<String>,
    {
        let mut built: Vec<Column> = Vec::new();
        for (name, field_type) in columns {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(ModelError::EmptyColumnName);
            }
            if built.iter().any(|column| column.name == name) {
                return Err(ModelError::DuplicateColumn { column: name });
            }
            built.push(Column { name, field_type });
        }
        Ok(Self { columns: built })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.field_type)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The five tables of the insurance warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Customers,
    Policies,
    Claims,
    Dates,
    Adjusters,
}

impl TableKind {
    /// Processing order for a full run. Dimensions first, the fact table last.
    pub const ALL: [TableKind; 5] = [
        TableKind::Customers,
        TableKind::Policies,
        TableKind::Dates,
        TableKind::Adjusters,
        TableKind::Claims,
    ];

    /// File stem of the raw sources (`<source>_clean.csv`, `<source>_messy.csv`).
    pub fn source_name(&self) -> &'static str {
        match self {
            TableKind::Customers => "customers",
            TableKind::Policies => "policies",
            TableKind::Claims => "claims",
            TableKind::Dates => "dates",
            TableKind::Adjusters => "adjusters",
        }
    }

    /// File stem of the transformed and rejected outputs.
    pub fn output_name(&self) -> &'static str {
        match self {
            TableKind::Claims => "claims_fact",
            other => other.source_name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TableKind::Customers => "Customer dimension",
            TableKind::Policies => "Policy dimension",
            TableKind::Claims => "Claims fact table",
            TableKind::Dates => "Date dimension",
            TableKind::Adjusters => "Adjuster dimension",
        }
    }

    /// Registered schema for this table.
    pub fn schema(&self) -> &'static Schema {
        let registry = registry();
        match self {
            TableKind::Customers => &registry.customers,
            TableKind::Policies => &registry.policies,
            TableKind::Claims => &registry.claims,
            TableKind::Dates => &registry.dates,
            TableKind::Adjusters => &registry.adjusters,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_name())
    }
}

impl FromStr for TableKind {
    type Err = ModelError;

    /// Accepts the source or output name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.source_name() == normalized || kind.output_name() == normalized)
            .ok_or_else(|| ModelError::UnknownTable {
                name: s.trim().to_string(),
            })
    }
}

struct SchemaRegistry {
    customers: Schema,
    policies: Schema,
    claims: Schema,
    dates: Schema,
    adjusters: Schema,
}

static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

fn registry() -> &'static SchemaRegistry {
    REGISTRY.get_or_init(|| SchemaRegistry {
        customers: fixed_schema(&[
            ("customer_id", FieldType::Integer),
            ("first_name", FieldType::Text),
            ("last_name", FieldType::Text),
            ("birth_date", FieldType::Text),
            ("gender", FieldType::Text),
            ("email", FieldType::Text),
            ("phone_number", FieldType::Text),
            ("region", FieldType::Text),
            ("risk_score", FieldType::Float),
        ]),
        policies: fixed_schema(&[
            ("policy_id", FieldType::Integer),
            ("policy_type", FieldType::Text),
            ("start_date", FieldType::Text),
            ("end_date", FieldType::Text),
            ("premium", FieldType::Float),
        ]),
        claims: fixed_schema(&[
            ("claim_id", FieldType::Integer),
            ("customer_id", FieldType::Integer),
            ("policy_id", FieldType::Integer),
            ("date_id", FieldType::Integer),
            ("adjuster_id", FieldType::Integer),
            ("amount", FieldType::Float),
            ("status", FieldType::Text),
        ]),
        dates: fixed_schema(&[
            ("date_id", FieldType::Integer),
            ("day", FieldType::Integer),
            ("month", FieldType::Text),
            ("year", FieldType::Integer),
            ("quarter", FieldType::Text),
            ("weekday", FieldType::Text),
        ]),
        adjusters: fixed_schema(&[
            ("adjuster_id", FieldType::Integer),
            ("name", FieldType::Text),
            ("region", FieldType::Text),
            ("team_lead_id", FieldType::Integer),
        ]),
    })
}

// Built-in column lists have unique, non-empty names, so construction is direct.
fn fixed_schema(columns: &[(&str, FieldType)]) -> Schema {
    Schema {
        columns: columns
            .iter()
            .map(|(name, field_type)| Column {
                name: (*name).to_string(),
                field_type: *field_type,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_rejects_duplicate_columns() {
        let err = Schema::new([("a", FieldType::Integer), ("a", FieldType::Text)]).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateColumn { .. }));
    }

    #[test]
    fn table_kind_parses_source_and_output_names() {
        assert_eq!("claims".parse::<TableKind>().unwrap(), TableKind::Claims);
        assert_eq!("claims_fact".parse::<TableKind>().unwrap(), TableKind::Claims);
        assert_eq!(" Customers ".parse::<TableKind>().unwrap(), TableKind::Customers);
        assert!("vehicles".parse::<TableKind>().is_err());
    }

    #[test]
    fn registry_keeps_declaration_order() {
        let names: Vec<&str> = TableKind::Adjusters.schema().column_names().collect();
        assert_eq!(names, vec!["adjuster_id", "name", "region", "team_lead_id"]);
        assert_eq!(
            TableKind::Customers.schema().field_type("risk_score"),
            Some(FieldType::Float)
        );
    }
}
