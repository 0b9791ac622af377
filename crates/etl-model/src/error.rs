use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown table: {name}")]
    UnknownTable { name: String },
    #[error("duplicate schema column: {column}")]
    DuplicateColumn { column: String },
    #[error("schema column name must not be empty")]
    EmptyColumnName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
