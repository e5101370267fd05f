//! Errors raised while building a table from its schema and rows

/// Construction-time failure. Once a [`Table`](crate::Table) exists, no
/// operation on it returns this error.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Two columns share the same id.
    #[error("Duplicate column id '{0}'")]
    DuplicateColumn(String),

    /// A `select` column was declared without any options.
    #[error("Select column '{0}' has no options")]
    EmptyOptions(String),

    /// A row has no usable `id` field.
    #[error("Row {index} has no string 'id' field")]
    MissingRowId { index: usize },

    /// Two rows share the same id.
    #[error("Duplicate row id '{0}'")]
    DuplicateRow(String),

    /// Rows per page must be positive.
    #[error("Rows per page must be greater than zero")]
    InvalidPageSize,

    /// The dataset could not be decoded.
    #[error("Invalid dataset: {0}")]
    Decode(#[from] serde_json::Error),
}
