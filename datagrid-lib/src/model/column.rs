//! Column schema

use serde::Deserialize;
use serde::Serialize;

/// The column holding each row's identity.
pub const ID_COLUMN: &str = "id";

/// Declared data type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free text, trimmed on edit.
    #[default]
    String,
    /// Numeric value.
    Number,
    /// True/false flag.
    Boolean,
    /// One value out of the column's `options`.
    Select,
}

impl ColumnType {
    /// Returns the wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Select => "select",
        }
    }
}

/// Static description of one table column.
///
/// Columns are immutable once the table is built; visibility and width are
/// view concerns derived from them.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::{Column, ColumnType};
///
/// let age = Column::new("age", "Age", ColumnType::Number)
///     .ordinal(2)
///     .width(100);
/// let dept = Column::select("department", "Department", ["Sales", "HR"]).ordinal(5);
///
/// assert_eq!(age.kind, ColumnType::Number);
/// assert_eq!(dept.options, vec!["Sales", "HR"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique identifier, also the field key into rows.
    pub id: String,

    /// Default display position. Ties keep schema order.
    #[serde(default)]
    pub ordinal_no: i64,

    /// Display label.
    pub title: String,

    /// Declared data type.
    #[serde(rename = "type", default)]
    pub kind: ColumnType,

    /// Display width hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,

    /// Legal values of a `select` column, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Column {
    /// Creates a column with ordinal 0 and no width hint.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            id: id.into(),
            ordinal_no: 0,
            title: title.into(),
            kind,
            width: None,
            options: Vec::new(),
        }
    }

    /// Creates a `select` column with the given options.
    pub fn select<I, S>(id: impl Into<String>, title: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut column = Self::new(id, title, ColumnType::Select);
        column.options = options.into_iter().map(Into::into).collect();
        column
    }

    /// Sets the ordinal.
    pub fn ordinal(mut self, ordinal_no: i64) -> Self {
        self.ordinal_no = ordinal_no;
        self
    }

    /// Sets the width hint.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Returns `true` if this is the row identity column.
    pub fn is_identity(&self) -> bool {
        self.id == ID_COLUMN
    }
}
