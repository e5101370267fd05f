//! Row records

use std::collections::HashMap;

use super::ID_COLUMN;
use super::Value;

/// One record of table data.
///
/// Rows hold field values as a `HashMap<String, Value>` keyed by column id.
/// The identity lives in the `id` field as text and is fixed at creation:
/// [`Row::insert`] refuses to overwrite it.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::Row;
///
/// let row = Row::new("row-1")
///     .set("name", "Ada")
///     .set("age", 36);
///
/// assert_eq!(row.id(), "row-1");
/// assert_eq!(row.value("name").to_string(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub(crate) id: String,
    pub(crate) fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a row holding only its identity.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut fields = HashMap::new();
        fields.insert(ID_COLUMN.to_string(), Value::Text(id.clone()));
        Self { id, fields }
    }

    /// Returns the row identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value, treating an absent field as null.
    pub fn value(&self, field: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value. Writes to the identity field are ignored.
    ///
    /// Returns `false` if the write was ignored.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> bool {
        let field = field.into();
        if field == ID_COLUMN {
            return false;
        }
        self.fields.insert(field, value.into());
        true
    }
}
