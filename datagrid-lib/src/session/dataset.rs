//! Construction input

use serde::Deserialize;
use serde::Serialize;

use crate::config::TableConfig;
use crate::error::TableError;
use crate::model::Column;
use crate::model::Row;

/// Columns, rows and settings for one table, as loaded from JSON.
///
/// ```json
/// {
///   "columns": [{"id": "id", "ordinalNo": 0, "title": "ID", "type": "string"}],
///   "rows": [{"id": "row-0"}],
///   "config": {"rowsPerPage": 20}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column schema.
    pub columns: Vec<Column>,
    /// Initial rows.
    pub rows: Vec<Row>,
    /// Settings; defaults when absent.
    #[serde(default)]
    pub config: TableConfig,
}

impl Dataset {
    /// Decodes a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }
}
