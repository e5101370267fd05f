//! Raw input to typed value conversion

use crate::error::EditError;
use crate::model::Column;
use crate::model::ColumnType;
use crate::model::Value;
use crate::view::parse_number;

/// Literal accepted as `true` by boolean columns. Any other input is `false`.
pub const TRUE_TOKEN: &str = "true";

/// Converts raw editor input into a value for `column`.
///
/// - `number`: must parse, otherwise [`EditError::InvalidNumber`].
/// - `boolean`: `"true"` (any case, surrounding spaces ignored) is true,
///   anything else false.
/// - `select`: must be one of the column's options, otherwise
///   [`EditError::InvalidChoice`].
/// - `string`: trimmed.
pub fn coerce(column: &Column, raw: &str) -> Result<Value, EditError> {
    match column.kind {
        ColumnType::String => Ok(Value::Text(raw.trim().to_string())),
        ColumnType::Number => parse_number(raw)
            .map(Value::Number)
            .ok_or_else(|| EditError::InvalidNumber {
                column: column.title.clone(),
                raw: raw.to_string(),
            }),
        ColumnType::Boolean => Ok(Value::Bool(raw.trim().eq_ignore_ascii_case(TRUE_TOKEN))),
        ColumnType::Select => {
            if column.options.iter().any(|option| option == raw) {
                Ok(Value::Text(raw.to_string()))
            } else {
                Err(EditError::InvalidChoice {
                    column: column.title.clone(),
                    raw: raw.to_string(),
                    options: column.options.clone(),
                })
            }
        }
    }
}
