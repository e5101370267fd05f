//! Rejected cell edits

/// Reason a cell edit was refused or ignored.
///
/// These never escape the session as failures: the session turns them into a
/// [`Notice`](crate::session::Notice) (rejections) or a debug log line (stale
/// references).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    /// The identity column cannot be edited.
    #[error("Cannot edit ID - it must be unique for each row!")]
    IdentityColumn,

    /// Raw input for a number column did not parse.
    #[error("'{raw}' is not a valid number for {column}")]
    InvalidNumber { column: String, raw: String },

    /// Raw input for a select column is not one of its options.
    #[error("'{raw}' is not a valid choice for {column} (expected one of: {})", .options.join(", "))]
    InvalidChoice {
        column: String,
        raw: String,
        options: Vec<String>,
    },

    /// No row with this id exists.
    #[error("Row '{0}' not found")]
    UnknownRow(String),

    /// No column with this id exists.
    #[error("Column '{0}' not found")]
    UnknownColumn(String),

    /// The cell is not currently being edited.
    #[error("Cell '{row_id}'/'{column_id}' is not being edited")]
    NotEditing { row_id: String, column_id: String },

    /// A draft arrived while no cell is being edited.
    #[error("No cell is being edited")]
    NoActiveEdit,
}

impl EditError {
    /// Returns `true` for errors the user should be told about.
    ///
    /// Stale references (unknown row/column, commit or draft on a closed cell) are only
    /// possible when the presentation layer is out of sync, so they are not.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            EditError::IdentityColumn
                | EditError::InvalidNumber { .. }
                | EditError::InvalidChoice { .. }
        )
    }
}
