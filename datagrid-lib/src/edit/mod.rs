//! Cell edit controller
//!
//! Each cell is either *viewing* or *editing*. At most one cell edits at a
//! time: the controller holds the open [`EditSession`], and a commit or
//! cancel closes it whether or not the new value was accepted.

mod coerce;

pub use coerce::*;

use log::debug;

use crate::error::EditError;
use crate::model::Column;
use crate::model::Row;
use crate::model::Value;

/// Edit state of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellState {
    /// Showing the stored value.
    #[default]
    Viewing,
    /// An editor is open with the given in-progress text.
    Editing { draft: String },
}

impl CellState {
    /// Returns `true` while an editor is open.
    pub fn is_editing(&self) -> bool {
        matches!(self, CellState::Editing { .. })
    }
}

/// An open editor on one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    /// Row being edited.
    pub row_id: String,
    /// Column being edited.
    pub column_id: String,
    /// Value before editing started, restored when the edit is rejected.
    pub original: Value,
    /// Current editor text.
    pub draft: String,
}

impl EditSession {
    /// Returns `true` if this session edits the given cell.
    pub fn is_cell(&self, row_id: &str, column_id: &str) -> bool {
        self.row_id == row_id && self.column_id == column_id
    }
}

/// A value accepted by a commit, ready to be written to the row store.
#[derive(Debug, Clone, PartialEq)]
pub struct Committed {
    /// Target row.
    pub row_id: String,
    /// Target column.
    pub column_id: String,
    /// Coerced value.
    pub value: Value,
    /// Value it replaces.
    pub previous: Value,
}

/// Tracks the one open cell editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditController {
    active: Option<EditSession>,
}

impl EditController {
    /// Creates a controller with every cell viewing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the open editor, if any.
    pub fn active(&self) -> Option<&EditSession> {
        self.active.as_ref()
    }

    /// Returns the edit state of one cell.
    pub fn state(&self, row_id: &str, column_id: &str) -> CellState {
        match &self.active {
            Some(session) if session.is_cell(row_id, column_id) => CellState::Editing {
                draft: session.draft.clone(),
            },
            _ => CellState::Viewing,
        }
    }

    /// Opens an editor on `(row, column)`, seeded with the current value.
    ///
    /// The identity column is refused and the cell stays viewing. Any other
    /// open editor must have been closed by the caller first; it is replaced.
    pub fn begin(&mut self, row: &Row, column: &Column) -> Result<(), EditError> {
        if column.is_identity() {
            return Err(EditError::IdentityColumn);
        }
        let original = row.value(&column.id).clone();
        debug!("editing {}/{}", row.id(), column.id);
        self.active = Some(EditSession {
            row_id: row.id().to_string(),
            column_id: column.id.clone(),
            draft: original.to_string(),
            original,
        });
        Ok(())
    }

    /// Replaces the draft text of the open editor.
    ///
    /// Returns `false` when nothing is being edited.
    pub fn set_draft(&mut self, raw: impl Into<String>) -> bool {
        match &mut self.active {
            Some(session) => {
                session.draft = raw.into();
                true
            }
            None => false,
        }
    }

    /// Closes the editor on `(row_id, column.id)` and validates its input.
    ///
    /// `raw` overrides the tracked draft when given. On success the caller
    /// writes [`Committed::value`] to the store; on a validation error the
    /// cell is back to viewing with its original value untouched.
    pub fn commit(
        &mut self,
        row_id: &str,
        column: &Column,
        raw: Option<&str>,
    ) -> Result<Committed, EditError> {
        let session = self.take(row_id, &column.id)?;
        let raw = raw.unwrap_or(&session.draft);
        let value = coerce(column, raw)?;
        Ok(Committed {
            row_id: session.row_id,
            column_id: session.column_id,
            value,
            previous: session.original,
        })
    }

    /// Closes the editor on `(row_id, column_id)` without writing anything.
    ///
    /// Returns the value the cell keeps.
    pub fn cancel(&mut self, row_id: &str, column_id: &str) -> Result<Value, EditError> {
        self.take(row_id, column_id).map(|session| session.original)
    }

    fn take(&mut self, row_id: &str, column_id: &str) -> Result<EditSession, EditError> {
        match self.active.take() {
            Some(session) if session.is_cell(row_id, column_id) => Ok(session),
            other => {
                self.active = other;
                Err(EditError::NotEditing {
                    row_id: row_id.to_string(),
                    column_id: column_id.to_string(),
                })
            }
        }
    }
}
