//! User intents

/// Everything the presentation layer can ask the table to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Show or hide a column.
    ToggleColumn { column_id: String },
    /// Sort by a column, flipping direction if it is already the ascending
    /// sort column.
    SetSort { column_id: String },
    /// Back to insertion order.
    ClearSort,
    /// Jump to a page (clamped into range).
    SetPage { page: usize },
    /// Next page, if any.
    NextPage,
    /// Previous page, if any.
    PreviousPage,
    /// Open an editor on a cell.
    BeginEdit { row_id: String, column_id: String },
    /// Update the open editor's text.
    EditDraft { raw: String },
    /// Validate and store an edit. Without `raw`, the tracked draft is used.
    CommitEdit {
        row_id: String,
        column_id: String,
        raw: Option<String>,
    },
    /// Close an editor without storing anything.
    CancelEdit { row_id: String, column_id: String },
}

impl Intent {
    /// Creates a toggle-column intent.
    pub fn toggle_column(column_id: impl Into<String>) -> Self {
        Intent::ToggleColumn {
            column_id: column_id.into(),
        }
    }

    /// Creates a set-sort intent.
    pub fn set_sort(column_id: impl Into<String>) -> Self {
        Intent::SetSort {
            column_id: column_id.into(),
        }
    }

    /// Creates a set-page intent.
    pub fn set_page(page: usize) -> Self {
        Intent::SetPage { page }
    }

    /// Creates a begin-edit intent.
    pub fn begin_edit(row_id: impl Into<String>, column_id: impl Into<String>) -> Self {
        Intent::BeginEdit {
            row_id: row_id.into(),
            column_id: column_id.into(),
        }
    }

    /// Creates an edit-draft intent.
    pub fn edit_draft(raw: impl Into<String>) -> Self {
        Intent::EditDraft { raw: raw.into() }
    }

    /// Creates a commit intent carrying the raw input.
    pub fn commit_edit(
        row_id: impl Into<String>,
        column_id: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Intent::CommitEdit {
            row_id: row_id.into(),
            column_id: column_id.into(),
            raw: Some(raw.into()),
        }
    }

    /// Creates a commit intent that uses the tracked draft.
    pub fn commit_draft(row_id: impl Into<String>, column_id: impl Into<String>) -> Self {
        Intent::CommitEdit {
            row_id: row_id.into(),
            column_id: column_id.into(),
            raw: None,
        }
    }

    /// Creates a cancel-edit intent.
    pub fn cancel_edit(row_id: impl Into<String>, column_id: impl Into<String>) -> Self {
        Intent::CancelEdit {
            row_id: row_id.into(),
            column_id: column_id.into(),
        }
    }
}
