//! Table session
//!
//! [`Table`] owns every piece of mutable state: the row store, the visible
//! column set, the sort, the current page and the open cell editor. It
//! changes only through [`Table::apply`], one [`Intent`] at a time, and each
//! intent runs to completion before the next. The derived [`GridView`] is
//! recomputed from that state on demand.

mod dataset;
mod intent;
mod notice;

pub use dataset::*;
pub use intent::*;
pub use notice::*;

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::TableConfig;
use crate::edit::CellState;
use crate::edit::EditController;
use crate::edit::EditSession;
use crate::error::EditError;
use crate::error::TableError;
use crate::model::Column;
use crate::model::ColumnType;
use crate::model::Row;
use crate::model::Value;
use crate::store::RowStore;
use crate::view::PageWindow;
use crate::view::SortIndicator;
use crate::view::SortSpec;
use crate::view::VisibleColumns;
use crate::view::clamp_page;
use crate::view::paginate;
use crate::view::sort_rows;
use crate::view::total_pages;
use crate::view::visible_columns;

/// What became of an intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State changed (or was already as requested).
    Applied,
    /// Refused with a notice: bad input or the identity column.
    Rejected(EditError),
    /// Dropped: the intent referenced something that does not exist or is
    /// not open.
    Ignored(EditError),
}

impl Outcome {
    /// Returns `true` if the intent was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// An editable table and its session state.
///
/// # Example
///
/// ```
/// use datagrid_lib::{Table, TableConfig};
/// use datagrid_lib::model::{Column, ColumnType, Row};
/// use datagrid_lib::session::Intent;
///
/// let columns = vec![
///     Column::new("id", "ID", ColumnType::String),
///     Column::new("age", "Age", ColumnType::Number).ordinal(1),
/// ];
/// let rows = vec![Row::new("r1").set("age", "30"), Row::new("r2").set("age", "5")];
/// let mut table = Table::new(columns, rows, TableConfig::default()).unwrap();
///
/// table.apply(Intent::set_sort("age"));
/// let view = table.view();
/// assert_eq!(view.rows[0].id(), "r2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    store: RowStore,
    visible: VisibleColumns,
    sort: Option<SortSpec>,
    page: usize,
    config: TableConfig,
    edits: EditController,
    notice: Option<Notice>,
}

impl Table {
    /// Builds a table from a schema and its initial rows.
    ///
    /// Fields a row does not define are stored as null.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        validate_columns(&columns)?;

        let mut rows = rows;
        for (index, row) in rows.iter_mut().enumerate() {
            if row.id().is_empty() {
                return Err(TableError::MissingRowId { index });
            }
            for column in &columns {
                if !row.contains(&column.id) {
                    debug!("row '{}' has no '{}', storing null", row.id(), column.id);
                    row.insert(column.id.clone(), Value::Null);
                }
            }
        }

        let store = RowStore::new(rows)?;
        info!(
            "table built: {} columns, {} rows, {} per page",
            columns.len(),
            store.len(),
            config.rows_per_page
        );

        Ok(Self {
            visible: VisibleColumns::all(&columns),
            columns,
            store,
            sort: None,
            page: 1,
            config,
            edits: EditController::new(),
            notice: None,
        })
    }

    /// Builds a table from a decoded dataset.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, TableError> {
        Self::new(dataset.columns, dataset.rows, dataset.config)
    }

    /// Builds a table from dataset JSON.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Self::from_dataset(Dataset::from_json(json)?)
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// Returns the full column schema in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns a column by id.
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Returns the row store.
    pub fn store(&self) -> &RowStore {
        &self.store
    }

    /// Returns the visible column set.
    pub fn visible(&self) -> &VisibleColumns {
        &self.visible
    }

    /// Returns the active sort.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Returns the current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the number of pages.
    pub fn total_pages(&self) -> usize {
        total_pages(self.store.len(), self.config.rows_per_page)
    }

    /// Returns the session settings.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the notice raised by the last intent.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns the open editor, if any.
    pub fn editing(&self) -> Option<&EditSession> {
        self.edits.active()
    }

    /// Returns the edit state of one cell.
    pub fn cell_state(&self, row_id: &str, column_id: &str) -> CellState {
        self.edits.state(row_id, column_id)
    }

    // =========================================================================
    // Derived view
    // =========================================================================

    /// Visible columns in display order.
    pub fn display_columns(&self) -> Vec<&Column> {
        visible_columns(&self.columns, &self.visible)
    }

    /// All rows in display order.
    pub fn sorted_rows(&self) -> Vec<Arc<Row>> {
        let sort = self.sort.as_ref();
        sort_rows(
            self.store.rows(),
            sort.map(|s| s.column.as_str()),
            sort.map(|s| s.direction).unwrap_or_default(),
        )
    }

    /// The current page of sorted rows.
    pub fn page_window(&self) -> PageWindow<Arc<Row>> {
        paginate(&self.sorted_rows(), self.page, self.config.rows_per_page)
    }

    /// Everything the presentation layer needs to draw the grid.
    pub fn view(&self) -> GridView<'_> {
        let window = self.page_window();
        GridView {
            columns: self.display_columns(),
            page: window.page(),
            total_pages: window.total_pages(),
            first_index: window.first_index(),
            last_index: window.last_index(),
            total_rows: window.total_rows(),
            rows: window.into_rows(),
            sort: self.sort.as_ref(),
            editing: self.edits.active(),
            notice: self.notice.as_ref(),
        }
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Applies one intent and returns the next state.
    pub fn reduce(mut self, intent: Intent) -> Self {
        self.apply(intent);
        self
    }

    /// Applies one intent in place.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        self.notice = None;
        let outcome = match intent {
            Intent::ToggleColumn { column_id } => self.toggle_column(&column_id),
            Intent::SetSort { column_id } => self.set_sort(&column_id),
            Intent::ClearSort => {
                self.blur();
                self.sort = None;
                Outcome::Applied
            }
            Intent::SetPage { page } => {
                self.blur();
                self.page = page;
                Outcome::Applied
            }
            Intent::NextPage => {
                self.blur();
                self.page = self.page.saturating_add(1);
                Outcome::Applied
            }
            Intent::PreviousPage => {
                self.blur();
                self.page = self.page.saturating_sub(1);
                Outcome::Applied
            }
            Intent::BeginEdit { row_id, column_id } => self.begin_edit(&row_id, &column_id),
            Intent::EditDraft { raw } => {
                if self.edits.set_draft(raw) {
                    Outcome::Applied
                } else {
                    self.refuse(EditError::NoActiveEdit)
                }
            }
            Intent::CommitEdit {
                row_id,
                column_id,
                raw,
            } => self.commit_edit(&row_id, &column_id, raw.as_deref()),
            Intent::CancelEdit { row_id, column_id } => match self.edits.cancel(&row_id, &column_id) {
                Ok(_) => {
                    debug!("edit of {}/{} cancelled", row_id, column_id);
                    Outcome::Applied
                }
                Err(e) => self.refuse(e),
            },
        };
        self.clamp_page();
        outcome
    }

    fn toggle_column(&mut self, column_id: &str) -> Outcome {
        if self.column(column_id).is_none() {
            return self.refuse(EditError::UnknownColumn(column_id.to_string()));
        }
        self.blur();
        let shown = self.visible.toggle(column_id);
        debug!("column '{}' {}", column_id, if shown { "shown" } else { "hidden" });
        Outcome::Applied
    }

    fn set_sort(&mut self, column_id: &str) -> Outcome {
        if self.column(column_id).is_none() {
            return self.refuse(EditError::UnknownColumn(column_id.to_string()));
        }
        self.blur();
        let next = SortSpec::toggle(self.sort.as_ref(), column_id);
        info!("sorting by '{}' {:?}", next.column, next.direction);
        self.sort = Some(next);
        Outcome::Applied
    }

    fn begin_edit(&mut self, row_id: &str, column_id: &str) -> Outcome {
        let Some(column) = self.column(column_id).cloned() else {
            return self.refuse(EditError::UnknownColumn(column_id.to_string()));
        };
        let Some(row) = self.store.get(row_id).cloned() else {
            return self.refuse(EditError::UnknownRow(row_id.to_string()));
        };
        if self.edits.active().is_some_and(|s| s.is_cell(row_id, column_id)) {
            return Outcome::Applied;
        }

        // Opening another cell takes focus from the current editor.
        self.blur();

        match self.edits.begin(&row, &column) {
            Ok(()) => Outcome::Applied,
            Err(e) => self.refuse(e),
        }
    }

    fn commit_edit(&mut self, row_id: &str, column_id: &str, raw: Option<&str>) -> Outcome {
        let Some(column) = self.column(column_id).cloned() else {
            return self.refuse(EditError::UnknownColumn(column_id.to_string()));
        };
        match self.edits.commit(row_id, &column, raw) {
            Ok(committed) => {
                if self
                    .store
                    .apply(&committed.row_id, &committed.column_id, committed.value.clone())
                {
                    info!(
                        "{}/{}: {} -> {}",
                        committed.row_id, committed.column_id, committed.previous, committed.value
                    );
                }
                Outcome::Applied
            }
            Err(e) => self.refuse(e),
        }
    }

    /// Commits the open editor, if any, with its current draft.
    fn blur(&mut self) {
        let Some(session) = self.edits.active() else {
            return;
        };
        let row_id = session.row_id.clone();
        let column_id = session.column_id.clone();
        debug!("focus left {}/{}", row_id, column_id);
        self.commit_edit(&row_id, &column_id, None);
    }

    fn refuse(&mut self, error: EditError) -> Outcome {
        if error.is_user_facing() {
            warn!("edit rejected: {}", error);
            self.notice = Some(Notice::warning(error.to_string()));
            Outcome::Rejected(error)
        } else {
            debug!("intent ignored: {}", error);
            if self.config.notice_on_ignored {
                self.notice = Some(Notice::info(error.to_string()));
            }
            Outcome::Ignored(error)
        }
    }

    fn clamp_page(&mut self) {
        let clamped = clamp_page(self.page, self.total_pages());
        if clamped != self.page {
            debug!("page {} clamped to {}", self.page, clamped);
            self.page = clamped;
        }
    }
}

/// Derived state for one render.
#[derive(Debug, Clone)]
pub struct GridView<'a> {
    /// Visible columns in display order.
    pub columns: Vec<&'a Column>,
    /// Rows on the current page, in display order.
    pub rows: Vec<Arc<Row>>,
    /// Current 1-based page.
    pub page: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// 1-based index of the first row shown.
    pub first_index: usize,
    /// 1-based index of the last row shown.
    pub last_index: usize,
    /// Row count across all pages.
    pub total_rows: usize,
    /// Active sort.
    pub sort: Option<&'a SortSpec>,
    /// Open editor.
    pub editing: Option<&'a EditSession>,
    /// Notice from the last intent.
    pub notice: Option<&'a Notice>,
}

impl GridView<'_> {
    /// Header sort marker for a column.
    pub fn indicator(&self, column_id: &str) -> SortIndicator {
        SortIndicator::for_column(self.sort, column_id)
    }

    /// Edit state of one cell.
    pub fn cell_state(&self, row_id: &str, column_id: &str) -> CellState {
        match self.editing {
            Some(session) if session.is_cell(row_id, column_id) => CellState::Editing {
                draft: session.draft.clone(),
            },
            _ => CellState::Viewing,
        }
    }

    /// Returns `true` if a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` if a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

fn validate_columns(columns: &[Column]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.id.as_str()) {
            return Err(TableError::DuplicateColumn(column.id.clone()));
        }
        if column.kind == ColumnType::Select && column.options.is_empty() {
            return Err(TableError::EmptyOptions(column.id.clone()));
        }
    }
    Ok(())
}
