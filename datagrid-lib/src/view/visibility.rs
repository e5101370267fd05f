//! Column visibility filter

use std::collections::HashSet;

use crate::model::Column;

/// The set of column ids currently shown.
///
/// Membership is all that matters: display order always comes from the
/// schema, so toggling an id twice restores the exact previous layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleColumns {
    ids: HashSet<String>,
}

impl VisibleColumns {
    /// Shows every column of the schema.
    pub fn all(columns: &[Column]) -> Self {
        Self {
            ids: columns.iter().map(|c| c.id.clone()).collect(),
        }
    }

    /// Shows only the given ids.
    pub fn only<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the column is shown.
    pub fn contains(&self, column_id: &str) -> bool {
        self.ids.contains(column_id)
    }

    /// Flips one id. Returns `true` if it is visible afterwards.
    pub fn toggle(&mut self, column_id: &str) -> bool {
        if self.ids.remove(column_id) {
            false
        } else {
            self.ids.insert(column_id.to_string());
            true
        }
    }
}

/// Columns to display: the visible ones, ordered by ordinal.
///
/// Columns sharing an ordinal keep their schema order.
pub fn visible_columns<'a>(columns: &'a [Column], visible: &VisibleColumns) -> Vec<&'a Column> {
    let mut shown: Vec<&Column> = columns.iter().filter(|c| visible.contains(&c.id)).collect();
    shown.sort_by_key(|c| c.ordinal_no);
    shown
}
