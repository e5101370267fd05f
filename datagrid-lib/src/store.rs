//! Row store with structural sharing

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::error::TableError;
use crate::model::ID_COLUMN;
use crate::model::Row;
use crate::model::Value;

/// The row collection of one table, in insertion order.
///
/// Rows are held behind `Arc` so [`RowStore::update`] can hand back a new
/// store that shares every row it did not touch. Comparing two generations
/// with [`Arc::ptr_eq`] tells exactly which rows changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStore {
    rows: Vec<Arc<Row>>,
    index: HashMap<String, usize>,
}

impl RowStore {
    /// Builds a store, rejecting duplicate row ids.
    pub fn new(rows: Vec<Row>) -> Result<Self, TableError> {
        let mut index = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            if index.insert(row.id.clone(), position).is_some() {
                return Err(TableError::DuplicateRow(row.id.clone()));
            }
        }
        Ok(Self {
            rows: rows.into_iter().map(Arc::new).collect(),
            index,
        })
    }

    /// Returns the rows in insertion order.
    pub fn rows(&self) -> &[Arc<Row>] {
        &self.rows
    }

    /// Returns the row with the given id.
    pub fn get(&self, row_id: &str) -> Option<&Arc<Row>> {
        self.index.get(row_id).map(|&i| &self.rows[i])
    }

    /// Returns a single cell value.
    pub fn value(&self, row_id: &str, column_id: &str) -> Option<&Value> {
        self.get(row_id).and_then(|row| row.get(column_id))
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns a store with one field of one row replaced.
    ///
    /// Unknown rows, fields the row does not carry, and the identity field are
    /// ignored: the result is then equal to `self`.
    pub fn update(&self, row_id: &str, column_id: &str, value: Value) -> RowStore {
        let mut next = self.clone();
        next.apply(row_id, column_id, value);
        next
    }

    /// In-place form of [`RowStore::update`]. Returns `true` if a field changed.
    pub fn apply(&mut self, row_id: &str, column_id: &str, value: Value) -> bool {
        let Some(&position) = self.index.get(row_id) else {
            debug!("ignoring update for unknown row '{}'", row_id);
            return false;
        };
        if column_id == ID_COLUMN {
            debug!("ignoring update of identity field on row '{}'", row_id);
            return false;
        }
        let slot = &mut self.rows[position];
        if !slot.contains(column_id) {
            debug!("ignoring update of unknown field '{}' on row '{}'", column_id, row_id);
            return false;
        }
        Arc::make_mut(slot).insert(column_id, value)
    }
}
