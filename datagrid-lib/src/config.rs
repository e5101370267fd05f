//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;

/// Default number of rows per page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 20;

/// Session-wide table settings.
///
/// # Example
///
/// ```
/// use datagrid_lib::TableConfig;
///
/// let config = TableConfig::default()
///     .with_rows_per_page(50)
///     .with_notice_on_ignored(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Rows shown per page, fixed for the session.
    ///
    /// Default: 20
    pub rows_per_page: usize,

    /// Raise a notice for intents that reference unknown rows or columns,
    /// or commit a cell that is not being edited.
    ///
    /// Default: false (those are only logged)
    pub notice_on_ignored: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            notice_on_ignored: false,
        }
    }
}

impl TableConfig {
    /// Sets rows per page.
    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page;
        self
    }

    /// Sets whether ignored intents raise a notice.
    pub fn with_notice_on_ignored(mut self, enabled: bool) -> Self {
        self.notice_on_ignored = enabled;
        self
    }

    /// Checks the settings.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.rows_per_page == 0 {
            return Err(TableError::InvalidPageSize);
        }
        Ok(())
    }
}
