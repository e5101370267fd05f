//! Editable data grid core
//!
//! An in-memory state machine for an editable table: typed columns, a row
//! store with point updates, a stable sort engine, pagination, column
//! visibility and a per-cell edit controller. Rendering is left to the caller,
//! which translates raw input into [`session::Intent`]s and draws the derived
//! [`session::GridView`].

pub mod config;
pub mod edit;
pub mod error;
pub mod mock;
pub mod model;
pub mod session;
pub mod view;

mod store;

pub use config::TableConfig;
pub use session::Table;
pub use store::RowStore;
