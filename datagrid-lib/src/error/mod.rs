//! Error types

mod edit;
mod table;

pub use edit::*;
pub use table::*;
