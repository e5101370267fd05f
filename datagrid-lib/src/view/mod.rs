//! Derived view computations
//!
//! Pure functions from a row or column snapshot to what should be displayed.
//! None of them mutate their input.

mod page;
mod sort;
mod visibility;

pub use page::*;
pub use sort::*;
pub use visibility::*;
