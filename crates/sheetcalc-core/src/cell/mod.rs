//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - [`Cell`] - Complete cell data including display value and format
//! - [`CellSnapshot`] - The address-keyed map formulas are evaluated against

mod address;
mod storage;
mod value;

pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use storage::{CellSnapshot, CellsInRange};
pub use value::{Cell, ErrorToken};
