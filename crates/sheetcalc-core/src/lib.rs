//! # sheetcalc-core
//!
//! Core data structures for the sheetcalc formula engine.
//!
//! This crate provides the fundamental types used throughout sheetcalc:
//! - [`CellAddress`] and [`CellRange`] - Single-letter A1 addressing and unnormalized ranges
//! - [`Cell`] - Display value, entered text and opaque formatting
//! - [`CellSnapshot`] - Address-keyed cell map with row-major range enumeration
//! - [`ErrorToken`] - The sentinels stored in place of a value on failure
//! - [`SheetOptions`] - Grid bounds and the default cell format
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc_core::{Cell, CellAddress, CellSnapshot};
//!
//! let mut cells = CellSnapshot::new();
//! cells.insert("A1", Cell::literal("5"));
//!
//! let addr = CellAddress::parse("A1").unwrap();
//! assert_eq!(cells.get_at(addr).unwrap().display_value, "5");
//! ```

pub mod cell;
pub mod error;
pub mod settings;
pub mod style;

// Re-exports for convenience
pub use cell::{
    Cell, CellAddress, CellRange, CellRangeIterator, CellSnapshot, CellsInRange, ErrorToken,
};
pub use error::{Error, Result};
pub use settings::SheetOptions;
pub use style::{CellFormat, Color, FormatPatch};

/// Number of addressable columns (single letters `A` through `Z`)
pub const MAX_COLS: u16 = 26;

/// Default number of rows in a sheet
pub const DEFAULT_ROWS: u32 = 50;
