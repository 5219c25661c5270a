//! Prelude module - common imports for sheetcalc users
//!
//! ```rust
//! use sheetcalc::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellAddress,
    CellFormat,
    CellRange,
    CellSnapshot,
    Color,
    // Error types
    Error,
    ErrorToken,
    FormatPatch,
    Result,
    // Main types
    Sheet,
    SheetOptions,
};
