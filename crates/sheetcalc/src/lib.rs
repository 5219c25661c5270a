//! # sheetcalc
//!
//! A small spreadsheet formula engine.
//!
//! ## Features
//!
//! - Single-letter column addressing (`A1` to `Z50` by default)
//! - Range functions: `SUM`, `AVERAGE`, `MAX`, `MIN`, `COUNT`
//! - Text functions: `TRIM`, `UPPER`, `LOWER`
//! - Arithmetic formulas with cell references
//! - Error tokens (`#ERROR!`, `#DIV/0!`) instead of failures
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc::prelude::*;
//!
//! let mut sheet = Sheet::new();
//!
//! sheet.submit("A1", "2").unwrap();
//! sheet.submit("A2", "3").unwrap();
//! sheet.submit("B1", "=A1+A2*10").unwrap();
//! sheet.submit("B2", "=UPPER(done)").unwrap();
//!
//! assert_eq!(sheet.display_value("B1"), Some("32"));
//! assert_eq!(sheet.display_value("B2"), Some("DONE"));
//! ```

pub mod prelude;
pub mod sheet;

pub use sheet::Sheet;

// Re-export core types
pub use sheetcalc_core::{
    Cell, CellAddress, CellFormat, CellRange, CellSnapshot, Color, Error, ErrorToken,
    FormatPatch, Result, SheetOptions, DEFAULT_ROWS, MAX_COLS,
};

// Re-export formula types
pub use sheetcalc_formula::{
    evaluate, evaluate_with, try_evaluate, Arithmetic, ExpressionEvaluator, FormulaError,
    FormulaResult, Function, Value,
};
