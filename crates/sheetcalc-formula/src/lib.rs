//! # sheetcalc-formula
//!
//! Formula evaluator for sheetcalc.
//!
//! This crate provides:
//! - Range extraction and enumeration over a cell snapshot
//! - Built-in functions (`SUM`, `AVERAGE`, `MAX`, `MIN`, `COUNT`, `TRIM`, `UPPER`, `LOWER`)
//! - Cell reference substitution for arithmetic formulas
//! - An arithmetic expression evaluator
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc_core::{Cell, CellSnapshot};
//! use sheetcalc_formula::evaluate;
//!
//! let mut cells = CellSnapshot::new();
//! cells.insert("A1", Cell::literal("2"));
//! cells.insert("A2", Cell::literal("3"));
//!
//! assert_eq!(evaluate("=SUM(A1:A2)", &cells), "5");
//! assert_eq!(evaluate("=A1^A2", &cells), "8");
//! assert_eq!(evaluate("=MAX(B1:B9)", &cells), "#ERROR!");
//! ```

pub mod arithmetic;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod number;
pub mod range;
pub mod references;

pub use arithmetic::{Arithmetic, ExpressionEvaluator, Value};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_with, try_evaluate};
pub use functions::Function;
