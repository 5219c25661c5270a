//! Built-in formula functions
//!
//! The library is closed: a formula body is a function call only when it starts with one of
//! the names below, written in uppercase and immediately followed by `(`.

pub mod math;
pub mod text;

use crate::error::FormulaResult;
use sheetcalc_core::CellSnapshot;
use std::fmt;
use tracing::debug;

/// Function implementation signature
///
/// Receives the argument text (starting at the opening parenthesis) and the cell snapshot.
pub type FunctionImpl = fn(&str, &CellSnapshot) -> FormulaResult<String>;

/// A built-in function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sum,
    Average,
    Max,
    Min,
    Count,
    Trim,
    Upper,
    Lower,
}

impl Function {
    /// Every built-in function
    pub const ALL: [Function; 8] = [
        Function::Sum,
        Function::Average,
        Function::Max,
        Function::Min,
        Function::Count,
        Function::Trim,
        Function::Upper,
        Function::Lower,
    ];

    /// Function name as written in formulas
    pub fn name(self) -> &'static str {
        match self {
            Function::Sum => "SUM",
            Function::Average => "AVERAGE",
            Function::Max => "MAX",
            Function::Min => "MIN",
            Function::Count => "COUNT",
            Function::Trim => "TRIM",
            Function::Upper => "UPPER",
            Function::Lower => "LOWER",
        }
    }

    /// Look up a function by its exact (uppercase) name
    pub fn from_name(name: &str) -> Option<Function> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Recognize a function call at the start of a formula body
    ///
    /// Returns the function and its argument text, which starts at the opening parenthesis.
    ///
    /// ```rust
    /// use sheetcalc_formula::functions::Function;
    ///
    /// assert_eq!(Function::sniff("SUM(A1:A3)"), Some((Function::Sum, "(A1:A3)")));
    /// assert_eq!(Function::sniff("SUM (A1:A3)"), None);
    /// assert_eq!(Function::sniff("sum(A1:A3)"), None);
    /// ```
    pub fn sniff(body: &str) -> Option<(Function, &str)> {
        let name_len = body
            .bytes()
            .take_while(|b| b.is_ascii_uppercase())
            .count();
        let (name, args) = body.split_at(name_len);
        if !args.starts_with('(') {
            return None;
        }
        Function::from_name(name).map(|function| (function, args))
    }

    fn implementation(self) -> FunctionImpl {
        match self {
            Function::Sum => math::fn_sum,
            Function::Average => math::fn_average,
            Function::Max => math::fn_max,
            Function::Min => math::fn_min,
            Function::Count => math::fn_count,
            Function::Trim => text::fn_trim,
            Function::Upper => text::fn_upper,
            Function::Lower => text::fn_lower,
        }
    }

    /// Apply the function to its argument text
    pub fn call(self, args: &str, cells: &CellSnapshot) -> FormulaResult<String> {
        debug!(function = self.name(), args, "dispatching function");
        (self.implementation())(args, cells)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
