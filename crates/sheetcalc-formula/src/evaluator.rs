//! Formula evaluation
//!
//! A formula body is either a call to a built-in function, handled by [`Function`], or an
//! arithmetic expression. Arithmetic expressions have their cell references replaced by
//! display values and are then handed to an [`ExpressionEvaluator`].

use crate::arithmetic::{Arithmetic, ExpressionEvaluator};
use crate::error::FormulaResult;
use crate::functions::Function;
use crate::references::substitute;
use sheetcalc_core::CellSnapshot;
use tracing::debug;

/// Evaluate a formula against a snapshot of the other cells
///
/// Never fails: errors are returned as their error token (`#ERROR!` or `#DIV/0!`).
///
/// # Example
/// ```rust
/// use sheetcalc_core::{Cell, CellSnapshot};
/// use sheetcalc_formula::evaluate;
///
/// let cells: CellSnapshot = [("A1", Cell::literal("3")), ("A2", Cell::literal("4"))]
///     .into_iter()
///     .collect();
///
/// assert_eq!(evaluate("=A1+A2", &cells), "7");
/// assert_eq!(evaluate("=SUM(A1:A2)", &cells), "7");
/// assert_eq!(evaluate("=AVERAGE(B1:B2)", &cells), "#DIV/0!");
/// ```
pub fn evaluate(formula: &str, cells: &CellSnapshot) -> String {
    evaluate_with(formula, cells, &Arithmetic)
}

/// Evaluate a formula with a custom arithmetic evaluator
pub fn evaluate_with(
    formula: &str,
    cells: &CellSnapshot,
    arithmetic: &dyn ExpressionEvaluator,
) -> String {
    match try_evaluate_with(formula, cells, arithmetic) {
        Ok(value) => value,
        Err(err) => {
            debug!(formula, error = %err, "formula evaluation failed");
            err.token().as_str().to_string()
        }
    }
}

/// Evaluate a formula, keeping the error instead of converting it to a token
pub fn try_evaluate(formula: &str, cells: &CellSnapshot) -> FormulaResult<String> {
    try_evaluate_with(formula, cells, &Arithmetic)
}

fn try_evaluate_with(
    formula: &str,
    cells: &CellSnapshot,
    arithmetic: &dyn ExpressionEvaluator,
) -> FormulaResult<String> {
    let body = formula.strip_prefix('=').unwrap_or(formula);

    if let Some((function, args)) = Function::sniff(body) {
        return function.call(args, cells);
    }

    let expression = substitute(body, cells);
    debug!(body, expression = %expression, "evaluating arithmetic");
    Ok(arithmetic.evaluate(&expression)?.to_string())
}
