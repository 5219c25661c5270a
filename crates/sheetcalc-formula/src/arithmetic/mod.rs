//! Arithmetic evaluation of reference-free expressions
//!
//! Formulas that are not function calls end up here after their cell references have been
//! replaced by values. The evaluator knows nothing about cells; it accepts numbers, the
//! constants `true`, `false`, `Infinity` and `NaN`, parentheses, and the operators
//! `+ - * / % ^ == != < <= > >=`.
//!
//! Division by zero is not an error: it produces `Infinity`, `-Infinity` or `NaN` like any
//! other IEEE-754 operation.

pub mod ast;
pub mod parser;

pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use parser::parse_expression;

use crate::error::FormulaResult;
use crate::number::format_number;
use std::fmt;

/// Relative tolerance for equality comparisons
const REL_EPSILON: f64 = 1e-12;

/// Absolute tolerance for equality comparisons near zero
const ABS_EPSILON: f64 = 1e-15;

/// Result of an arithmetic evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
}

impl Value {
    /// Numeric view; booleans count as 1 and 0
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Boolean(true) => 1.0,
            Value::Boolean(false) => 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Something that can evaluate a reference-free expression
///
/// The formula evaluator only depends on this trait, so a different math engine can be
/// plugged in with [`crate::evaluate_with`].
pub trait ExpressionEvaluator {
    fn evaluate(&self, expression: &str) -> FormulaResult<Value>;
}

/// The built-in evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl ExpressionEvaluator for Arithmetic {
    fn evaluate(&self, expression: &str) -> FormulaResult<Value> {
        let ast = parse_expression(expression)?;
        Ok(eval(&ast))
    }
}

/// Parse and evaluate an expression with the built-in evaluator
///
/// # Example
/// ```rust
/// use sheetcalc_formula::arithmetic::{evaluate, Value};
///
/// assert_eq!(evaluate("(1+2)*3").unwrap(), Value::Number(9.0));
/// assert_eq!(evaluate("2^10 > 1000").unwrap(), Value::Boolean(true));
/// ```
pub fn evaluate(expression: &str) -> FormulaResult<Value> {
    Arithmetic.evaluate(expression)
}

/// Evaluate an AST
pub fn eval(expr: &Expr) -> Value {
    match expr {
        Expr::Number(n) => Value::Number(*n),
        Expr::Boolean(b) => Value::Boolean(*b),
        Expr::UnaryOp { op, operand } => {
            let n = eval(operand).as_number();
            match op {
                UnaryOperator::Negate => Value::Number(-n),
                UnaryOperator::Plus => Value::Number(n),
            }
        }
        Expr::BinaryOp { op, left, right } => {
            let l = eval(left).as_number();
            let r = eval(right).as_number();
            evaluate_binary_op(*op, l, r)
        }
    }
}

fn evaluate_binary_op(op: BinaryOperator, l: f64, r: f64) -> Value {
    match op {
        // Arithmetic operators
        BinaryOperator::Add => Value::Number(l + r),
        BinaryOperator::Subtract => Value::Number(l - r),
        BinaryOperator::Multiply => Value::Number(l * r),
        BinaryOperator::Divide => Value::Number(l / r),
        BinaryOperator::Modulo => Value::Number(modulo(l, r)),
        BinaryOperator::Power => Value::Number(l.powf(r)),

        // Comparison operators
        BinaryOperator::Equal => Value::Boolean(nearly_equal(l, r)),
        BinaryOperator::NotEqual => Value::Boolean(!nearly_equal(l, r)),
        BinaryOperator::LessThan => Value::Boolean(l < r && !nearly_equal(l, r)),
        BinaryOperator::LessEqual => Value::Boolean(l < r || nearly_equal(l, r)),
        BinaryOperator::GreaterThan => Value::Boolean(l > r && !nearly_equal(l, r)),
        BinaryOperator::GreaterEqual => Value::Boolean(l > r || nearly_equal(l, r)),
    }
}

/// Floored modulo: the result takes the divisor's sign, and `x % 0` is `x`
fn modulo(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        x
    } else {
        x - y * (x / y).floor()
    }
}

fn nearly_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let tolerance = (REL_EPSILON * a.abs().max(b.abs())).max(ABS_EPSILON);
    (a - b).abs() <= tolerance
}
