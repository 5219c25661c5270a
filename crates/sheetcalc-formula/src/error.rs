//! Formula error types

use sheetcalc_core::ErrorToken;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula evaluation
///
/// None of these escape [`crate::evaluate`]; each is stored as its [`ErrorToken`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// No `<ref>:<ref>` range in a range function's argument
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Text function without a non-empty parenthesized argument
    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),

    /// MAX or MIN over a range without numeric cells
    #[error("{0} found no numeric values")]
    EmptyNumericSet(&'static str),

    /// AVERAGE over a range without numeric cells
    #[error("Division by zero")]
    DivisionByZero,

    /// Arithmetic expression parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl FormulaError {
    /// The token stored in the cell for this error
    pub fn token(&self) -> ErrorToken {
        match self {
            FormulaError::DivisionByZero => ErrorToken::Div0,
            _ => ErrorToken::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(FormulaError::DivisionByZero.token(), ErrorToken::Div0);
        assert_eq!(FormulaError::EmptyNumericSet("MAX").token(), ErrorToken::Error);
        assert_eq!(FormulaError::Parse("x".into()).token(), ErrorToken::Error);
        assert_eq!(
            FormulaError::InvalidRange("SUM(A1)".into()).token(),
            ErrorToken::Error
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            FormulaError::EmptyNumericSet("MIN").to_string(),
            "MIN found no numeric values"
        );
        assert_eq!(
            FormulaError::MissingArgument("TRIM").to_string(),
            "Missing argument for TRIM"
        );
    }
}
