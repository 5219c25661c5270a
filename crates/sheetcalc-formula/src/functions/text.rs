//! Text functions: TRIM, UPPER, LOWER
//!
//! The argument is the literal text inside the first pair of parentheses. It is never
//! evaluated, so `UPPER(A1)` yields `A1`.

use crate::error::{FormulaError, FormulaResult};
use lazy_regex::regex;
use sheetcalc_core::CellSnapshot;

/// Text between the first `(` and the next `)`
pub fn literal_argument<'a>(args: &'a str, function: &'static str) -> FormulaResult<&'a str> {
    regex!(r"\((.*?)\)")
        .captures(args)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|text| !text.is_empty())
        .ok_or(FormulaError::MissingArgument(function))
}

/// TRIM(text)
pub fn fn_trim(args: &str, _cells: &CellSnapshot) -> FormulaResult<String> {
    Ok(literal_argument(args, "TRIM")?.trim().to_string())
}

/// UPPER(text)
pub fn fn_upper(args: &str, _cells: &CellSnapshot) -> FormulaResult<String> {
    Ok(literal_argument(args, "UPPER")?.to_uppercase())
}

/// LOWER(text)
pub fn fn_lower(args: &str, _cells: &CellSnapshot) -> FormulaResult<String> {
    Ok(literal_argument(args, "LOWER")?.to_lowercase())
}
