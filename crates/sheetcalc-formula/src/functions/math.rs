//! Range aggregates: SUM, AVERAGE, MAX, MIN, COUNT

use crate::error::{FormulaError, FormulaResult};
use crate::number::{format_number, parse_number_prefix};
use crate::range::find_range;
use sheetcalc_core::CellSnapshot;

/// Numeric values of the existing cells in the range named by `args`, in row-major order
///
/// Cells whose display value has no numeric prefix are skipped.
pub fn numeric_values(args: &str, cells: &CellSnapshot) -> FormulaResult<Vec<f64>> {
    let range = find_range(args)?;
    Ok(cells
        .cells_in(&range)
        .filter_map(|cell| parse_number_prefix(&cell.display_value))
        .collect())
}

/// SUM(range)
pub fn fn_sum(args: &str, cells: &CellSnapshot) -> FormulaResult<String> {
    let values = numeric_values(args, cells)?;
    Ok(format_number(values.iter().sum()))
}

/// AVERAGE(range)
pub fn fn_average(args: &str, cells: &CellSnapshot) -> FormulaResult<String> {
    let values = numeric_values(args, cells)?;
    if values.is_empty() {
        return Err(FormulaError::DivisionByZero);
    }
    let sum: f64 = values.iter().sum();
    Ok(format_number(sum / values.len() as f64))
}

/// MAX(range)
pub fn fn_max(args: &str, cells: &CellSnapshot) -> FormulaResult<String> {
    let values = numeric_values(args, cells)?;
    extreme(&values, f64::max)
        .map(format_number)
        .ok_or(FormulaError::EmptyNumericSet("MAX"))
}

/// MIN(range)
pub fn fn_min(args: &str, cells: &CellSnapshot) -> FormulaResult<String> {
    let values = numeric_values(args, cells)?;
    extreme(&values, f64::min)
        .map(format_number)
        .ok_or(FormulaError::EmptyNumericSet("MIN"))
}

/// COUNT(range)
pub fn fn_count(args: &str, cells: &CellSnapshot) -> FormulaResult<String> {
    let values = numeric_values(args, cells)?;
    Ok(values.len().to_string())
}

fn extreme(values: &[f64], pick: fn(f64, f64) -> f64) -> Option<f64> {
    values.iter().copied().reduce(pick)
}
