//! Range extraction from argument text

use lazy_regex::regex;
use sheetcalc_core::{CellAddress, CellRange};

use crate::error::{FormulaError, FormulaResult};

/// Find the first `<ref>:<ref>` range anywhere in `text`
///
/// This is a search, not a full match: `(A1:B3)` and `SUM(A1:B3)+1` both yield `A1:B3`.
/// The bounds are returned as written, without reordering.
///
/// Row `0` is accepted and lies above the first row: as a start bound it enumerates from
/// row 1, as an end bound it leaves nothing to enumerate.
pub fn find_range(text: &str) -> FormulaResult<CellRange> {
    let caps = regex!(r"([A-Z])([0-9]+):([A-Z])([0-9]+)")
        .captures(text)
        .ok_or_else(|| FormulaError::InvalidRange(text.to_string()))?;

    let (start_col, start_row) = bound(&caps, 1);
    let (end_col, end_row) = bound(&caps, 3);

    let range = match end_row {
        Some(end_row) => CellRange::new(
            CellAddress::new(start_row.unwrap_or(0), start_col),
            CellAddress::new(end_row, end_col),
        ),
        None => CellRange::new(CellAddress::new(1, start_col), CellAddress::new(0, end_col)),
    };
    Ok(range)
}

/// Column index and zero-based row of the bound whose letter is capture `group`
///
/// The row is `None` for row `0`. Rows past `u32` saturate.
fn bound(caps: &regex::Captures<'_>, group: usize) -> (u16, Option<u32>) {
    let col = caps[group].bytes().next().map_or(0, |b| (b - b'A') as u16);
    let row = match caps[group + 1].parse::<u32>() {
        Ok(0) => None,
        Ok(n) => Some(n - 1),
        Err(_) => Some(u32::MAX),
    };
    (col, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_range() {
        let range = find_range("(A1:B3)").unwrap();
        assert_eq!(range.start, CellAddress::new(0, 0));
        assert_eq!(range.end, CellAddress::new(2, 1));
    }

    #[test]
    fn test_find_range_ignores_surroundings() {
        assert_eq!(
            find_range("SUM(C2:C9)*2").unwrap(),
            CellRange::parse("C2:C9").unwrap()
        );
        assert_eq!(
            find_range("( B1:B2 , D1:D2 )").unwrap(),
            CellRange::parse("B1:B2").unwrap()
        );
    }

    #[test]
    fn test_find_range_keeps_reversed_bounds() {
        let range = find_range("(A5:A1)").unwrap();
        assert_eq!(range.start, CellAddress::new(4, 0));
        assert_eq!(range.end, CellAddress::new(0, 0));
    }

    #[test]
    fn test_find_range_no_match() {
        assert!(matches!(find_range("(A1)"), Err(FormulaError::InvalidRange(_))));
        assert!(matches!(find_range("(a1:b2)"), Err(FormulaError::InvalidRange(_))));
        assert!(matches!(find_range("(AA1:AB2)"), Err(FormulaError::InvalidRange(_))));
        assert!(matches!(find_range(""), Err(FormulaError::InvalidRange(_))));
    }

    #[test]
    fn test_find_range_row_zero() {
        // Start row 0 begins at the first row
        assert_eq!(
            find_range("(A0:B3)").unwrap(),
            CellRange::parse("A1:B3").unwrap()
        );

        // End row 0 encloses nothing
        assert!(find_range("(A1:A0)").unwrap().is_empty());
        assert!(find_range("(A0:C0)").unwrap().is_empty());
        assert_eq!(find_range("(A0:A0)").unwrap().cells().count(), 0);
    }

    #[test]
    fn test_find_range_huge_rows() {
        let range = find_range("(A1:Z99999999999)").unwrap();
        assert_eq!(range.end, CellAddress::new(u32::MAX, 25));
    }
}
