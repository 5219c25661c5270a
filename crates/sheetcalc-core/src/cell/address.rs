//! Cell address and range types

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "Z50")
///
/// Columns are a single uppercase letter (`A`-`Z`), rows are 1-based in text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., Z=25)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// The whole input must match `[A-Z][0-9]+`; no whitespace, no `$` markers and no
    /// lowercase letters are accepted.
    ///
    /// # Examples
    /// ```
    /// use sheetcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B12").unwrap();
    /// assert_eq!(addr.row, 11);
    /// assert_eq!(addr.col, 1);
    ///
    /// assert!(CellAddress::parse("AA1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();

        let letter = match bytes.first() {
            Some(b) if b.is_ascii_uppercase() => *b,
            _ => {
                return Err(Error::InvalidAddress(format!(
                    "expected a column letter A-Z in '{}'",
                    s
                )))
            }
        };

        let row_str = &s[1..];
        if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!("invalid row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("row number too large in '{}'", s)))?;

        // Rows are 1-based in text, 0-based internally
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self {
            row: row - 1,
            col: (letter - b'A') as u16,
        })
    }

    /// Format a (row, col) pair as A1-style text
    ///
    /// Fails when `col` has no single-letter name.
    pub fn encode(row: u32, col: u16) -> Result<String> {
        let letter = Self::column_letter(col).ok_or(Error::ColumnOutOfBounds(col, MAX_COLS - 1))?;
        Ok(format!("{}{}", letter, row as u64 + 1))
    }

    /// Column index to its letter (0 = A, 25 = Z)
    pub fn column_letter(col: u16) -> Option<char> {
        if col < MAX_COLS {
            Some((b'A' + col as u8) as char)
        } else {
            None
        }
    }

    /// Format as A1-style string
    ///
    /// Columns past `Z` have no letter and render as `?`.
    pub fn to_a1_string(&self) -> String {
        let letter = Self::column_letter(self.col).unwrap_or('?');
        format!("{}{}", letter, self.row as u64 + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A range of cells (e.g., "A1:B10")
///
/// The bounds are kept exactly as written. A range whose start lies below or to the right
/// of its end is valid and simply contains no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address
    pub start: CellAddress,
    /// End address
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range without reordering the bounds
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Parse a range from exact `A1:B10` notation
    pub fn parse(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidRange(format!("missing ':' in '{}'", s)))?;

        let start = CellAddress::parse(start).map_err(|e| Error::InvalidRange(e.to_string()))?;
        let end = CellAddress::parse(end).map_err(|e| Error::InvalidRange(e.to_string()))?;

        Ok(Self::new(start, end))
    }

    /// True when the bounds are reversed on either axis
    pub fn is_empty(&self) -> bool {
        self.start.row > self.end.row || self.start.col > self.end.col
    }

    /// Number of coordinates enclosed, 0 when the bounds are reversed
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let rows = self.end.row as u64 - self.start.row as u64 + 1;
        let cols = self.end.col as u64 - self.start.col as u64 + 1;
        rows * cols
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
            exhausted: self.is_empty(),
        }
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range, rows outer and columns inner
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u16,
    exhausted: bool,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.current_col);

        // Move to next cell
        if self.current_col < self.range.end.col {
            self.current_col += 1;
        } else if self.current_row < self.range.end.row {
            self.current_row += 1;
            self.current_col = self.range.start.col;
        } else {
            self.exhausted = true;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }

        let width = (self.range.end.col - self.range.start.col) as u64 + 1;
        let rows_after = (self.range.end.row - self.current_row) as u64;
        let in_row = (self.range.end.col - self.current_col) as u64 + 1;
        let remaining = rows_after * width + in_row;

        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cell_address_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr.row, 0);
        assert_eq!(addr.col, 0);

        let addr = CellAddress::parse("B12").unwrap();
        assert_eq!(addr.row, 11);
        assert_eq!(addr.col, 1);

        let addr = CellAddress::parse("Z50").unwrap();
        assert_eq!(addr.row, 49);
        assert_eq!(addr.col, 25);

        // Leading zeros are still digits
        assert_eq!(CellAddress::parse("C007").unwrap(), CellAddress::new(6, 2));
    }

    #[test]
    fn test_cell_address_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err());
        assert!(CellAddress::parse("a1").is_err());
        assert!(CellAddress::parse("AA1").is_err());
        assert!(CellAddress::parse("$A$1").is_err());
        assert!(CellAddress::parse(" A1").is_err());
        assert!(CellAddress::parse("A1x").is_err());
        assert!(CellAddress::parse("A99999999999").is_err());
    }

    #[test]
    fn test_encode() {
        assert_eq!(CellAddress::encode(0, 0).unwrap(), "A1");
        assert_eq!(CellAddress::encode(11, 1).unwrap(), "B12");
        assert_eq!(CellAddress::encode(49, 25).unwrap(), "Z50");
        assert_eq!(
            CellAddress::encode(0, 26),
            Err(Error::ColumnOutOfBounds(26, 25))
        );
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A1");
        assert_eq!(CellAddress::new(99, 2).to_string(), "C100");
        assert_eq!(CellAddress::new(u32::MAX, 3).to_string(), "D4294967296");
    }

    #[test]
    fn test_cell_range_parse() {
        let range = CellRange::parse("A1:B2").unwrap();
        assert_eq!(range.start, CellAddress::new(0, 0));
        assert_eq!(range.end, CellAddress::new(1, 1));

        // Bounds are kept as written
        let range = CellRange::parse("B3:A1").unwrap();
        assert_eq!(range.start, CellAddress::new(2, 1));
        assert_eq!(range.end, CellAddress::new(0, 0));
        assert!(range.is_empty());

        assert!(CellRange::parse("A1").is_err());
        assert!(CellRange::parse("A1:").is_err());
    }

    #[test]
    fn test_cell_range_contains() {
        let range = CellRange::parse("B2:D4").unwrap();

        assert!(range.contains(&CellAddress::new(1, 1))); // B2
        assert!(range.contains(&CellAddress::new(3, 3))); // D4
        assert!(range.contains(&CellAddress::new(2, 2))); // C3

        assert!(!range.contains(&CellAddress::new(0, 0))); // A1
        assert!(!range.contains(&CellAddress::new(4, 1))); // B5
    }

    #[test]
    fn test_cell_range_area() {
        assert_eq!(CellRange::parse("A1:C2").unwrap().area(), 6);
        assert_eq!(CellRange::parse("B2:B2").unwrap().area(), 1);
        assert_eq!(CellRange::parse("C1:A3").unwrap().area(), 0);
        assert_eq!(
            CellRange::parse("A1:Z4294967295").unwrap().area(),
            26 * u32::MAX as u64
        );
    }

    #[test]
    fn test_cell_range_iterator() {
        let range = CellRange::parse("A1:B2").unwrap();
        let cells: Vec<_> = range.cells().collect();

        assert_eq!(
            cells,
            vec![
                CellAddress::new(0, 0), // A1
                CellAddress::new(0, 1), // B1
                CellAddress::new(1, 0), // A2
                CellAddress::new(1, 1), // B2
            ]
        );
    }

    #[test]
    fn test_cell_range_iterator_reversed() {
        assert_eq!(CellRange::parse("A3:A1").unwrap().cells().count(), 0);
        assert_eq!(CellRange::parse("C1:A3").unwrap().cells().count(), 0);
        assert_eq!(CellRange::parse("B2:B2").unwrap().cells().count(), 1);
    }

    #[test]
    fn test_cell_range_iterator_size_hint() {
        let mut iter = CellRange::parse("A1:C2").unwrap().cells();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        iter.next();
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.count(), 3);
    }

    proptest! {
        #[test]
        fn encode_then_parse_is_identity(row in 0u32..u32::MAX, col in 0u16..MAX_COLS) {
            let text = CellAddress::encode(row, col).unwrap();
            prop_assert_eq!(CellAddress::parse(&text).unwrap(), CellAddress::new(row, col));
        }
    }
}
