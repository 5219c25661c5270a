//! Sheet-level settings

use crate::error::{Error, Result};
use crate::style::CellFormat;
use crate::{CellAddress, DEFAULT_ROWS, MAX_COLS};

/// Grid bounds and defaults used by a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetOptions {
    /// Number of rows accepting input
    pub rows: u32,
    /// Number of columns accepting input (at most 26)
    pub cols: u16,
    /// Format given to cells that have none yet
    pub default_format: CellFormat,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: MAX_COLS,
            default_format: CellFormat::default(),
        }
    }
}

impl SheetOptions {
    /// Set the number of rows
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns, capped at 26
    pub fn with_cols(mut self, cols: u16) -> Self {
        self.cols = cols.min(MAX_COLS);
        self
    }

    /// Set the default format
    pub fn with_default_format(mut self, format: CellFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Check that an address lies inside the grid
    pub fn validate(&self, addr: CellAddress) -> Result<()> {
        if addr.row >= self.rows {
            return Err(Error::RowOutOfBounds(addr.row, self.rows.saturating_sub(1)));
        }
        if addr.col >= self.cols {
            return Err(Error::ColumnOutOfBounds(addr.col, self.cols.saturating_sub(1)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SheetOptions::default();
        assert_eq!(options.rows, 50);
        assert_eq!(options.cols, 26);
    }

    #[test]
    fn test_validate() {
        let options = SheetOptions::default().with_rows(10).with_cols(3);
        assert!(options.validate(CellAddress::new(9, 2)).is_ok());
        assert_eq!(
            options.validate(CellAddress::new(10, 0)),
            Err(Error::RowOutOfBounds(10, 9))
        );
        assert_eq!(
            options.validate(CellAddress::new(0, 3)),
            Err(Error::ColumnOutOfBounds(3, 2))
        );
    }

    #[test]
    fn test_cols_capped() {
        assert_eq!(SheetOptions::default().with_cols(40).cols, 26);
    }
}
