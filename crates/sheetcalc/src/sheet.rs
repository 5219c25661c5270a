//! The cell store
//!
//! A [`Sheet`] accepts user input one cell at a time. Formulas are evaluated once, when they
//! are submitted, against the cells present at that moment. Later changes to referenced
//! cells are not propagated.
//!
//! # Example
//!
//! ```rust
//! use sheetcalc::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! sheet.submit("A1", "10").unwrap();
//! sheet.submit("A2", "32").unwrap();
//! sheet.submit("A3", "=SUM(A1:A2)").unwrap();
//!
//! assert_eq!(sheet.display_value("A3"), Some("42"));
//! ```

use crate::{
    evaluate, Cell, CellAddress, CellFormat, CellSnapshot, FormatPatch, Result, SheetOptions,
};
use tracing::debug;

/// A grid of cells with formula evaluation on submit
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    cells: CellSnapshot,
    options: SheetOptions,
}

impl Sheet {
    /// Create an empty sheet with the default 50 x 26 grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sheet with custom options
    pub fn with_options(options: SheetOptions) -> Self {
        Self {
            cells: CellSnapshot::new(),
            options,
        }
    }

    /// Create a sheet over existing cells
    ///
    /// Display values are taken as they are; nothing is re-evaluated.
    pub fn from_snapshot(cells: CellSnapshot, options: SheetOptions) -> Self {
        Self { cells, options }
    }

    /// Get the sheet options
    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    /// Enter text into a cell
    ///
    /// Text starting with `=` is evaluated; any other text is stored verbatim. The cell keeps
    /// its format, or gets the default format if it is new. Evaluation failures are not
    /// errors here: the cell displays the error token instead.
    pub fn submit(&mut self, address: &str, input: &str) -> Result<&Cell> {
        let addr = self.locate(address)?;
        self.submit_at(addr, input)
    }

    /// Enter text into a cell by coordinates
    pub fn submit_at(&mut self, addr: CellAddress, input: &str) -> Result<&Cell> {
        self.options.validate(addr)?;
        let key = addr.to_a1_string();

        let display_value = if input.starts_with('=') {
            evaluate(input, &self.cells)
        } else {
            input.to_string()
        };
        debug!(address = %key, input, display_value = %display_value, "cell submitted");

        let format = self.format_for(&key);
        let cell = Cell::computed(input, display_value).with_format(format);
        Ok(self.cells.set(key, cell))
    }

    /// Update some format attributes of a cell
    ///
    /// An empty cell is created with the default format first. Value and formula are not
    /// touched.
    pub fn set_format(&mut self, address: &str, patch: &FormatPatch) -> Result<&CellFormat> {
        let addr = self.locate(address)?;
        let default_format = &self.options.default_format;
        let cell = self
            .cells
            .get_or_insert_with(addr.to_a1_string(), || {
                Cell::default().with_format(default_format.clone())
            });
        cell.format.apply(patch);
        Ok(&cell.format)
    }

    /// Get a cell
    pub fn cell(&self, address: &str) -> Option<&Cell> {
        self.cells.get(address)
    }

    /// Get the displayed text of a cell
    pub fn display_value(&self, address: &str) -> Option<&str> {
        self.cells.get(address).map(|cell| cell.display_value.as_str())
    }

    /// All cells, as seen by the next evaluation
    pub fn snapshot(&self) -> &CellSnapshot {
        &self.cells
    }

    /// Consume the sheet, returning its cells
    pub fn into_snapshot(self) -> CellSnapshot {
        self.cells
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn locate(&self, address: &str) -> Result<CellAddress> {
        let addr = CellAddress::parse(address)?;
        self.options.validate(addr)?;
        Ok(addr)
    }

    fn format_for(&self, key: &str) -> CellFormat {
        self.cells
            .get(key)
            .map(|cell| cell.format.clone())
            .unwrap_or_else(|| self.options.default_format.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Error};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_submit_literal() {
        let mut sheet = Sheet::new();
        let cell = sheet.submit("B2", "hello").unwrap();
        assert_eq!(cell.display_value, "hello");
        assert_eq!(cell.formula, "hello");
        assert!(!cell.is_formula());
        assert_eq!(cell.format, CellFormat::default());
    }

    #[test]
    fn test_submit_formula() {
        let mut sheet = Sheet::new();
        sheet.submit("A1", "3").unwrap();
        sheet.submit("A2", "4").unwrap();
        let cell = sheet.submit("A3", "=A1*A2").unwrap();
        assert_eq!(cell.display_value, "12");
        assert_eq!(cell.formula, "=A1*A2");
    }

    #[test]
    fn test_submit_error_token() {
        let mut sheet = Sheet::new();
        let cell = sheet.submit("C1", "=AVERAGE(A1:A3)").unwrap();
        assert_eq!(cell.display_value, "#DIV/0!");
        assert_eq!(cell.error_token(), Some(crate::ErrorToken::Div0));
    }

    #[test]
    fn test_no_recalculation() {
        let mut sheet = Sheet::new();
        sheet.submit("A1", "1").unwrap();
        sheet.submit("B1", "=A1+1").unwrap();
        sheet.submit("A1", "100").unwrap();
        assert_eq!(sheet.display_value("B1"), Some("2"));
    }

    #[test]
    fn test_self_reference_reads_previous_value() {
        let mut sheet = Sheet::new();
        sheet.submit("A1", "5").unwrap();
        sheet.submit("A1", "=A1*2").unwrap();
        assert_eq!(sheet.display_value("A1"), Some("10"));
    }

    #[test]
    fn test_submit_keeps_format() {
        let mut sheet = Sheet::new();
        sheet
            .set_format(
                "A1",
                &FormatPatch {
                    bold: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        let cell = sheet.submit("A1", "x").unwrap();
        assert!(cell.format.bold);
    }

    #[test]
    fn test_set_format_creates_empty_cell() {
        let options = SheetOptions::default()
            .with_default_format(CellFormat::new().with_font_size(11));
        let mut sheet = Sheet::with_options(options);

        let format = sheet
            .set_format(
                "D4",
                &FormatPatch {
                    color: Some(Color::rgb(255, 0, 0)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(format.font_size, 11);
        assert_eq!(format.color.to_hex(), "#ff0000");

        let cell = sheet.cell("D4").unwrap();
        assert_eq!(cell.display_value, "");
        assert_eq!(cell.formula, "");
        // Empty display values count as zero in arithmetic
        sheet.submit("E4", "=D4+1").unwrap();
        assert_eq!(sheet.display_value("E4"), Some("1"));
    }

    #[test]
    fn test_invalid_addresses() {
        let mut sheet = Sheet::new();
        assert!(matches!(
            sheet.submit("a1", "1"),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            sheet.submit("AA1", "1"),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            sheet.submit("A51", "1"),
            Err(Error::RowOutOfBounds(50, 49))
        ));
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_custom_bounds() {
        let mut sheet = Sheet::with_options(SheetOptions::default().with_rows(5).with_cols(3));
        assert!(sheet.submit("C5", "ok").is_ok());
        assert!(matches!(
            sheet.submit("D1", "1"),
            Err(Error::ColumnOutOfBounds(3, 2))
        ));
        assert!(sheet.set_format("A6", &FormatPatch::default()).is_err());
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_from_snapshot() {
        let cells: CellSnapshot = [("A1", Cell::literal("7"))].into_iter().collect();
        let mut sheet = Sheet::from_snapshot(cells, SheetOptions::default());
        sheet.submit("A2", "=A1*6").unwrap();
        assert_eq!(sheet.display_value("A2"), Some("42"));
        assert_eq!(sheet.into_snapshot().len(), 2);
    }
}
