//! Cell data and error tokens

use crate::style::CellFormat;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cell as held by the sheet
///
/// `display_value` is always what the grid shows. When `formula` starts with `=` it holds the
/// result of the last evaluation (possibly an [`ErrorToken`]); otherwise it equals `formula`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Cell {
    /// Rendered content
    pub display_value: String,
    /// Text exactly as entered
    pub formula: String,
    /// Presentation attributes, ignored by evaluation
    pub format: CellFormat,
}

impl Cell {
    /// Create a cell from a literal entry, so display value and formula agree
    pub fn literal<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        Self {
            display_value: text.clone(),
            formula: text,
            format: CellFormat::default(),
        }
    }

    /// Create a cell holding a formula and its computed display value
    pub fn computed<F: Into<String>, V: Into<String>>(formula: F, display_value: V) -> Self {
        Self {
            display_value: display_value.into(),
            formula: formula.into(),
            format: CellFormat::default(),
        }
    }

    /// Replace the format
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Check if the entered text is a formula
    pub fn is_formula(&self) -> bool {
        self.formula.starts_with('=')
    }

    /// The error token currently displayed, if any
    ///
    /// A literal whose text happens to equal a token is reported too; the two cases cannot
    /// be told apart.
    pub fn error_token(&self) -> Option<ErrorToken> {
        ErrorToken::from_str(&self.display_value)
    }
}

/// Sentinel values stored in place of a result when evaluation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorToken {
    /// #ERROR! - Any failure without a more specific token
    Error,
    /// #DIV/0! - AVERAGE over no numeric cells
    Div0,
}

impl ErrorToken {
    /// Get the display string for this token
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorToken::Error => "#ERROR!",
            ErrorToken::Div0 => "#DIV/0!",
        }
    }

    /// Parse a token string (exact match)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "#ERROR!" => Some(ErrorToken::Error),
            "#DIV/0!" => Some(ErrorToken::Div0),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
