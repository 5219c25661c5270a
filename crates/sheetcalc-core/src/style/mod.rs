//! Cell formatting types
//!
//! Formatting is presentation only. Evaluation never reads it; the sheet carries it from one
//! version of a cell to the next.

mod color;

pub use color::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Presentation attributes of a cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CellFormat {
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Font size in pixels
    pub font_size: u16,
    /// Text color
    pub color: Color,
    /// Background color
    pub background_color: Color,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            font_size: 14,
            color: Color::BLACK,
            background_color: Color::WHITE,
        }
    }
}

impl CellFormat {
    /// Create a new default format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set font size
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set background color
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Overwrite the attributes present in `patch`
    pub fn apply(&mut self, patch: &FormatPatch) {
        if let Some(bold) = patch.bold {
            self.bold = bold;
        }
        if let Some(italic) = patch.italic {
            self.italic = italic;
        }
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(color) = patch.background_color {
            self.background_color = color;
        }
    }
}

/// A partial format update; `None` leaves the attribute unchanged
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FormatPatch {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub font_size: Option<u16>,
    pub color: Option<Color>,
    pub background_color: Option<Color>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let format = CellFormat::default();
        assert!(!format.bold);
        assert!(!format.italic);
        assert_eq!(format.font_size, 14);
        assert_eq!(format.color.to_hex(), "#000000");
        assert_eq!(format.background_color.to_hex(), "#ffffff");
    }

    #[test]
    fn test_apply_patch() {
        let mut format = CellFormat::new().with_italic(true);
        format.apply(&FormatPatch {
            bold: Some(true),
            background_color: Some(Color::rgb(255, 255, 0)),
            ..Default::default()
        });

        assert!(format.bold);
        assert!(format.italic);
        assert_eq!(format.font_size, 14);
        assert_eq!(format.background_color, Color::rgb(255, 255, 0));
    }
}
