//! Layout configuration for report printing.
//!
//! This module contains the types that describe how a report is laid out:
//! per-column specifications and the page geometry the formatter paginates
//! against.

use crate::error::PrintmanError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Horizontal alignment of a cell within its column.
///
/// Parsed from the printer-style markers `<`, `>`, `^` or the spelled-out
/// names; anything else is rejected rather than silently left-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Alignment {
    /// Value first, space padding after
    #[default]
    Left,
    /// Space padding first, value flush right
    Right,
    /// Value centered; odd padding puts the extra character on the right
    Center,
}

impl Alignment {
    /// Pad `value` with spaces to exactly `width` characters.
    ///
    /// Values longer than `width` pass through at natural length, never
    /// truncated.
    pub fn pad(self, value: &str, width: usize) -> String {
        match self {
            Alignment::Left => format!("{value:<width$}"),
            Alignment::Right => format!("{value:>width$}"),
            Alignment::Center => format!("{value:^width$}"),
        }
    }
}

impl FromStr for Alignment {
    type Err = PrintmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Alignment::Left),
            ">" => Ok(Alignment::Right),
            "^" => Ok(Alignment::Center),
            _ => match s.to_ascii_lowercase().as_str() {
                "left" => Ok(Alignment::Left),
                "right" => Ok(Alignment::Right),
                "center" => Ok(Alignment::Center),
                _ => Err(PrintmanError::InvalidAlignment(s.to_string())),
            },
        }
    }
}

impl TryFrom<String> for Alignment {
    type Error = PrintmanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Specification for a single report column.
///
/// Columns are registered in order; the i-th value of a data row is rendered
/// with the i-th spec. `type_hint` is a free-form tag carried for callers
/// (e.g. `"d"`, `"s"`) and is never enforced at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Display string for the header row
    pub name: String,
    /// Semantic tag for the column's data kind
    #[serde(default = "default_type_hint")]
    pub type_hint: String,
    /// Fixed print width of the cell content (excluding separators)
    #[serde(default = "default_width")]
    pub width: usize,
    /// Cell alignment within the column
    #[serde(default)]
    pub align: Alignment,
}

fn default_type_hint() -> String {
    "s".to_string()
}

fn default_width() -> usize {
    10
}

impl ColumnSpec {
    /// Create a column spec with the defaults: type hint `"s"`, width 10,
    /// left-aligned.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_hint: default_type_hint(),
            width: default_width(),
            align: Alignment::default(),
        }
    }

    /// Builder: set the type hint
    pub fn type_hint(mut self, hint: impl Into<String>) -> Self {
        self.type_hint = hint.into();
        self
    }

    /// Builder: set the print width
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Builder: set the alignment
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// Fixed page geometry the formatter paginates against.
///
/// Defaults describe the classic 72x80 line-printer page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    /// Page capacity in printable lines
    pub total_lines: usize,
    /// Full page width in characters, borders included
    pub total_columns: usize,
    /// Fill glyph for header and footer border lines
    pub header_sep: char,
    /// Fill glyph for row separator lines
    pub row_sep: char,
    /// Enclosing border and cell-join glyph
    pub col_sep: char,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            total_lines: 72,
            total_columns: 80,
            header_sep: '=',
            row_sep: '-',
            col_sep: '|',
        }
    }
}

impl PageGeometry {
    /// Create the default 72x80 geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the page height in lines
    pub fn with_total_lines(mut self, lines: usize) -> Self {
        self.total_lines = lines;
        self
    }

    /// Builder: set the page width in characters
    pub fn with_total_columns(mut self, columns: usize) -> Self {
        self.total_columns = columns;
        self
    }
}
