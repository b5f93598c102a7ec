//! Declarative report definitions.
//!
//! A `ReportDef` describes a whole report (titles, page geometry, columns
//! and rows) as plain serde data, so reports can be loaded from JSON and
//! rendered in one call. Rendering drives the same `TableFormatter` engine a
//! caller would drive by hand.

use crate::error::PrintmanError;
use crate::formatter::TableFormatter;
use crate::layout::{ColumnSpec, PageGeometry};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One data row of a report definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Cell values, one per column, in column order
    pub cells: Vec<String>,
    /// Draw a dashed separator line beneath this row
    #[serde(default)]
    pub separator: bool,
}

/// A complete report: titles, page geometry, columns and data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDef {
    /// Report title, printed upper-cased on page 1
    pub title: String,
    /// Report subtitle, printed lower-cased beneath the title
    #[serde(default)]
    pub subtitle: String,
    /// Page geometry; defaults to the 72x80 line-printer page
    #[serde(default)]
    pub page: PageGeometry,
    /// Column specifications, in print order
    pub columns: Vec<ColumnSpec>,
    /// Data rows
    #[serde(default)]
    pub rows: Vec<ReportRow>,
}

impl ReportDef {
    /// Render the full report to `writer`: titles, headers, every row, and a
    /// closing footer, paginating as pages fill.
    ///
    /// A row whose cell count does not match the columns fails with the
    /// offending row index attached; nothing further is emitted.
    pub fn render<W: Write>(&self, writer: W) -> Result<()> {
        let mut formatter =
            TableFormatter::with_geometry(&self.title, &self.subtitle, self.page.clone(), writer);
        for column in &self.columns {
            formatter.add_column(column.clone())?;
        }

        formatter.print_titles()?;
        formatter.print_headers()?;
        for (index, row) in self.rows.iter().enumerate() {
            formatter
                .print_data(&row.cells, row.separator)
                .map_err(|source| PrintmanError::Row {
                    index,
                    source: Box::new(source),
                })?;
        }
        formatter.print_footers()
    }
}
