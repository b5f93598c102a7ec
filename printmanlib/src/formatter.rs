//! The stateful report formatting engine.
//!
//! `TableFormatter` owns the layout state of one report: title, subtitle,
//! page geometry, the ordered column specs and the line cursor of the current
//! page. Callers register columns, then drive the title → header → data →
//! footer sequence; the engine closes and reopens pages on its own when a row
//! would not fit on the lines remaining.

use crate::error::PrintmanError;
use crate::layout::{Alignment, ColumnSpec, PageGeometry};
use crate::Result;
use std::fmt::Display;
use std::io::{self, Write};

/// Attribution printed at the bottom of every page, before the form feed.
const FOOTER_ATTRIBUTION: &str = "Printed using PrintMan by VAU SoftTech.";

/// Form feed, signalling a physical page break to a line printer.
const FORM_FEED: char = '\u{0c}';

/// Columnar fixed-width report formatter with line-printer pagination.
///
/// Generic over the output sink; every print operation writes whole
/// newline-terminated lines and advances the page cursor. One formatter per
/// logical report; the engine holds no locks and is not meant to be shared
/// across concurrent writers.
#[derive(Debug)]
pub struct TableFormatter<W: Write> {
    title: String,
    subtitle: String,
    geometry: PageGeometry,
    columns: Vec<ColumnSpec>,
    current_line_no: usize,
    writer: W,
}

impl TableFormatter<io::Stdout> {
    /// Create a formatter printing to stdout with the default 72x80 page.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::with_writer(title, subtitle, io::stdout())
    }
}

impl<W: Write> TableFormatter<W> {
    /// Create a formatter printing to `writer` with the default 72x80 page.
    pub fn with_writer(title: impl Into<String>, subtitle: impl Into<String>, writer: W) -> Self {
        Self::with_geometry(title, subtitle, PageGeometry::default(), writer)
    }

    /// Create a formatter with a custom page geometry.
    pub fn with_geometry(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        geometry: PageGeometry,
        writer: W,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            geometry,
            columns: Vec::new(),
            current_line_no: 0,
            writer,
        }
    }

    /// Lines already emitted on the current page.
    pub fn current_line_no(&self) -> usize {
        self.current_line_no
    }

    /// The registered column specs, in print order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// The page geometry this formatter paginates against.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Reset the column list to empty.
    pub fn clear_columns(&mut self) {
        self.columns.clear();
    }

    /// Append a column spec to the ordered list.
    ///
    /// Fails with a configuration error when the width is zero. Column names
    /// need not be unique.
    pub fn add_column(&mut self, spec: ColumnSpec) -> Result<()> {
        if spec.width == 0 {
            return Err(PrintmanError::InvalidWidth { name: spec.name });
        }
        self.columns.push(spec);
        Ok(())
    }

    /// Print the title and subtitle as two bordered lines.
    ///
    /// The title is trimmed, upper-cased and centered; the subtitle trimmed,
    /// lower-cased and centered. Sets the line cursor to exactly 2 (an
    /// absolute reset, not an increment: titles are always page 1's leading
    /// content). No pagination check is performed.
    pub fn print_titles(&mut self) -> Result<()> {
        let width = self.body_width();
        let title = Alignment::Center.pad(&self.title.trim().to_uppercase(), width);
        self.write_boxed(&title)?;
        let subtitle = Alignment::Center.pad(&self.subtitle.trim().to_lowercase(), width);
        self.write_boxed(&subtitle)?;
        self.current_line_no = 2;
        Ok(())
    }

    /// Print the column header block: border, column names, border.
    pub fn print_headers(&mut self) -> Result<()> {
        self.write_border()?;
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|c| c.align.pad(&c.name, c.width))
            .collect();
        let body = self.joined_row(&cells);
        self.write_boxed(&body)?;
        self.write_border()?;
        self.current_line_no += 3;
        Ok(())
    }

    /// Print the page footer: border line, then the attribution line ending
    /// in a form feed.
    pub fn print_footers(&mut self) -> Result<()> {
        self.write_border()?;
        writeln!(self.writer, "{FOOTER_ATTRIBUTION}{FORM_FEED}")?;
        self.current_line_no += 2;
        Ok(())
    }

    /// Print one data row, paginating first if it would not fit.
    ///
    /// `values` must supply exactly one value per registered column, in
    /// column order; each is rendered as its `Display` form and padded to its
    /// column's width and alignment. With `print_row_sep`, a dashed separator
    /// line is drawn beneath the row; the row and its separator are never
    /// split across a page boundary.
    pub fn print_data<I>(&mut self, values: I, print_row_sep: bool) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let rendered: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if rendered.len() != self.columns.len() {
            return Err(PrintmanError::ColumnMismatch {
                expected: self.columns.len(),
                actual: rendered.len(),
            });
        }

        let lines_required = if print_row_sep { 2 } else { 1 };
        let lines_available = self
            .geometry
            .total_lines
            .saturating_sub(self.current_line_no);
        if lines_available < lines_required {
            self.print_footers()?;
            self.current_line_no = 0;
            self.print_headers()?;
        }

        let cells: Vec<String> = rendered
            .iter()
            .zip(&self.columns)
            .map(|(value, c)| c.align.pad(value, c.width))
            .collect();
        let body = self.joined_row(&cells);
        self.write_boxed(&body)?;
        self.current_line_no += 1;

        if print_row_sep {
            let dashes: Vec<String> = self
                .columns
                .iter()
                .map(|c| self.geometry.row_sep.to_string().repeat(c.width))
                .collect();
            let joined = dashes.join(" + ");
            let body = fill_to(joined, self.body_width(), self.geometry.row_sep);
            self.write_boxed(&body)?;
            self.current_line_no += 1;
        }

        Ok(())
    }

    /// Printable width between the borders and their flanking spaces.
    fn body_width(&self) -> usize {
        self.geometry.total_columns.saturating_sub(4)
    }

    /// Join cells with the column separator and left-justify to the body width.
    fn joined_row(&self, cells: &[String]) -> String {
        let joined = cells.join(&format!(" {} ", self.geometry.col_sep));
        fill_to(joined, self.body_width(), ' ')
    }

    /// Write a full-width border line of the header separator glyph.
    fn write_border(&mut self) -> Result<()> {
        let fill = self
            .geometry
            .header_sep
            .to_string()
            .repeat(self.geometry.total_columns.saturating_sub(2));
        writeln!(
            self.writer,
            "{0}{1}{0}",
            self.geometry.col_sep, fill
        )?;
        Ok(())
    }

    /// Write `body` wrapped as `| <body> |` on its own line.
    fn write_boxed(&mut self, body: &str) -> Result<()> {
        writeln!(
            self.writer,
            "{0} {1} {0}",
            self.geometry.col_sep, body
        )?;
        Ok(())
    }
}

/// Left-justify `body` to `width` characters using `fill`, passing longer
/// strings through untouched.
fn fill_to(body: String, width: usize, fill: char) -> String {
    let len = body.chars().count();
    if len >= width {
        return body;
    }
    let mut line = body;
    line.extend(std::iter::repeat(fill).take(width - len));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column_formatter() -> TableFormatter<Vec<u8>> {
        let mut f = TableFormatter::with_writer("Stock Report", "March", Vec::new());
        f.add_column(ColumnSpec::new("Qty").width(5).align(Alignment::Right))
            .unwrap();
        f.add_column(ColumnSpec::new("Item").width(10)).unwrap();
        f
    }

    fn output_lines(f: &TableFormatter<Vec<u8>>) -> Vec<String> {
        String::from_utf8(f.writer.clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn border_line() -> String {
        format!("|{}|", "=".repeat(78))
    }

    #[test]
    fn test_titles_width_and_cursor() {
        let mut f = two_column_formatter();
        f.print_titles().unwrap();

        assert_eq!(f.current_line_no(), 2);
        let lines = output_lines(&f);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.chars().count(), 80);
            assert!(line.starts_with("| "));
            assert!(line.ends_with(" |"));
        }
        assert!(lines[0].contains("STOCK REPORT"));
        assert!(lines[1].contains("march"));
    }

    #[test]
    fn test_titles_reset_is_absolute() {
        let mut f = two_column_formatter();
        f.print_headers().unwrap();
        assert_eq!(f.current_line_no(), 3);
        f.print_titles().unwrap();
        assert_eq!(f.current_line_no(), 2);
    }

    #[test]
    fn test_header_block_layout() {
        let mut f = two_column_formatter();
        f.print_headers().unwrap();

        assert_eq!(f.current_line_no(), 3);
        let lines = output_lines(&f);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], border_line());
        assert_eq!(lines[2], border_line());

        let mut body = String::from("  Qty | Item      ");
        body.push_str(&" ".repeat(76 - body.len()));
        assert_eq!(lines[1], format!("| {} |", body));
    }

    #[test]
    fn test_exact_row_construction() {
        let mut f = two_column_formatter();
        f.print_data(["1", "abcd"], false).unwrap();

        let mut expected = String::from("| ");
        expected.push_str("    1");
        expected.push_str(" | ");
        expected.push_str("abcd      ");
        while expected.len() < 78 {
            expected.push(' ');
        }
        expected.push_str(" |");

        let lines = output_lines(&f);
        assert_eq!(lines, vec![expected]);
        assert_eq!(lines[0].chars().count(), 80);
        assert_eq!(f.current_line_no(), 1);
    }

    #[test]
    fn test_separator_row_uses_dash_fill() {
        let mut f = two_column_formatter();
        f.print_data(["1", "abcd"], true).unwrap();

        let mut expected = String::from("| ");
        expected.push_str("-----");
        expected.push_str(" + ");
        expected.push_str("----------");
        while expected.len() < 78 {
            expected.push('-');
        }
        expected.push_str(" |");

        let lines = output_lines(&f);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], expected);
        assert_eq!(f.current_line_no(), 2);
    }

    #[test]
    fn test_display_values_render_uniformly() {
        let mut f = two_column_formatter();
        f.print_data([12345, 67], false).unwrap();

        let lines = output_lines(&f);
        assert!(lines[0].starts_with("| 12345 | 67        "));
    }

    #[test]
    fn test_long_values_pass_through_untruncated() {
        let mut f = two_column_formatter();
        f.print_data(["1234567", "abcd"], false).unwrap();

        let lines = output_lines(&f);
        assert!(lines[0].contains("| 1234567 | abcd      "));
        // The over-wide cell eats into the trailing padding, so the line
        // still fills out to the page width.
        assert_eq!(lines[0].chars().count(), 80);
    }

    #[test]
    fn test_column_mismatch_emits_nothing() {
        let mut f = two_column_formatter();
        let err = f.print_data(["a", "b", "c"], false).unwrap_err();
        assert!(matches!(
            err,
            PrintmanError::ColumnMismatch {
                expected: 2,
                actual: 3
            }
        ));
        assert!(f.writer.is_empty());
        assert_eq!(f.current_line_no(), 0);
    }

    #[test]
    fn test_zero_width_column_rejected() {
        let mut f = two_column_formatter();
        let err = f.add_column(ColumnSpec::new("Bad").width(0)).unwrap_err();
        assert!(matches!(err, PrintmanError::InvalidWidth { name } if name == "Bad"));
        assert_eq!(f.columns().len(), 2);
    }

    #[test]
    fn test_footer_ends_with_form_feed() {
        let mut f = two_column_formatter();
        f.print_footers().unwrap();

        assert_eq!(f.current_line_no(), 2);
        let lines = output_lines(&f);
        assert_eq!(lines[0], border_line());
        assert_eq!(lines[1], "Printed using PrintMan by VAU SoftTech.\u{0c}");
    }

    #[test]
    fn test_pagination_triggers_on_35th_separated_row() {
        let mut f = two_column_formatter();
        f.print_headers().unwrap();
        assert_eq!(f.current_line_no(), 3);

        // 34 two-line rows fill the page to line 71; one line remains.
        for i in 0..34 {
            f.print_data([i.to_string(), "item".to_string()], true).unwrap();
        }
        assert_eq!(f.current_line_no(), 71);
        assert_eq!(output_lines(&f).len(), 71);

        // The 35th needs 2 lines: footer + fresh header run first, then the
        // row and its separator land on the new page.
        f.print_data(["34", "item"], true).unwrap();
        assert_eq!(f.current_line_no(), 5);

        let lines = output_lines(&f);
        assert_eq!(lines.len(), 78);
        assert_eq!(lines[71], border_line());
        assert_eq!(lines[72], format!("{}\u{0c}", "Printed using PrintMan by VAU SoftTech."));
        assert_eq!(lines[73], border_line());
        assert!(lines[74].contains("Qty"));
        assert_eq!(lines[75], border_line());
        assert!(lines[76].contains("34"));
        assert!(lines[77].starts_with("| ---"));
    }

    #[test]
    fn test_single_line_rows_fill_page_exactly() {
        let mut f = two_column_formatter();
        f.print_headers().unwrap();

        // 69 one-line rows land on lines 4..=72; the 70th opens page two.
        for i in 0..69 {
            f.print_data([i.to_string(), "x".to_string()], false).unwrap();
        }
        assert_eq!(f.current_line_no(), 72);

        f.print_data(["69", "x"], false).unwrap();
        assert_eq!(f.current_line_no(), 4);
    }

    #[test]
    fn test_clear_and_readd_reproduces_output() {
        let render = |f: &mut TableFormatter<Vec<u8>>| {
            f.print_headers().unwrap();
            f.print_data(["1", "abcd"], true).unwrap();
        };

        let mut first = two_column_formatter();
        render(&mut first);

        let mut second = two_column_formatter();
        second.clear_columns();
        second
            .add_column(ColumnSpec::new("Qty").width(5).align(Alignment::Right))
            .unwrap();
        second.add_column(ColumnSpec::new("Item").width(10)).unwrap();
        render(&mut second);

        assert_eq!(first.writer, second.writer);
    }

    #[test]
    fn test_custom_geometry_page_height() {
        let geometry = PageGeometry::new().with_total_lines(8);
        let mut f = TableFormatter::with_geometry("t", "s", geometry, Vec::new());
        f.add_column(ColumnSpec::new("A").width(3)).unwrap();

        f.print_headers().unwrap();
        for i in 0..5 {
            f.print_data([i], false).unwrap();
        }
        assert_eq!(f.current_line_no(), 8);

        // Page is full; the next row forces a footer + header cycle.
        f.print_data([5], false).unwrap();
        assert_eq!(f.current_line_no(), 4);
    }
}
