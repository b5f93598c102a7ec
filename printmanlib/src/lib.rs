//! # printmanlib
//!
//! A columnar, fixed-width ASCII report formatter with line-printer style
//! pagination.
//!
//! ## Overview
//!
//! Given a title, a set of column specifications (name, type hint, width,
//! alignment) and a stream of data rows, the engine renders a bordered table
//! to any `io::Write` sink, automatically paginating into fixed-size pages
//! (72 lines by default) with repeated headers and footers as pages fill.
//! Every page ends in a form feed, so output can be sent straight to a line
//! printer.
//!
//! ## Features
//!
//! - **Fixed-width cells**: per-column width and left/right/center alignment;
//!   long values pass through untruncated
//! - **Transparent pagination**: a row and its optional separator line are
//!   never split across a page boundary
//! - **Any `Display` value**: rows accept anything with a textual form,
//!   rendered uniformly with no per-type special casing
//! - **Declarative reports**: a whole report can be described as serde data
//!   (`ReportDef`) and rendered in one call
//!
//! ## Example
//!
//! ```rust
//! use printmanlib::{Alignment, ColumnSpec, TableFormatter};
//!
//! let mut out = Vec::new();
//! let mut report = TableFormatter::with_writer("Inventory", "March", &mut out);
//! report.add_column(ColumnSpec::new("Item").width(12)).unwrap();
//! report.add_column(ColumnSpec::new("Qty").width(5).align(Alignment::Right)).unwrap();
//!
//! report.print_titles().unwrap();
//! report.print_headers().unwrap();
//! report.print_data(["bolts", "240"], false).unwrap();
//! report.print_data(["washers", "1800"], true).unwrap();
//! report.print_footers().unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.lines().next().unwrap().contains("INVENTORY"));
//! ```

pub mod error;
pub mod formatter;
pub mod layout;
pub mod report;

pub use error::PrintmanError;
pub use formatter::TableFormatter;
pub use layout::{Alignment, ColumnSpec, PageGeometry};
pub use report::{ReportDef, ReportRow};

/// Result type for printmanlib operations
pub type Result<T> = std::result::Result<T, PrintmanError>;
