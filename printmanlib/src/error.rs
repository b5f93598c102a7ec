//! Error types for printmanlib

use thiserror::Error;

/// Errors that can occur while configuring or printing a report
#[derive(Error, Debug)]
pub enum PrintmanError {
    /// Column width is not a positive number of characters
    #[error("invalid width for column '{name}': width must be a positive integer")]
    InvalidWidth { name: String },

    /// Alignment marker not one of the three supported modes
    #[error("invalid alignment '{0}' (expected '<', '>', '^' or left/right/center)")]
    InvalidAlignment(String),

    /// Number of values handed to `print_data` differs from the registered columns
    #[error("column count mismatch: {expected} columns registered, {actual} values supplied")]
    ColumnMismatch { expected: usize, actual: usize },

    /// A row of a report definition failed to print
    #[error("row {index}: {source}")]
    Row {
        index: usize,
        source: Box<PrintmanError>,
    },

    /// IO error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
