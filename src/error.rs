//! Error types for the boxcox-prep library.

use thiserror::Error;

/// Result type alias for boxcox-prep operations.
pub type Result<T> = std::result::Result<T, PrepError>;

/// Errors that can occur while loading, filtering, or transforming data.
#[derive(Error, Debug)]
pub enum PrepError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// A value is zero or negative; the Box-Cox transform is undefined.
    #[error("non-positive value {value} at index {index}: Box-Cox requires strictly positive data")]
    NonPositiveValue { index: usize, value: f64 },

    /// A value is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    /// No rows remain after date filtering and missing-value removal.
    #[error("no valid rows in the selected range")]
    EmptySelection,

    /// The requested sheet does not exist in the workbook.
    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    /// The requested column does not exist in the table.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// The selected value column contains non-numeric data.
    #[error("column is not numeric: {0}")]
    NotNumericColumn(String),

    /// Spreadsheet parsing failed.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    /// CSV serialization failed.
    #[error("csv error: {0}")]
    Csv(String),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for PrepError {
    fn from(err: calamine::Error) -> Self {
        PrepError::Spreadsheet(err.to_string())
    }
}

impl From<csv::Error> for PrepError {
    fn from(err: csv::Error) -> Self {
        PrepError::Csv(err.to_string())
    }
}
