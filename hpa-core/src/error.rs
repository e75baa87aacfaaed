/// Error types for the hydropower analytics libraries
use thiserror::Error;

/// Main error type for hydropower analytics operations
#[derive(Error, Debug)]
pub enum HpaError {
    /// Reading or writing a file failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read or write CSV data
    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to build or save the spreadsheet workbook
    #[error("Failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// A normal distribution could not be built from its parameters
    #[error("Invalid distribution parameters (mean: {mean}, sd: {std_dev})")]
    Distribution { mean: f64, std_dev: f64 },

    /// Generator configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Least squares fit could not be solved
    #[error("Regression failed: {0}")]
    Regression(String),

    /// Monthly aggregation has no row for the requested month
    #[error("No monthly aggregate for month {0}")]
    MissingMonth(u32),

    /// Rendering a chart failed
    #[error("Failed to render chart: {0}")]
    Chart(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// Type alias for Results using HpaError
pub type Result<T> = std::result::Result<T, HpaError>;
