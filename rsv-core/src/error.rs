/// Error types for loading the coverage source table
use thiserror::Error;

/// Load-time failures. Any of these means the dashboard cannot start.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source file could not be opened or read
    #[error("Failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    /// The source file is not valid delimited text
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0:?}")]
    MissingColumn(&'static str),

    /// A non-empty `Week Ending` cell could not be read as a date
    #[error("Invalid date {value:?} in row {row}")]
    InvalidDate { row: u64, value: String },

    /// The source has no header row at all
    #[error("Source file is empty")]
    EmptySource,
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
