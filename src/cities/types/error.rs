//! Custom error types for the citylist crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum CityError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file could not be opened.
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input contained no header row at all.
    #[error("Input is empty: expected a header row")]
    MissingHeader,

    /// A data row is structurally invalid or carries an unparseable population.
    #[error("Malformed row at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Fewer records were loaded than the ranking asked for.
    #[error("Insufficient data: requested top {requested} records, but only {available} available")]
    InsufficientData { requested: usize, available: usize },
}

/// A convenience `Result` type alias using the crate's `CityError` type.
pub type Result<T> = std::result::Result<T, CityError>;
