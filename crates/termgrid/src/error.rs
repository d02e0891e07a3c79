//! Error types for table rendering.

use thiserror::Error;

/// Errors surfaced by the table renderer.
///
/// Everything except [`TableError::Io`] is a caller contract violation and is
/// reported before any line is produced.
#[derive(Debug, Error)]
pub enum TableError {
    /// The primary heading has no labels.
    #[error("heading must name at least one column")]
    EmptyHeading,

    /// The number of column attributes does not match the primary heading.
    #[error("expected {expected} column attributes, got {actual}")]
    AttributeCount { expected: usize, actual: usize },

    /// The secondary heading has a different number of labels than the primary one.
    #[error("secondary heading has {actual} labels, primary heading has {expected}")]
    HeadingLength { expected: usize, actual: usize },

    /// A data row does not have one cell per column.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An attribute string contains a flag that is not recognized.
    #[error("unknown flag '{flag}' in column attribute \"{attribute}\"")]
    UnknownAttribute { attribute: String, flag: char },

    /// An attribute string names more than one alignment.
    #[error("column attribute \"{attribute}\" names more than one alignment")]
    ConflictingAlignment { attribute: String },

    /// A table description could not be parsed.
    #[error("invalid table spec: {0}")]
    Spec(String),

    /// Writing the rendered table failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Spec(err.to_string())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Spec(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
