//! Error types for status output.

use thiserror::Error;

/// Errors that can occur while writing status lines.
#[derive(Debug, Error)]
pub enum StatusError {
    /// The underlying writer failed.
    #[error("failed to write status line: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for status operations.
pub type Result<T> = std::result::Result<T, StatusError>;
