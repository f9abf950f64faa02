//! Structured error types for the congen toolkit.

use thiserror::Error;

/// Unified error type for all congen operations.
#[derive(Debug, Error)]
pub enum CongenError {
    /// I/O error (file not found, permission denied, corrupt gzip stream, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed decimal literal)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Division by an exact zero, e.g. an empty marginal in a contingency table
    #[error("division by zero: {0}")]
    DivisionByZero(String),
}

/// Convenience alias used throughout the congen crates.
pub type Result<T> = std::result::Result<T, CongenError>;
