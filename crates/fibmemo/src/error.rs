//! Error types for fibmemo

use std::fmt;

/// Result type alias for fibmemo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for calculator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested index is outside the defined domain (index >= 1)
    InvalidIndex(i64),

    /// True value at this index does not fit in i64
    Overflow {
        /// First index whose value is not representable
        index: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIndex(index) => {
                write!(f, "Invalid index: {} (must be >= 1)", index)
            }
            Error::Overflow { index } => {
                write!(f, "Fibonacci value at index {} overflows i64", index)
            }
        }
    }
}

impl std::error::Error for Error {}
