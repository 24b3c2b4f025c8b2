//! Error types for bitfield operations.
//!
//! This module provides a unified error type for every fallible operation in
//! the crate, using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for bitfield operations.
///
/// Both contract violations are reported at the point they occur; none of
/// the operations retry or partially recover.
#[derive(Error, Debug)]
pub enum BitFieldError {
    /// Construction was requested with a negative bit length
    #[error("Invalid length: {0} (length must be non-negative)")]
    InvalidLength(isize),

    /// Bit index outside the accepted range `0..=length`
    #[error("Index out of range: index {index}, length {length}")]
    IndexOutOfRange {
        /// The index that was accessed
        index: isize,
        /// The bit length of the bitfield
        length: usize,
    },

    /// I/O error while reading or writing the text form
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for bitfield operations.
///
/// This is a type alias for `Result<T, BitFieldError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, BitFieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BitFieldError::InvalidLength(-3);
        assert_eq!(
            err.to_string(),
            "Invalid length: -3 (length must be non-negative)"
        );

        let err = BitFieldError::IndexOutOfRange {
            index: 11,
            length: 10,
        };
        assert_eq!(err.to_string(), "Index out of range: index 11, length 10");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short input");
        let err: BitFieldError = io.into();
        assert!(matches!(err, BitFieldError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: short input");
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<usize> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
