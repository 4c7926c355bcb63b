//! Error types for the Oracle binary type codecs.

use std::panic::Location;
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for codec operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Value buffer does not have the fixed width of its type.
    #[error("Malformed {type_name} value: expected {expected} bytes, got {actual}")]
    MalformedInput {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Buffer too small.
    #[error("Buffer too small: need {needed} bytes, have {available} filed at {location}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },

    /// Unsupported Oracle data type.
    #[error("Unsupported Oracle data type: {type_num}")]
    UnsupportedType { type_num: u8 },

    /// Protocol error.
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// Type conversion error.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },
}

impl Error {
    /// Create a malformed input error for a fixed-width type.
    pub fn malformed(type_name: &'static str, expected: usize, actual: usize) -> Self {
        Self::MalformedInput {
            type_name,
            expected,
            actual,
        }
    }

    /// Create a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }
}
