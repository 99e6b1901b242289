//! Error types for key codecs
//!
//! This module defines the error types returned by codec operations.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Taxonomy
//!
//! There is exactly one domain error category: [`DecodeError`]. Encoding and
//! stringification are total over the codec's value type. The crate-level
//! [`Error`] exists so that `encode_json` has a fallible signature that
//! future codecs (string or composite keys) can use.

use crate::key_kind::KeyKind;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for codec operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be decoded into the codec's value type
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Serialization error from the JSON layer
    ///
    /// Reserved for codecs whose values can fail to serialize. The bool and
    /// integer codecs never produce it.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Decode failures
///
/// Returned when bytes handed to a codec do not describe a value of its
/// type. Decoding is deterministic, so retrying identical input cannot
/// succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Input is valid JSON of the wrong type
    #[error("Unexpected JSON shape: expected {expected}, found {found}")]
    UnexpectedShape {
        /// JSON type the codec accepts
        expected: &'static str,
        /// JSON type that was found
        found: &'static str,
    },

    /// String payload is not a base-10 integer
    #[error("Invalid integer {input:?}: {reason}")]
    InvalidInteger {
        /// Text that failed to parse
        input: String,
        /// Parser message
        reason: String,
    },

    /// Integer does not fit in the codec's width
    #[error("Integer {input:?} out of range for {kind}")]
    OutOfRange {
        /// Text that failed to parse
        input: String,
        /// Target key kind
        kind: KeyKind,
    },

    /// Binary input shorter than the fixed width of the key kind
    #[error("Buffer too short for {kind}: need {needed} bytes, got {actual}")]
    BufferTooShort {
        /// Key kind being decoded
        kind: KeyKind,
        /// Bytes required
        needed: usize,
        /// Bytes available
        actual: usize,
    },

    /// Binary boolean byte other than 0x00 or 0x01
    #[error("Invalid bool byte: {0:#04x}")]
    InvalidBool(u8),

    /// JSON input larger than the configured limit
    #[error("Input too large: {actual} bytes exceeds maximum {max}")]
    InputTooLarge {
        /// Input length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl DecodeError {
    /// Stable reason code for callers that persist or report errors
    pub fn reason_code(&self) -> &'static str {
        match self {
            DecodeError::InvalidJson(_) => "invalid_json",
            DecodeError::UnexpectedShape { .. } => "unexpected_shape",
            DecodeError::InvalidInteger { .. } => "invalid_integer",
            DecodeError::OutOfRange { .. } => "out_of_range",
            DecodeError::BufferTooShort { .. } => "buffer_too_short",
            DecodeError::InvalidBool(_) => "invalid_bool",
            DecodeError::InputTooLarge { .. } => "input_too_large",
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::InvalidJson(e.to_string())
    }
}
