//! Size limits for decode input
//!
//! JSON handed to `decode_json` usually arrives from an external API. These
//! limits let a caller bound the work done on such input before parsing.
//!
//! ## Contract
//!
//! The default limit matches the store's default maximum key size. Plain
//! `decode_json` applies no limit; only `decode_json_with_limits` does.

use crate::error::DecodeError;

/// Size limits applied to codec input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum JSON input length in bytes (default: 1024)
    pub max_json_input_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_json_input_bytes: 1024,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_json_input_bytes: 64,
        }
    }

    /// Validate JSON input length
    ///
    /// Returns `Ok(())` if the input fits, or `Err(DecodeError::InputTooLarge)`.
    pub fn check_json_input(&self, bytes: &[u8]) -> Result<(), DecodeError> {
        if bytes.len() > self.max_json_input_bytes {
            return Err(DecodeError::InputTooLarge {
                actual: bytes.len(),
                max: self.max_json_input_bytes,
            });
        }
        Ok(())
    }
}
