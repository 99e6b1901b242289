//! JSON helpers shared by the primitive codecs

use crate::error::DecodeError;
use serde_json::Value as JsonValue;

/// Name of the JSON type of `value`, for error messages
pub(crate) fn shape_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Parse `bytes` as a JSON boolean literal
///
/// The whole document is built before its shape is checked. Untrusted
/// input should go through `decode_json_with_limits`.
pub(crate) fn parse_bool(bytes: &[u8]) -> Result<bool, DecodeError> {
    match serde_json::from_slice::<JsonValue>(bytes)? {
        JsonValue::Bool(b) => Ok(b),
        other => Err(DecodeError::UnexpectedShape {
            expected: "boolean",
            found: shape_name(&other),
        }),
    }
}

/// Parse `bytes` as a JSON string and return its contents
///
/// Same cost model as [`parse_bool`].
pub(crate) fn parse_string(bytes: &[u8]) -> Result<String, DecodeError> {
    match serde_json::from_slice::<JsonValue>(bytes)? {
        JsonValue::String(s) => Ok(s),
        other => Err(DecodeError::UnexpectedShape {
            expected: "string",
            found: shape_name(&other),
        }),
    }
}
