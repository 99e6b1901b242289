//! Signed integer key codecs
//!
//! Both widths share one representation strategy:
//!
//! - JSON: base-10 text wrapped in a JSON string (`"-42"`), so consumers
//!   whose native number is a double do not lose precision.
//! - String: bare base-10 text, sign included, no padding.
//! - Ordered: sign bit flipped, big-endian, fixed width.
//!
//! ## Ordering caveat
//!
//! The string form is NOT order-preserving: `"10" < "2"` and
//! `"-1" < "-2"` under byte comparison. The format is kept as is because
//! existing data is keyed by it. Use [`OrderedKeyCodec`] for range scans.
//!
//! ## Integer Encoding
//!
//! XOR with the sign bit maps `MIN..=MAX` onto `0..=u::MAX` monotonically,
//! so big-endian bytes sort in numeric order.

use std::fmt;
use std::marker::PhantomData;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::codec::{take_fixed, KeyCodec, NameableKeyCodec, OrderedKeyCodec};
use crate::error::{DecodeError, Result};
use crate::json;
use crate::key_kind::KeyKind;
use crate::repr::{Int32Repr, Int64Repr};

/// Constant for flipping the sign bit of 64-bit integers.
const SIGN_FLIP_I64: u64 = 0x8000_0000_0000_0000;

/// Constant for flipping the sign bit of 32-bit integers.
const SIGN_FLIP_I32: u32 = 0x8000_0000;

/// Parse base-10 text, separating overflow from malformed input
fn parse_decimal<N>(text: String, kind: KeyKind) -> std::result::Result<N, DecodeError>
where
    N: FromStr<Err = ParseIntError>,
{
    match text.parse::<N>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(DecodeError::OutOfRange { input: text, kind })
            }
            _ => Err(DecodeError::InvalidInteger {
                input: text,
                reason: e.to_string(),
            }),
        },
    }
}

/// JSON string holding the decimal form of `n`
fn encode_quoted(n: impl ToString) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&n.to_string())?)
}

// ============================================================================
// Int64
// ============================================================================

/// Codec for keys represented as `i64`
pub struct Int64Key<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Create a codec for an `i64`-backed key type
pub fn int64_key<T: Int64Repr>() -> Int64Key<T> {
    Int64Key::new()
}

impl<T> Int64Key<T> {
    /// Create a new codec
    pub const fn new() -> Self {
        Int64Key {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Int64Key<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Int64Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Int64Key<T> {}

impl<T> fmt::Debug for Int64Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Int64Key")
    }
}

impl<T: Int64Repr> KeyCodec<T> for Int64Key<T> {
    fn encode_json(&self, value: &T) -> Result<Vec<u8>> {
        encode_quoted(value.to_i64())
    }

    fn decode_json(&self, bytes: &[u8]) -> std::result::Result<T, DecodeError> {
        let text = json::parse_string(bytes)?;
        parse_decimal::<i64>(text, KeyKind::Int64).map(T::from_i64)
    }

    fn stringify(&self, value: &T) -> String {
        value.to_i64().to_string()
    }

    fn key_kind(&self) -> KeyKind {
        KeyKind::Int64
    }
}

impl<T: Int64Repr> NameableKeyCodec<T> for Int64Key<T> {}

impl<T: Int64Repr> OrderedKeyCodec<T> for Int64Key<T> {
    fn encode(&self, value: &T, buf: &mut Vec<u8>) {
        let flipped = (value.to_i64() as u64) ^ SIGN_FLIP_I64;
        buf.extend_from_slice(&flipped.to_be_bytes());
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<(usize, T), DecodeError> {
        let raw = take_fixed::<8>(bytes, KeyKind::Int64)?;
        let n = (u64::from_be_bytes(raw) ^ SIGN_FLIP_I64) as i64;
        Ok((8, T::from_i64(n)))
    }

    fn size(&self, _value: &T) -> usize {
        KeyKind::Int64.fixed_width()
    }
}

// ============================================================================
// Int32
// ============================================================================

/// Codec for keys represented as `i32`
pub struct Int32Key<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Create a codec for an `i32`-backed key type
pub fn int32_key<T: Int32Repr>() -> Int32Key<T> {
    Int32Key::new()
}

impl<T> Int32Key<T> {
    /// Create a new codec
    pub const fn new() -> Self {
        Int32Key {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Int32Key<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Int32Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Int32Key<T> {}

impl<T> fmt::Debug for Int32Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Int32Key")
    }
}

impl<T: Int32Repr> KeyCodec<T> for Int32Key<T> {
    fn encode_json(&self, value: &T) -> Result<Vec<u8>> {
        encode_quoted(value.to_i32())
    }

    fn decode_json(&self, bytes: &[u8]) -> std::result::Result<T, DecodeError> {
        let text = json::parse_string(bytes)?;
        parse_decimal::<i32>(text, KeyKind::Int32).map(T::from_i32)
    }

    fn stringify(&self, value: &T) -> String {
        value.to_i32().to_string()
    }

    fn key_kind(&self) -> KeyKind {
        KeyKind::Int32
    }
}

impl<T: Int32Repr> NameableKeyCodec<T> for Int32Key<T> {}

impl<T: Int32Repr> OrderedKeyCodec<T> for Int32Key<T> {
    fn encode(&self, value: &T, buf: &mut Vec<u8>) {
        let flipped = (value.to_i32() as u32) ^ SIGN_FLIP_I32;
        buf.extend_from_slice(&flipped.to_be_bytes());
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<(usize, T), DecodeError> {
        let raw = take_fixed::<4>(bytes, KeyKind::Int32)?;
        let n = (u32::from_be_bytes(raw) ^ SIGN_FLIP_I32) as i32;
        Ok((4, T::from_i32(n)))
    }

    fn size(&self, _value: &T) -> usize {
        KeyKind::Int32.fixed_width()
    }
}
