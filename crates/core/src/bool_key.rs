//! Boolean key codec
//!
//! | Form     | false     | true     |
//! |----------|-----------|----------|
//! | JSON     | `false`   | `true`   |
//! | String   | `"false"` | `"true"` |
//! | Ordered  | `0x00`    | `0x01`   |
//!
//! `"false" < "true"` lexicographically, so `stringify` preserves order.

use std::fmt;
use std::marker::PhantomData;

use crate::codec::{take_fixed, KeyCodec, NameableKeyCodec, OrderedKeyCodec};
use crate::error::{DecodeError, Result};
use crate::json;
use crate::key_kind::KeyKind;
use crate::repr::BoolRepr;

/// Codec for keys represented as `bool`
pub struct BoolKey<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Create a codec for a `bool`-backed key type
pub fn bool_key<T: BoolRepr>() -> BoolKey<T> {
    BoolKey::new()
}

impl<T> BoolKey<T> {
    /// Create a new codec
    pub const fn new() -> Self {
        BoolKey {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for BoolKey<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BoolKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BoolKey<T> {}

impl<T> fmt::Debug for BoolKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoolKey")
    }
}

impl<T: BoolRepr> KeyCodec<T> for BoolKey<T> {
    fn encode_json(&self, value: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&value.to_bool())?)
    }

    fn decode_json(&self, bytes: &[u8]) -> std::result::Result<T, DecodeError> {
        json::parse_bool(bytes).map(T::from_bool)
    }

    fn stringify(&self, value: &T) -> String {
        value.to_bool().to_string()
    }

    fn key_kind(&self) -> KeyKind {
        KeyKind::Bool
    }
}

impl<T: BoolRepr> NameableKeyCodec<T> for BoolKey<T> {}

impl<T: BoolRepr> OrderedKeyCodec<T> for BoolKey<T> {
    fn encode(&self, value: &T, buf: &mut Vec<u8>) {
        buf.push(u8::from(value.to_bool()));
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<(usize, T), DecodeError> {
        let [byte] = take_fixed::<1>(bytes, KeyKind::Bool)?;
        match byte {
            0x00 => Ok((1, T::from_bool(false))),
            0x01 => Ok((1, T::from_bool(true))),
            other => Err(DecodeError::InvalidBool(other)),
        }
    }

    fn size(&self, _value: &T) -> usize {
        KeyKind::Bool.fixed_width()
    }
}
