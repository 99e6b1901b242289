//! Key codec contract
//!
//! A key codec converts a typed scalar into the forms a collection needs:
//!
//! - a JSON form for external APIs (`encode_json` / `decode_json`)
//! - a canonical string form used as a lookup key (`stringify`)
//! - a fixed type tag (`key_type`)
//!
//! and, through [`OrderedKeyCodec`], a binary form whose byte order matches
//! the natural order of the value.
//!
//! ## Laws
//!
//! - Round trip: `decode_json(encode_json(v)) == v` for every `v`.
//! - Tag stability: `key_type()` never depends on a value.
//! - Ordered form: `a.cmp(b) == encode(a).cmp(encode(b))`.
//!
//! ## Ordering of `stringify`
//!
//! `stringify` is order-preserving for booleans only. Integer codecs emit
//! plain decimal text, and `"10" < "2"` as well as `"-5" < "-6"` under
//! byte comparison. Range scans over integer keys must use the ordered
//! binary form instead.

use crate::error::{DecodeError, Result};
use crate::key_kind::KeyKind;
use crate::limits::Limits;
use crate::named::NamedKeyCodec;

/// Conversion of a typed key to and from its JSON and string forms
///
/// Codecs are immutable and hold no state; the `Send + Sync` bound lets one
/// instance be shared by every reader of a collection.
pub trait KeyCodec<T>: Send + Sync {
    /// Encode a value as JSON bytes
    ///
    /// The built-in codecs never return `Err`.
    fn encode_json(&self, value: &T) -> Result<Vec<u8>>;

    /// Decode a value from JSON bytes
    ///
    /// Accepts anything `encode_json` produces, plus any JSON of the same
    /// shape (surrounding whitespace included). No size limit applies;
    /// use [`decode_json_with_limits`](Self::decode_json_with_limits) for
    /// untrusted input.
    fn decode_json(&self, bytes: &[u8]) -> std::result::Result<T, DecodeError>;

    /// Canonical string form of a value for use as a storage key
    fn stringify(&self, value: &T) -> String;

    /// Kind of key this codec encodes
    fn key_kind(&self) -> KeyKind;

    /// Type tag persisted in schema metadata
    fn key_type(&self) -> &'static str {
        self.key_kind().id()
    }

    /// Decode JSON after checking it against `limits`
    fn decode_json_with_limits(
        &self,
        bytes: &[u8],
        limits: &Limits,
    ) -> std::result::Result<T, DecodeError> {
        limits.check_json_input(bytes)?;
        self.decode_json(bytes)
    }
}

/// A key codec that can be labelled with a display name
pub trait NameableKeyCodec<T>: KeyCodec<T> + Sized {
    /// Wrap this codec with a name used in schemas and diagnostics
    ///
    /// The result encodes, decodes and stringifies exactly like `self`.
    fn with_name(self, name: impl Into<String>) -> NamedKeyCodec<Self> {
        NamedKeyCodec::new(self, name)
    }
}

/// Order-preserving binary encoding of a key
///
/// This is the physical key form for stores that scan ranges by byte
/// order. It does not replace `stringify`, whose format is kept stable for
/// data already keyed by it.
pub trait OrderedKeyCodec<T>: KeyCodec<T> {
    /// Append the binary encoding of `value` to `buf`
    fn encode(&self, value: &T, buf: &mut Vec<u8>);

    /// Decode one key from the front of `bytes`
    ///
    /// Returns the number of bytes consumed together with the value.
    fn decode(&self, bytes: &[u8]) -> std::result::Result<(usize, T), DecodeError>;

    /// Exact length of the binary encoding of `value`
    fn size(&self, value: &T) -> usize;

    /// Encoding used when the key is not the last part of a composite key
    fn encode_non_terminal(&self, value: &T, buf: &mut Vec<u8>) {
        self.encode(value, buf)
    }

    /// Counterpart of [`encode_non_terminal`](Self::encode_non_terminal)
    fn decode_non_terminal(&self, bytes: &[u8]) -> std::result::Result<(usize, T), DecodeError> {
        self.decode(bytes)
    }

    /// Length of the non-terminal encoding of `value`
    fn size_non_terminal(&self, value: &T) -> usize {
        self.size(value)
    }

    /// Binary encoding in a fresh buffer
    fn encode_to_vec(&self, value: &T) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.size(value));
        self.encode(value, &mut buf);
        buf
    }
}

/// Split a fixed-width field off the front of `bytes`
pub(crate) fn take_fixed<const N: usize>(
    bytes: &[u8],
    kind: KeyKind,
) -> std::result::Result<[u8; N], DecodeError> {
    match bytes.get(..N) {
        Some(head) => {
            let mut out = [0u8; N];
            out.copy_from_slice(head);
            Ok(out)
        }
        None => Err(DecodeError::BufferTooShort {
            kind,
            needed: N,
            actual: bytes.len(),
        }),
    }
}
