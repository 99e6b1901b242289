//! Named codec decorator
//!
//! [`NamedKeyCodec`] pairs a codec with a display name used by schemas and
//! error messages. Every codec operation is forwarded to the inner codec
//! untouched; the name only shows up in `name()` and in trace events.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::codec::{KeyCodec, OrderedKeyCodec};
use crate::error::{DecodeError, Result};
use crate::key_kind::KeyKind;

/// A key codec labelled with an immutable name
#[derive(Debug, Clone)]
pub struct NamedKeyCodec<C> {
    inner: C,
    name: Arc<str>,
}

impl<C> NamedKeyCodec<C> {
    /// Wrap `inner` with `name`
    pub fn new(inner: C, name: impl Into<String>) -> Self {
        let name: Arc<str> = Arc::from(name.into());
        debug!(target: "strata::codec", name = %name, "Named key codec created");
        NamedKeyCodec { inner, name }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrapped codec
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap, discarding the name
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> fmt::Display for NamedKeyCodec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<T, C: KeyCodec<T>> KeyCodec<T> for NamedKeyCodec<C> {
    fn encode_json(&self, value: &T) -> Result<Vec<u8>> {
        trace!(target: "strata::codec", codec = %self.name, key_type = self.inner.key_type(), "encode_json");
        self.inner.encode_json(value)
    }

    fn decode_json(&self, bytes: &[u8]) -> std::result::Result<T, DecodeError> {
        trace!(target: "strata::codec", codec = %self.name, key_type = self.inner.key_type(), len = bytes.len(), "decode_json");
        self.inner.decode_json(bytes)
    }

    fn stringify(&self, value: &T) -> String {
        self.inner.stringify(value)
    }

    fn key_kind(&self) -> KeyKind {
        self.inner.key_kind()
    }

    fn key_type(&self) -> &'static str {
        self.inner.key_type()
    }
}

impl<T, C: OrderedKeyCodec<T>> OrderedKeyCodec<T> for NamedKeyCodec<C> {
    fn encode(&self, value: &T, buf: &mut Vec<u8>) {
        self.inner.encode(value, buf)
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<(usize, T), DecodeError> {
        self.inner.decode(bytes)
    }

    fn size(&self, value: &T) -> usize {
        self.inner.size(value)
    }

    fn encode_non_terminal(&self, value: &T, buf: &mut Vec<u8>) {
        self.inner.encode_non_terminal(value, buf)
    }

    fn decode_non_terminal(&self, bytes: &[u8]) -> std::result::Result<(usize, T), DecodeError> {
        self.inner.decode_non_terminal(bytes)
    }

    fn size_non_terminal(&self, value: &T) -> usize {
        self.inner.size_non_terminal(value)
    }
}
