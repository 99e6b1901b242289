//! Test utilities for codec conformance tests
//!
//! Semantic key types of the kind collections declare in their schemas.

pub use strata_codec::{
    bool_key, int32_key, int64_key, BoolRepr, DecodeError, Int32Repr, Int64Repr, KeyCodec,
    KeyKind, Limits, NameableKeyCodec, NamedKeyCodec, OrderedKeyCodec,
};

/// Block height key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Height(pub i64);

impl Int64Repr for Height {
    fn from_i64(v: i64) -> Self {
        Height(v)
    }

    fn to_i64(self) -> i64 {
        self.0
    }
}

/// Shard index key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShardIndex(pub i32);

impl Int32Repr for ShardIndex {
    fn from_i32(v: i32) -> Self {
        ShardIndex(v)
    }

    fn to_i32(self) -> i32 {
        self.0
    }
}

/// Tombstone marker key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deleted(pub bool);

impl BoolRepr for Deleted {
    fn from_bool(v: bool) -> Self {
        Deleted(v)
    }

    fn to_bool(self) -> bool {
        self.0
    }
}

/// Decode JSON bytes as a UTF-8 string for readable assertions
pub fn json_text(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).expect("codec produced non-UTF-8 JSON")
}
