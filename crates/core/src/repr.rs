//! Bridges between semantic key types and their primitive representation
//!
//! Collections rarely key by a bare `i64`; they key by `BlockHeight` or
//! `AccountNumber`. Implement the matching trait on such a newtype and the
//! primitive codec encodes it exactly like the underlying primitive.
//!
//! ```
//! use strata_codec_core::{int64_key, Int64Repr, KeyCodec};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! struct Height(i64);
//!
//! impl Int64Repr for Height {
//!     fn from_i64(v: i64) -> Self { Height(v) }
//!     fn to_i64(self) -> i64 { self.0 }
//! }
//!
//! let codec = int64_key::<Height>();
//! assert_eq!(codec.stringify(&Height(-7)), "-7");
//! ```

/// A type whose underlying representation is `bool`
pub trait BoolRepr: Copy {
    /// Wrap a primitive value
    fn from_bool(v: bool) -> Self;
    /// Unwrap to the primitive value
    fn to_bool(self) -> bool;
}

/// A type whose underlying representation is `i64`
pub trait Int64Repr: Copy {
    /// Wrap a primitive value
    fn from_i64(v: i64) -> Self;
    /// Unwrap to the primitive value
    fn to_i64(self) -> i64;
}

/// A type whose underlying representation is `i32`
pub trait Int32Repr: Copy {
    /// Wrap a primitive value
    fn from_i32(v: i32) -> Self;
    /// Unwrap to the primitive value
    fn to_i32(self) -> i32;
}

impl BoolRepr for bool {
    fn from_bool(v: bool) -> Self {
        v
    }

    fn to_bool(self) -> bool {
        self
    }
}

impl Int64Repr for i64 {
    fn from_i64(v: i64) -> Self {
        v
    }

    fn to_i64(self) -> i64 {
        self
    }
}

impl Int32Repr for i32 {
    fn from_i32(v: i32) -> Self {
        v
    }

    fn to_i32(self) -> i32 {
        self
    }
}
