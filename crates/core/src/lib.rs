//! Key codecs for Strata collections
//!
//! This crate defines how typed scalar keys are converted for storage and
//! for external APIs:
//! - KeyCodec: JSON form, canonical string form, type tag
//! - NameableKeyCodec / NamedKeyCodec: codecs labelled for schemas
//! - OrderedKeyCodec: order-preserving binary form for range scans
//! - BoolKey, Int64Key, Int32Key: the primitive codecs
//! - KeyKind: closed set of type tags
//! - Repr traits: newtype support (BoolRepr, Int64Repr, Int32Repr)
//! - Error: DecodeError taxonomy
//! - Limits: decode input limits
//!
//! # Example
//!
//! ```
//! use strata_codec_core::{int64_key, KeyCodec, NameableKeyCodec};
//!
//! let codec = int64_key::<i64>().with_name("height");
//! assert_eq!(codec.encode_json(&-7).unwrap(), br#""-7""#);
//! assert_eq!(codec.decode_json(br#""-7""#).unwrap(), -7);
//! assert_eq!(codec.stringify(&-7), "-7");
//! assert_eq!(codec.key_type(), "int64");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod bool_key;
pub mod codec;
pub mod error;
pub mod int_key;
mod json;
pub mod key_kind;
pub mod limits;
pub mod named;
pub mod repr;

// Re-export commonly used types and traits
pub use bool_key::{bool_key, BoolKey};
pub use codec::{KeyCodec, NameableKeyCodec, OrderedKeyCodec};
pub use error::{DecodeError, Error, Result};
pub use int_key::{int32_key, int64_key, Int32Key, Int64Key};
pub use key_kind::KeyKind;
pub use limits::Limits;
pub use named::NamedKeyCodec;
pub use repr::{BoolRepr, Int32Repr, Int64Repr};
