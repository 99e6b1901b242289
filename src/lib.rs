//! Strata Codec - typed key codecs for Strata collections
//!
//! Collections pick one codec per key type when their schema is defined
//! and keep it for their lifetime. Each codec converts keys to:
//!
//! - JSON for external APIs
//! - a canonical string used as a lookup key
//! - an order-preserving binary form for range scans
//!
//! # Quick Start
//!
//! ```
//! use strata_codec::{bool_key, int32_key, KeyCodec, NameableKeyCodec, OrderedKeyCodec};
//!
//! let active = bool_key::<bool>().with_name("active");
//! assert_eq!(active.encode_json(&true).unwrap(), b"true");
//! assert_eq!(active.stringify(&true), "true");
//!
//! let shard = int32_key::<i32>();
//! assert!(shard.encode_to_vec(&-1) < shard.encode_to_vec(&1));
//! ```
//!
//! # Architecture
//!
//! All codec code lives in `strata-codec-core`; this crate re-exports it.

// Re-export the public API from strata-codec-core
pub use strata_codec_core::*;
