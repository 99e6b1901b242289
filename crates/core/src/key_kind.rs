//! Key kind enumeration
//!
//! Every codec reports which scalar kind it encodes. The short identifier
//! of a kind is the type tag that collections persist in schema metadata.
//!
//! ## Supported Kinds
//!
//! | Kind  | Type tag | Ordered width |
//! |-------|----------|---------------|
//! | Bool  | `bool`   | 1 byte        |
//! | Int64 | `int64`  | 8 bytes       |
//! | Int32 | `int32`  | 4 bytes       |
//!
//! Type tags are stable. Renaming one is a breaking change for every
//! schema that recorded it.

use serde::{Deserialize, Serialize};

/// The scalar kinds a key codec can encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// Boolean keys
    Bool,

    /// 64-bit signed integer keys
    Int64,

    /// 32-bit signed integer keys
    Int32,
}

impl KeyKind {
    /// All key kinds (for iteration)
    pub const ALL: [KeyKind; 3] = [KeyKind::Bool, KeyKind::Int64, KeyKind::Int32];

    /// Get all key kinds as a slice
    pub fn all() -> &'static [KeyKind] {
        &Self::ALL
    }

    /// Type tag string
    pub const fn id(&self) -> &'static str {
        match self {
            KeyKind::Bool => "bool",
            KeyKind::Int64 => "int64",
            KeyKind::Int32 => "int32",
        }
    }

    /// Parse from type tag string
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "bool" => Some(KeyKind::Bool),
            "int64" => Some(KeyKind::Int64),
            "int32" => Some(KeyKind::Int32),
            _ => None,
        }
    }

    /// Width of the ordered binary encoding in bytes
    pub const fn fixed_width(&self) -> usize {
        match self {
            KeyKind::Bool => 1,
            KeyKind::Int64 => 8,
            KeyKind::Int32 => 4,
        }
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================================
// Tests
// ============================================================================
