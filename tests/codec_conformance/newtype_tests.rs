//! Codecs over semantic key types
//!
//! Collections key by newtypes; the codec must behave exactly as it does
//! for the underlying primitive.

use crate::test_utils::*;

#[test]
fn newtype_int64_matches_primitive() {
    let typed = int64_key::<Height>();
    let raw = int64_key::<i64>();
    for v in [i64::MIN, -7, 0, 42, i64::MAX] {
        assert_eq!(typed.encode_json(&Height(v)).unwrap(), raw.encode_json(&v).unwrap());
        assert_eq!(typed.stringify(&Height(v)), raw.stringify(&v));
        assert_eq!(typed.encode_to_vec(&Height(v)), raw.encode_to_vec(&v));
    }
    assert_eq!(typed.decode_json(br#""-7""#).unwrap(), Height(-7));
}

#[test]
fn newtype_int32_matches_primitive() {
    let typed = int32_key::<ShardIndex>();
    assert_eq!(typed.encode_json(&ShardIndex(3)).unwrap(), br#""3""#);
    assert_eq!(typed.decode_json(br#""3""#).unwrap(), ShardIndex(3));
    assert!(matches!(
        typed.decode_json(br#""2147483648""#),
        Err(DecodeError::OutOfRange { .. })
    ));
    assert_eq!(typed.key_type(), "int32");
}

#[test]
fn newtype_bool_matches_primitive() {
    let typed = bool_key::<Deleted>();
    assert_eq!(typed.encode_json(&Deleted(false)).unwrap(), b"false");
    assert_eq!(typed.decode_json(b"true").unwrap(), Deleted(true));
    assert_eq!(typed.stringify(&Deleted(true)), "true");
}

#[test]
fn newtype_ordered_form_follows_newtype_order() {
    let codec = int64_key::<Height>();
    let mut heights = vec![Height(10), Height(-3), Height(2), Height(0)];
    let mut encoded: Vec<Vec<u8>> = heights.iter().map(|h| codec.encode_to_vec(h)).collect();
    heights.sort();
    encoded.sort();
    let decoded: Vec<Height> = encoded.iter().map(|b| codec.decode(b).unwrap().1).collect();
    assert_eq!(decoded, heights);
}

/// A schema binds each key column to one codec at definition time
struct BlockIndexSchema {
    height: NamedKeyCodec<strata_codec::Int64Key<Height>>,
    shard: NamedKeyCodec<strata_codec::Int32Key<ShardIndex>>,
    deleted: NamedKeyCodec<strata_codec::BoolKey<Deleted>>,
}

impl BlockIndexSchema {
    fn new() -> Self {
        BlockIndexSchema {
            height: int64_key::<Height>().with_name("height"),
            shard: int32_key::<ShardIndex>().with_name("shard"),
            deleted: bool_key::<Deleted>().with_name("deleted"),
        }
    }

    fn describe(&self) -> Vec<(String, &'static str)> {
        vec![
            (self.height.name().to_string(), self.height.key_type()),
            (self.shard.name().to_string(), self.shard.key_type()),
            (self.deleted.name().to_string(), self.deleted.key_type()),
        ]
    }

    fn key(&self, shard: ShardIndex, height: Height, deleted: Deleted) -> Vec<u8> {
        let mut buf = Vec::new();
        self.shard.encode_non_terminal(&shard, &mut buf);
        self.height.encode_non_terminal(&height, &mut buf);
        self.deleted.encode(&deleted, &mut buf);
        buf
    }
}

#[test]
fn schema_reports_names_and_type_tags() {
    let schema = BlockIndexSchema::new();
    assert_eq!(
        schema.describe(),
        vec![
            ("height".to_string(), "int64"),
            ("shard".to_string(), "int32"),
            ("deleted".to_string(), "bool"),
        ]
    );
}

#[test]
fn schema_composite_keys_sort_by_components() {
    let schema = BlockIndexSchema::new();
    let a = schema.key(ShardIndex(-1), Height(500), Deleted(true));
    let b = schema.key(ShardIndex(0), Height(-500), Deleted(false));
    let c = schema.key(ShardIndex(0), Height(-500), Deleted(true));
    let d = schema.key(ShardIndex(0), Height(2), Deleted(false));
    assert!(a < b);
    assert!(b < c);
    assert!(c < d);

    let (n, shard) = schema.shard.decode_non_terminal(&d).unwrap();
    let (m, height) = schema.height.decode_non_terminal(&d[n..]).unwrap();
    let (_, deleted) = schema.deleted.decode(&d[n + m..]).unwrap();
    assert_eq!((shard, height, deleted), (ShardIndex(0), Height(2), Deleted(false)));
}
