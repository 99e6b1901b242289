//! Property-based tests over semantic key types
//!
//! The core crate checks the laws for bare primitives; these run them
//! through newtypes, named codecs and composite schema keys.

use proptest::prelude::*;

use crate::test_utils::*;

proptest! {
    #[test]
    fn property_builtin_encode_json_never_fails(h in any::<i64>(), s in any::<i32>(), d in any::<bool>()) {
        prop_assert!(int64_key::<Height>().encode_json(&Height(h)).is_ok());
        prop_assert!(int32_key::<ShardIndex>().encode_json(&ShardIndex(s)).is_ok());
        prop_assert!(bool_key::<Deleted>().encode_json(&Deleted(d)).is_ok());
    }

    #[test]
    fn property_newtype_json_roundtrip_through_named(h in any::<i64>(), name in "[a-z]{1,12}") {
        let codec = int64_key::<Height>().with_name(name);
        let bytes = codec.encode_json(&Height(h)).unwrap();
        prop_assert_eq!(codec.decode_json(&bytes).unwrap(), Height(h));
        prop_assert_eq!(codec.stringify(&Height(h)), h.to_string());
    }

    #[test]
    fn property_int32_newtype_rejects_json_outside_range(v in any::<i64>()) {
        let bytes = int64_key::<i64>().encode_json(&v).unwrap();
        let decoded = int32_key::<ShardIndex>().decode_json(&bytes);
        match i32::try_from(v) {
            Ok(n) => {
                prop_assert_eq!(decoded, Ok(ShardIndex(n)));
            }
            Err(_) => {
                prop_assert!(matches!(decoded, Err(DecodeError::OutOfRange { .. })), "expected OutOfRange, got {:?}", decoded);
            }
        }
    }

    #[test]
    fn property_composite_keys_sort_like_tuples(
        a in (any::<i32>(), any::<i64>(), any::<bool>()),
        b in (any::<i32>(), any::<i64>(), any::<bool>()),
    ) {
        let shard = int32_key::<ShardIndex>();
        let height = int64_key::<Height>();
        let deleted = bool_key::<Deleted>();
        let encode = |(s, h, d): (i32, i64, bool)| {
            let mut buf = Vec::new();
            shard.encode_non_terminal(&ShardIndex(s), &mut buf);
            height.encode_non_terminal(&Height(h), &mut buf);
            deleted.encode(&Deleted(d), &mut buf);
            buf
        };
        prop_assert_eq!(a.cmp(&b), encode(a).cmp(&encode(b)));
    }
}
