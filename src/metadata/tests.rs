// test-only module included via metadata/mod.rs
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::config::{CodecConfig, LongLayout, MetadataConfig};
use crate::core::PrimitiveCodec;
use crate::error::CodecError;
use crate::metadata::*;

fn decode(buf: &[u8]) -> MetadataMap {
    MetadataDecoder::default().decode(buf).expect("decode should succeed")
}

#[test]
fn test_terminator_only() {
    assert!(decode(&[0x7F]).is_empty());
}

#[test]
fn test_byte_record() {
    let map = decode(&[0x00, 0x2A, 0x7F]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(0), Some(&MetadataValue::Byte(42)));
}

#[test]
fn test_negative_byte_record() {
    // type 0, key 3
    let map = decode(&[0x03, 0xFE, 0x7F]);
    assert_eq!(map.get(3), Some(&MetadataValue::Byte(-2)));
}

#[test]
fn test_short_record() {
    // type 1, key 1 -> 0x21
    let map = decode(&[0x21, 0x2C, 0x01, 0x7F]);
    assert_eq!(map.get_typed(1), Some((&MetadataValue::Short(300), TypeTag::Short)));
}

#[test]
fn test_short_is_unsigned() {
    let map = decode(&[0x21, 0xFF, 0xFF, 0x7F]);
    assert_eq!(map.get(1), Some(&MetadataValue::Short(0xFFFF)));
}

#[test]
fn test_int_record() {
    // type 2, key 2 -> 0x42
    let map = decode(&[0x42, 0xFE, 0xFF, 0xFF, 0xFF, 0x7F]);
    assert_eq!(map.get(2), Some(&MetadataValue::Int(-2)));
}

#[test]
fn test_float_record() {
    // type 3, key 4 -> 0x64
    let map = decode(&[0x64, 0x00, 0x00, 0x80, 0x3F, 0x7F]);
    assert_eq!(map.get(4), Some(&MetadataValue::Float(1.0)));
}

#[test]
fn test_string_record() {
    // type 4, key 5 -> 0x85
    let map = decode(&[0x85, 0x03, 0x00, b'B', b'o', b'b', 0x7F]);
    assert_eq!(map.get(5), Some(&MetadataValue::String(b"Bob".to_vec())));
    assert_eq!(map.get(5).and_then(MetadataValue::as_text).as_deref(), Some("Bob"));
}

#[test]
fn test_empty_string_record() {
    let map = decode(&[0x85, 0x00, 0x00, 0x7F]);
    assert_eq!(map.get(5), Some(&MetadataValue::String(Vec::new())));
}

#[test]
fn test_string_may_contain_terminator_byte() {
    let map = decode(&[0x80, 0x02, 0x00, 0x7F, 0x7F, 0x7F]);
    assert_eq!(map.get(0), Some(&MetadataValue::String(vec![0x7F, 0x7F])));
}

#[test]
fn test_slot_record() {
    // type 5, key 6 -> 0xA6; id 0x0113, count 64, damage 3
    let map = decode(&[0xA6, 0x13, 0x01, 0x40, 0x03, 0x00, 0x7F]);
    assert_eq!(
        map.get(6),
        Some(&MetadataValue::Slot(Slot {
            item_id: 0x0113,
            count: 64,
            damage: 3
        }))
    );
}

#[test]
fn test_vector3int_record() {
    // type 6, key 17 -> 0xD1
    let map = decode(&[
        0xD1, 0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x01, 0x00, 0x00, 0x7F,
    ]);
    assert_eq!(map.get(17), Some(&MetadataValue::Vector3Int([1, -1, 256])));
}

#[test]
fn test_multiple_records_in_key_order() {
    let buf = [
        0x10, 0x01, // key 16 byte 1
        0x21, 0x2C, 0x01, // key 1 short 300
        0x00, 0x00, // key 0 byte 0
        0x7F,
    ];
    let map = decode(&buf);
    let keys: Vec<u8> = map.records().map(|r| r.key).collect();
    assert_eq!(keys, vec![0, 1, 16]);
    let tags: Vec<TypeTag> = map.records().map(|r| r.type_tag).collect();
    assert_eq!(tags, vec![TypeTag::Byte, TypeTag::Short, TypeTag::Byte]);
}

#[test]
fn test_duplicate_key_last_wins() {
    let map = decode(&[0x01, 0x05, 0x21, 0x07, 0x00, 0x7F]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(1), Some(&MetadataValue::Short(7)));
}

#[test]
fn test_unrecognized_type_first_returns_empty() {
    // 0xE0 = type 7, key 0; a valid byte record follows
    let map = decode(&[0xE0, 0x00, 0x2A, 0x7F]);
    assert!(map.is_empty());
}

#[test]
fn test_unrecognized_type_discards_parsed_records() {
    let map = decode(&[0x00, 0x2A, 0x21, 0x01, 0x00, 0xFF, 0x00, 0x7F]);
    assert!(map.is_empty());
}

#[test]
fn test_unrecognized_type_stops_before_truncation() {
    // nothing after the type-7 tag still yields an empty map, not an error
    assert!(decode(&[0xE5]).is_empty());
}

#[test]
fn test_empty_buffer_is_truncated() {
    let err = MetadataDecoder::default().decode(&[]).unwrap_err();
    assert_eq!(err, CodecError::TruncatedStream { offset: 0 });
}

#[test]
fn test_missing_terminator_is_truncated() {
    let err = MetadataDecoder::default().decode(&[0x00, 0x2A]).unwrap_err();
    assert_eq!(err, CodecError::TruncatedStream { offset: 2 });
}

#[test]
fn test_short_payload_is_truncated() {
    let err = MetadataDecoder::default()
        .decode(&[0x00, 0x01, 0x42, 0x01, 0x02])
        .unwrap_err();
    assert_eq!(err, CodecError::TruncatedStream { offset: 3 });
}

#[test]
fn test_string_body_truncated() {
    let err = MetadataDecoder::default()
        .decode(&[0x80, 0x05, 0x00, b'a', b'b'])
        .unwrap_err();
    assert_eq!(err, CodecError::TruncatedStream { offset: 1 });
}

#[test]
fn test_trailing_bytes_after_terminator_ignored() {
    let (map, consumed) = MetadataDecoder::default()
        .decode_with_len(&[0x00, 0x01, 0x7F, 0xDE, 0xAD])
        .unwrap();
    assert_eq!(map.get(0), Some(&MetadataValue::Byte(1)));
    assert_eq!(consumed, 3);
}

#[test]
fn test_max_entries_enforced() {
    let decoder = MetadataDecoder::with_parts(
        PrimitiveCodec::new(),
        MetadataConfig {
            max_entries: Some(2),
            ..MetadataConfig::default()
        },
    );
    let buf = [0x00, 0x01, 0x01, 0x02, 0x02, 0x03, 0x7F];
    assert_eq!(decoder.decode(&buf), Err(CodecError::TooManyEntries(2)));
    assert_eq!(decoder.decode(&buf[2..]).map(|m| m.len()), Ok(2));
}

#[test]
fn test_no_cap_by_default() {
    assert_eq!(MetadataDecoder::default().config().max_entries, None);
    let mut buf = vec![0x00, 0x01].repeat(300);
    buf.push(0x7F);
    assert_eq!(MetadataDecoder::default().decode(&buf).map(|m| m.len()), Ok(1));
}

#[test]
fn test_long_tag_unreachable_from_wire() {
    // Every 3-bit type code maps to a tag other than Long
    for code in 0u8..8 {
        assert_ne!(TypeTag::from_code(code), Some(TypeTag::Long));
    }
    assert_eq!(TypeTag::from_code(8), Some(TypeTag::Long));
    assert_eq!(TypeTag::from_code(7), None);
    assert_eq!(TypeTag::Long.fixed_width(), Some(8));
}

#[test]
fn test_long_layouts() {
    use crate::core::BinaryReader;

    let payload = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    let full = MetadataDecoder::default();
    let legacy = MetadataDecoder::new(&CodecConfig::default_with_overrides(|c| {
        c.metadata.long_layout = LongLayout::Legacy;
    }));

    let mut r = BinaryReader::new(&payload);
    assert_eq!(
        full.read_value(&mut r, TypeTag::Long),
        Ok(MetadataValue::Long(0x0807_0605_0403_0201))
    );
    assert!(r.is_exhausted());

    let mut r = BinaryReader::new(&payload);
    assert_eq!(
        legacy.read_value(&mut r, TypeTag::Long),
        Ok(MetadataValue::Long(0x0403_0201_0000_0000))
    );
    assert!(r.is_exhausted());

    let mut r = BinaryReader::new(&payload[..4]);
    assert!(legacy.read_value(&mut r, TypeTag::Long).is_err());
}

#[test]
fn test_read_metadata_views() {
    let buf = [0x00, 0x2A, 0x7F];
    match read_metadata(&buf, false).unwrap() {
        MetadataView::Values(m) => assert_eq!(m.get(&0), Some(&MetadataValue::Byte(42))),
        other => panic!("Expected plain values, got {other:?}"),
    }
    match read_metadata(&buf, true).unwrap() {
        MetadataView::Typed(m) => {
            assert_eq!(m.get(&0), Some(&(MetadataValue::Byte(42), TypeTag::Byte)))
        }
        other => panic!("Expected typed values, got {other:?}"),
    }
    assert!(read_metadata(&[0x7F], true).unwrap().is_empty());
}

#[test]
fn test_encode_slot_and_vector_roundtrip() {
    let mut map = MetadataMap::new();
    let slot = MetadataValue::Slot(Slot {
        item_id: 276,
        count: 1,
        damage: 1561,
    });
    let pos = MetadataValue::Vector3Int([-128, 64, i32::MAX]);
    map.insert(10, slot.clone()).unwrap();
    map.insert(17, pos.clone()).unwrap();

    let bytes = MetadataEncoder.encode(&map).unwrap();
    assert_eq!(bytes.len(), 1 + 5 + 1 + 12 + 1);
    assert_eq!(bytes[0], 0xAA);
    assert_eq!(bytes[6], 0xD1);

    let decoded = decode(&bytes);
    assert_eq!(decoded.get(10), Some(&slot));
    assert_eq!(decoded.get(17), Some(&pos));
    assert_eq!(decoded, map);
}

#[test]
fn test_encode_every_wire_type() {
    let mut map = MetadataMap::new();
    map.insert(0, MetadataValue::Byte(-1)).unwrap();
    map.insert(1, MetadataValue::Short(300)).unwrap();
    map.insert(2, MetadataValue::Int(i32::MIN)).unwrap();
    map.insert(3, MetadataValue::Float(-0.75)).unwrap();
    map.insert(4, MetadataValue::String(b"\x00\xFFraw".to_vec())).unwrap();
    let bytes = MetadataEncoder.encode(&map).unwrap();
    assert_eq!(bytes.last(), Some(&0x7F));
    assert_eq!(decode(&bytes), map);
}

#[test]
fn test_encode_rejections() {
    let mut w = crate::core::BinaryWriter::new();
    let enc = MetadataEncoder;
    assert_eq!(
        enc.encode_record(32, &MetadataValue::Byte(0), &mut w),
        Err(CodecError::InvalidKey(32))
    );
    assert_eq!(
        enc.encode_record(0, &MetadataValue::Long(1), &mut w),
        Err(CodecError::UnencodableType(TypeTag::Long))
    );
    assert_eq!(
        enc.encode_record(31, &MetadataValue::Float(1.0), &mut w),
        Err(CodecError::ReservedTag(0x7F))
    );
    assert_eq!(
        enc.encode_record(0, &MetadataValue::String(vec![0; 70_000]), &mut w),
        Err(CodecError::StringTooLong(70_000))
    );
    assert!(w.is_empty());
}

#[test]
fn test_map_rejects_wide_keys() {
    let mut map = MetadataMap::new();
    assert_eq!(
        map.insert(40, MetadataValue::Byte(0)),
        Err(CodecError::InvalidKey(40))
    );
    assert_eq!(map.insert(31, MetadataValue::Byte(0)), Ok(None));
}
