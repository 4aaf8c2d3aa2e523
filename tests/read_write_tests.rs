//! Tests for reading and writing NBT data

use skyblock_nbt::{
    ByteArray, Compound, IntArray, List, LongArray, Tag, TagID, Value, compound, read, read_be,
    read_from, read_le, read_unnamed, write, write_be, write_le, write_to, write_unnamed,
};
use zerocopy::byteorder::{BigEndian, LittleEndian};

/// Helper to create a byte array NBT document (big endian)
fn create_byte_array_nbt_be(name: &str, data: &[i8]) -> Vec<u8> {
    let mut result = vec![0x07]; // Tag::ByteArray
    result.extend_from_slice(&(name.len() as u16).to_be_bytes());
    result.extend_from_slice(name.as_bytes());
    result.extend_from_slice(&(data.len() as u32).to_be_bytes());
    for &b in data {
        result.push(b as u8);
    }
    result
}

/// Helper to create a string NBT document (big endian)
fn create_string_nbt_be(s: &str) -> Vec<u8> {
    let len = s.len() as u16;
    let len_bytes = len.to_be_bytes();
    let mut result = vec![
        0x08, // Tag::String
        0x00,
        0x00, // empty name
        len_bytes[0],
        len_bytes[1],
    ];
    result.extend_from_slice(s.as_bytes());
    result
}

/// Helper to create an int array NBT document (little endian)
fn create_int_array_nbt_le(data: &[i32]) -> Vec<u8> {
    let len = data.len() as u32;
    let mut result = vec![0x0B, 0x00, 0x00];
    result.extend_from_slice(&len.to_le_bytes());
    for &val in data {
        result.extend_from_slice(&val.to_le_bytes());
    }
    result
}

/// A tree using every kind at least once, with nesting on both sides.
fn island_save() -> Tag {
    let mut members = List::new(TagID::Compound);
    members
        .push(compound! { "name" => "alice", "rank" => 2i8 })
        .unwrap();
    members
        .push(compound! { "name" => "bob", "rank" => 0i8 })
        .unwrap();

    let mut matrix = List::default();
    matrix.push(List::try_from(vec![Value::Short(1), Value::Short(-2)]).unwrap()).unwrap();
    matrix.push(List::new(TagID::Short)).unwrap();

    Tag::root(
        "island",
        compound! {
            "version" => 3i32,
            "created" => 1_700_000_000_000i64,
            "locked" => true,
            "border" => 0.75f32,
            "spawn_y" => 64.5f64,
            "radius" => 48i16,
            "owner" => "Dinnerbone",
            "greeting" => "Willkommen \u{2603} \u{1F30A}",
            "blocks" => ByteArray::from([0, 1, -1, 127, -128]),
            "heights" => IntArray::from([i32::MIN, 0, i32::MAX]),
            "seeds" => LongArray::from([i64::MIN, -1, i64::MAX]),
            "members" => members,
            "matrix" => matrix,
            "empty_list" => List::default(),
            "empty_ints" => List::new(TagID::Int),
            "empty" => Compound::new(),
            "nested" => compound! { "deeper" => compound! { "deepest" => ByteArray::default() } },
        },
    )
}

#[test]
fn test_round_trip_big_endian() {
    let root = island_save();
    let bytes = write::<BigEndian>(&root).unwrap();
    assert_eq!(read::<BigEndian>(&bytes).unwrap(), root);
}

#[test]
fn test_round_trip_little_endian() {
    let root = island_save();
    let bytes = write_le(&root).unwrap();
    assert_eq!(read_le(&bytes).unwrap(), root);
    assert_ne!(bytes, write_be(&root).unwrap());
}

#[test]
fn test_round_trip_preserves_compound_order() {
    let root = island_save();
    let decoded = read_be(&write_be(&root).unwrap()).unwrap();
    let original: Vec<_> = root.as_compound().unwrap().keys().collect();
    let recovered: Vec<_> = decoded.as_compound().unwrap().keys().collect();
    assert_eq!(original, recovered);
}

#[test]
fn test_encoding_is_stable() {
    let root = island_save();
    let first = write_be(&root).unwrap();
    let second = write_be(&read_be(&first).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_byte_array_in_compound() {
    let root = Tag::root("", compound! { "data" => ByteArray::from([1, 2, 3]) });
    let bytes = write_be(&root).unwrap();
    let decoded = read_be(&bytes).unwrap();
    let data = decoded
        .as_compound()
        .unwrap()
        .get_byte_array("data")
        .unwrap();
    assert_eq!(data.size(), 3);
    assert_eq!(data.get(1).unwrap(), 2);
}

#[test]
fn test_read_hand_built_byte_array() {
    let data = create_byte_array_nbt_be("data", &[1, -1, 3]);
    let tag = read::<BigEndian>(&data).unwrap();
    assert_eq!(tag.name(), "data");
    assert_eq!(tag.tag_id(), TagID::ByteArray);
    assert_eq!(
        tag.value().as_byte_array().unwrap().as_slice(),
        &[1, -1, 3]
    );
    assert_eq!(write::<BigEndian>(&tag).unwrap(), data);
}

#[test]
fn test_read_string() {
    let data = create_string_nbt_be("Hello, Skyblock!");
    let tag = read::<BigEndian>(&data).unwrap();
    assert_eq!(tag.value().as_str(), Some("Hello, Skyblock!"));
}

#[test]
fn test_modified_utf8_null_and_supplementary() {
    // Modified UTF-8 writes NUL as C0 80 and characters outside the BMP as
    // surrogate pairs.
    let root = Tag::new("", "a\0b\u{1F600}");
    let bytes = write_be(&root).unwrap();
    assert!(bytes.windows(2).any(|w| w == [0xC0, 0x80]));
    assert!(!bytes[5..].contains(&0x00));
    assert_eq!(read_be(&bytes).unwrap(), root);
}

#[test]
fn test_read_int_array_little_endian() {
    let data = create_int_array_nbt_le(&[1, -2, 300]);
    let tag = read::<LittleEndian>(&data).unwrap();
    assert_eq!(
        tag.value().as_int_array().unwrap().as_slice(),
        &[1, -2, 300]
    );
}

#[test]
fn test_unnamed_root() {
    let value = Value::Compound(compound! { "id" => "minecraft:stone", "count" => 1i8 });
    let bytes = write_unnamed::<BigEndian>(&value).unwrap();
    // Compound id, then straight into the first entry: a string named "id".
    assert_eq!(&bytes[..6], &[0x0A, 0x08, 0x00, 0x02, b'i', b'd']);
    assert_eq!(read_unnamed::<BigEndian>(&bytes).unwrap(), value);
}

#[test]
fn test_reader_and_writer() {
    let root = island_save();
    let mut buf = Vec::new();
    write_to::<BigEndian>(&root, &mut buf).unwrap();
    let decoded = read_from::<BigEndian>(buf.as_slice()).unwrap();
    assert_eq!(decoded, root);
}

#[test]
fn test_primitive_roots() {
    for value in [
        Value::Byte(-5),
        Value::Short(i16::MIN),
        Value::Int(i32::MAX),
        Value::Long(-1),
        Value::Float(f32::NAN),
        Value::Double(-0.0),
    ] {
        let root = Tag::new("x", value);
        assert_eq!(read_be(&write_be(&root).unwrap()).unwrap(), root);
    }
}

#[test]
fn test_list_of_lists_layout() {
    let mut outer = List::default();
    outer.push(List::new(TagID::Byte)).unwrap();
    let bytes = write_be(&Tag::new("", outer)).unwrap();
    assert_eq!(
        bytes,
        [
            0x09, 0x00, 0x00, // root list, empty name
            0x09, 0x00, 0x00, 0x00, 0x01, // one element of type list
            0x01, 0x00, 0x00, 0x00, 0x00, // empty list of bytes
        ]
    );
}
