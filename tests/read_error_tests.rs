use skyblock_nbt::{
    ByteArray, Compound, Error, List, ReadConfig, Tag, TagID, WriteConfig, compound, read,
    read_unnamed, read_with, write, write_with,
};
use zerocopy::byteorder::{BigEndian as BE, LittleEndian as LE};

// ==================== Helper Functions ====================

fn create_list_header(tag: u8, count: u32) -> Vec<u8> {
    let mut data = vec![0x09, 0x00, 0x00]; // Root list
    data.push(tag);
    data.extend_from_slice(&count.to_be_bytes());
    data
}

fn create_compound_start() -> Vec<u8> {
    vec![0x0A, 0x00, 0x00]
}

fn sample_save() -> Vec<u8> {
    let mut coords = List::default();
    coords.push(4i32).unwrap();
    coords.push(-9i32).unwrap();
    let root = Tag::root(
        "player",
        compound! {
            "island" => compound! { "home" => coords, "name" => "Palm" },
            "inventory" => ByteArray::from([1, 2, 3, 4]),
        },
    );
    write::<BE>(&root).unwrap()
}

/// A root compound with `levels` compounds nested below it.
fn nested_compounds(levels: usize) -> Tag {
    let mut value = Compound::new().with("leaf", 1i8);
    for _ in 0..levels {
        value = Compound::new().with("c", value);
    }
    Tag::root("", value)
}

// ==================== Truncation ====================

#[test]
fn test_empty_slice() {
    let data: Vec<u8> = vec![];
    let res = read::<BE>(&data);
    match res {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_root_header() {
    let data = vec![0x01, 0x00]; // Missing name length byte
    match read::<BE>(&data) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_list_header() {
    // 0x09 (List), 0x00, 0x00 (empty name)
    // Then need 1 byte (tag) + 4 bytes (count) = 5 bytes.
    let data = vec![0x09, 0x00, 0x00, 0x01, 0x00];
    match read::<BE>(&data) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_list_body_primitive() {
    // List of 2 bytes, but only provide 1
    let mut data = create_list_header(1, 2);
    data.push(0xFF);
    match read::<BE>(&data) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_list_body_complex() {
    // List of 1 compound, but provide truncated compound
    let mut data = create_list_header(10, 1);
    data.push(0x01); // Tag Byte inside compound
    match read::<BE>(&data) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_byte_array_length_exceeds_input() {
    let data = vec![0x07, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x01, 0x02];
    match read::<BE>(&data) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_every_truncation_fails() {
    let data = sample_save();
    assert!(read::<BE>(&data).is_ok());
    for len in 0..data.len() {
        match read::<BE>(&data[..len]) {
            Err(error) => assert!(error.is_malformed(), "{len}: {error}"),
            Ok(tag) => panic!("prefix of {len} bytes decoded to {tag:?}"),
        }
    }
}

#[test]
fn test_missing_compound_end() {
    let mut data = create_compound_start();
    data.extend_from_slice(&[0x01, 0x00, 0x01, b'a', 0x05]); // complete Byte entry
    match read::<BE>(&data) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

// ==================== Type ids ====================

#[test]
fn test_invalid_tag_in_compound() {
    let mut data = create_compound_start();
    data.push(0xFF); // Invalid tag ID
    data.extend_from_slice(&0u16.to_be_bytes()); // empty name
    match read::<BE>(&data) {
        Err(Error::InvalidTagType(0xFF)) => {}
        other => panic!("Expected InvalidTagType, got {other:?}"),
    }
}

#[test]
fn test_invalid_root_tag() {
    match read::<BE>(&[13, 0, 0]) {
        Err(Error::InvalidTagType(13)) => {}
        other => panic!("Expected InvalidTagType, got {other:?}"),
    }
}

#[test]
fn test_end_root_is_rejected() {
    match read::<BE>(&[0]) {
        Err(Error::InvalidTagType(0)) => {}
        other => panic!("Expected InvalidTagType, got {other:?}"),
    }
    assert!(read_unnamed::<LE>(&[0]).is_err());
}

#[test]
fn test_invalid_list_element_type() {
    let data = create_list_header(0x20, 0);
    match read::<BE>(&data) {
        Err(Error::InvalidTagType(0x20)) => {}
        other => panic!("Expected InvalidTagType, got {other:?}"),
    }
}

#[test]
fn test_end_list_with_elements() {
    let mut data = create_list_header(0, 2);
    data.extend_from_slice(&[0, 0]);
    match read::<BE>(&data) {
        Err(Error::InvalidTagType(0)) => {}
        other => panic!("Expected InvalidTagType, got {other:?}"),
    }
}

#[test]
fn test_end_list_without_elements() {
    let data = create_list_header(0, 0);
    let tag = read::<BE>(&data).unwrap();
    let list = tag.value().as_list().unwrap();
    assert_eq!(list.element(), TagID::End);
    assert!(list.is_empty());
}

// ==================== Lengths ====================

#[test]
fn test_negative_list_length() {
    let data = create_list_header(3, 0xFFFF_FFFF);
    match read::<BE>(&data) {
        Err(Error::NegativeLength(-1)) => {}
        other => panic!("Expected NegativeLength, got {other:?}"),
    }
}

#[test]
fn test_negative_array_length() {
    let mut data = vec![0x0C, 0x00, 0x00];
    data.extend_from_slice(&i32::MIN.to_be_bytes());
    match read::<BE>(&data) {
        Err(Error::NegativeLength(i32::MIN)) => {}
        other => panic!("Expected NegativeLength, got {other:?}"),
    }
}

// ==================== Trailing data and config ====================

#[test]
fn test_trailing_data() {
    let mut data = sample_save();
    data.extend_from_slice(&[0xAA, 0xBB]);
    match read::<BE>(&data) {
        Err(Error::TrailingData(2)) => {}
        other => panic!("Expected TrailingData, got {other:?}"),
    }
    let lenient = ReadConfig::default().allow_trailing_data(true);
    assert!(read_with::<BE>(&data, &lenient).is_ok());
}

#[test]
fn test_deep_nesting_is_rejected() {
    // 600 nested lists of lists; the innermost is an empty list of bytes.
    let depth = 600;
    let mut data = vec![0x09, 0x00, 0x00];
    for _ in 0..depth {
        data.extend_from_slice(&[0x09, 0x00, 0x00, 0x00, 0x01]);
    }
    data.extend_from_slice(&[0x01, 0x00, 0x00, 0x00, 0x00]);
    match read::<BE>(&data) {
        Err(Error::DepthLimitExceeded(512)) => {}
        other => panic!("Expected DepthLimitExceeded, got {other:?}"),
    }
    let deep = ReadConfig::default().max_depth(1000);
    assert!(read_with::<BE>(&data, &deep).is_ok());
}

#[test]
fn test_max_depth_counts_levels_below_root() {
    let data = write::<BE>(&nested_compounds(1)).unwrap();
    let one = ReadConfig::default().max_depth(1);
    assert!(read_with::<BE>(&data, &one).is_ok());
    let none = ReadConfig::default().max_depth(0);
    match read_with::<BE>(&data, &none) {
        Err(Error::DepthLimitExceeded(0)) => {}
        other => panic!("Expected DepthLimitExceeded, got {other:?}"),
    }
    let flat = write::<BE>(&nested_compounds(0)).unwrap();
    assert!(read_with::<BE>(&flat, &none).is_ok());
}

#[test]
fn test_default_depth_boundary_round_trips() {
    let limit = ReadConfig::DEFAULT_MAX_DEPTH;
    let deepest = nested_compounds(limit);
    let data = write::<BE>(&deepest).unwrap();
    assert_eq!(read::<BE>(&data).unwrap(), deepest);

    match read_with::<BE>(&data, &ReadConfig::default().max_depth(limit - 1)) {
        Err(Error::DepthLimitExceeded(depth)) => assert_eq!(depth, limit - 1),
        other => panic!("Expected DepthLimitExceeded, got {other:?}"),
    }
}

#[test]
fn test_write_rejects_trees_too_deep_to_read() {
    let too_deep = nested_compounds(ReadConfig::DEFAULT_MAX_DEPTH + 1);
    match write::<BE>(&too_deep) {
        Err(Error::DepthLimitExceeded(512)) => {}
        other => panic!("Expected DepthLimitExceeded, got {other:?}"),
    }
    let deep = WriteConfig::default().max_depth(600);
    let mut data = Vec::new();
    write_with::<BE>(&too_deep, &mut data, &deep).unwrap();
    assert!(read_with::<BE>(&data, &ReadConfig::default().max_depth(600)).is_ok());
}

#[test]
fn test_wrong_byte_order_fails_cleanly() {
    let data = sample_save();
    match read::<LE>(&data) {
        Err(error) => assert!(error.is_malformed()),
        Ok(tag) => panic!("little endian read of big endian data succeeded: {tag:?}"),
    }
}

#[test]
fn test_errors_display() {
    assert_eq!(Error::EndOfFile.to_string(), "unexpected end of input");
    assert_eq!(
        Error::InvalidTagType(0x0d).to_string(),
        "invalid NBT tag type: 0x0d"
    );
    assert_eq!(
        Error::IndexOutOfRange { index: 4, len: 3 }.to_string(),
        "index 4 out of range for array of length 3"
    );
    assert!(!Error::IndexOutOfRange { index: 4, len: 3 }.is_malformed());
}
