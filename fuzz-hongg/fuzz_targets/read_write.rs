use honggfuzz::fuzz;
use skyblock_nbt::{BigEndian, ByteOrder, LittleEndian, read, read_unnamed, write, write_unnamed};

// Every decoded tree that encodes must decode back equal.
fn round_trip<O: ByteOrder>(data: &[u8]) {
    if let Ok(root) = read::<O>(data) {
        if let Ok(bytes) = write::<O>(&root) {
            assert_eq!(read::<O>(&bytes).unwrap(), root);
        }
        if let Ok(bytes) = write::<BigEndian>(&root) {
            assert_eq!(read::<BigEndian>(&bytes).unwrap(), root);
        }
    }
    if let Ok(value) = read_unnamed::<O>(data) {
        if let Ok(bytes) = write_unnamed::<O>(&value) {
            assert_eq!(read_unnamed::<O>(&bytes).unwrap(), value);
        }
    }
}

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            round_trip::<BigEndian>(data);
            round_trip::<LittleEndian>(data);
        });
    }
}
