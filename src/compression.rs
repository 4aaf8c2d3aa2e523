//! Compressed framing for save files.
//!
//! Player and level data on disk is normally gzip compressed; region chunks
//! use zlib. Both wrap the same binary encoding.
//!
//! ```
//! use skyblock_nbt::{read_compressed, write_compressed, BigEndian, Compound, Compression, Tag};
//!
//! let root = Tag::root("player", Compound::new().with("island", 4i32));
//! let mut file = Vec::new();
//! write_compressed::<BigEndian>(&root, &mut file, Compression::Gzip).unwrap();
//! assert_eq!(Compression::detect(&file), Compression::Gzip);
//! assert_eq!(read_compressed::<BigEndian>(file.as_slice(), Compression::Gzip).unwrap(), root);
//! ```

use std::io::{Read, Write};

use flate2::{
    read::{GzDecoder, ZlibDecoder},
    write::{GzEncoder, ZlibEncoder},
};

use crate::{ByteOrder, Result, Tag, read_from, write_to};

/// How the binary encoding is wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Compression {
    None,
    #[default]
    Gzip,
    Zlib,
}

impl Compression {
    /// Guesses the framing from the first bytes of a file.
    ///
    /// Gzip starts with `1f 8b`; zlib with a `78` header byte. Anything else
    /// is treated as uncompressed, which includes every valid uncompressed
    /// root since type ids stop at `0x0c`.
    pub fn detect(data: &[u8]) -> Self {
        match data {
            [0x1f, 0x8b, ..] => Compression::Gzip,
            [0x78, second, ..] if (0x78u16 << 8 | *second as u16) % 31 == 0 => Compression::Zlib,
            _ => Compression::None,
        }
    }
}

/// Reads one named root tag from a possibly compressed stream.
///
/// A corrupt compressed stream is reported as [`Error::IO`](crate::Error::IO).
pub fn read_compressed<O: ByteOrder>(reader: impl Read, compression: Compression) -> Result<Tag> {
    tracing::trace!(?compression, "reading compressed NBT");
    match compression {
        Compression::None => read_from::<O>(reader),
        Compression::Gzip => read_from::<O>(GzDecoder::new(reader)),
        Compression::Zlib => read_from::<O>(ZlibDecoder::new(reader)),
    }
}

/// Writes one named root tag, compressing it as requested.
pub fn write_compressed<O: ByteOrder>(
    tag: &Tag,
    writer: impl Write,
    compression: Compression,
) -> Result<()> {
    tracing::trace!(?compression, "writing compressed NBT");
    match compression {
        Compression::None => write_to::<O>(tag, writer),
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(writer, flate2::Compression::default());
            write_to::<O>(tag, &mut encoder)?;
            encoder.finish()?;
            Ok(())
        }
        Compression::Zlib => {
            let mut encoder = ZlibEncoder::new(writer, flate2::Compression::default());
            write_to::<O>(tag, &mut encoder)?;
            encoder.finish()?;
            Ok(())
        }
    }
}
