//! Encoding of an owned [`Tag`] tree into binary NBT.

use std::{io::Write, marker::PhantomData};

use zerocopy::{IntoBytes, byteorder};

use crate::{
    ByteArray, ByteOrder, Compound, Error, IntArray, List, LongArray, Result, Tag, TagID, Value,
    WriteConfig, cold_path,
};

struct Encoder<W: Write, O: ByteOrder> {
    writer: W,
    depth: usize,
    max_depth: usize,
    _marker: PhantomData<O>,
}

impl<W: Write, O: ByteOrder> Encoder<W, O> {
    fn new(writer: W, config: &WriteConfig) -> Self {
        Self {
            writer,
            depth: 0,
            max_depth: config.depth_limit(),
            _marker: PhantomData,
        }
    }

    /// Counts levels exactly like the decoder does.
    fn enter(&mut self) -> Result<()> {
        if self.depth > self.max_depth {
            cold_path();
            return Err(Error::DepthLimitExceeded(self.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(Error::IO)
    }

    #[inline]
    fn write_tag_id(&mut self, tag_id: TagID) -> Result<()> {
        self.write_bytes(&[tag_id as u8])
    }

    /// Array and list lengths are written as a signed 32-bit count.
    fn write_len(&mut self, len: usize) -> Result<()> {
        if len > i32::MAX as usize {
            cold_path();
            return Err(Error::LengthTooLong(len));
        }
        self.write_bytes(&byteorder::I32::<O>::new(len as i32).to_bytes())
    }

    fn write_string(&mut self, value: &str) -> Result<()> {
        let encoded = simd_cesu8::mutf8::encode(value);
        if encoded.len() > u16::MAX as usize {
            cold_path();
            return Err(Error::LengthTooLong(encoded.len()));
        }
        self.write_bytes(&byteorder::U16::<O>::new(encoded.len() as u16).to_bytes())?;
        self.write_bytes(&encoded)
    }

    fn write_byte_array(&mut self, array: &ByteArray) -> Result<()> {
        self.write_len(array.size())?;
        self.write_bytes(array.as_slice().as_bytes())
    }

    fn write_int_array(&mut self, array: &IntArray) -> Result<()> {
        self.write_len(array.size())?;
        let encoded: Vec<byteorder::I32<O>> = array.iter().map(byteorder::I32::new).collect();
        self.write_bytes(encoded.as_bytes())
    }

    fn write_long_array(&mut self, array: &LongArray) -> Result<()> {
        self.write_len(array.size())?;
        let encoded: Vec<byteorder::I64<O>> = array.iter().map(byteorder::I64::new).collect();
        self.write_bytes(encoded.as_bytes())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        self.write_tag_id(list.element())?;
        self.write_len(list.len())?;
        if list.element() == TagID::End {
            return Ok(());
        }
        self.enter()?;
        for value in list {
            self.write_payload(value)?;
        }
        self.leave();
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        self.enter()?;
        for (name, value) in compound {
            self.write_named(name, value)?;
        }
        self.leave();
        self.write_tag_id(TagID::End)
    }

    /// `End` only ever appears as a terminator, never as a named entry.
    fn write_named(&mut self, name: &str, value: &Value) -> Result<()> {
        let tag_id = value.tag_id();
        if tag_id == TagID::End {
            cold_path();
            return Err(Error::InvalidTagType(TagID::End as u8));
        }
        self.write_tag_id(tag_id)?;
        self.write_string(name)?;
        self.write_payload(value)
    }

    fn write_payload(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::End => Ok(()),
            Value::Byte(v) => self.write_bytes(&[*v as u8]),
            Value::Short(v) => self.write_bytes(&byteorder::I16::<O>::new(*v).to_bytes()),
            Value::Int(v) => self.write_bytes(&byteorder::I32::<O>::new(*v).to_bytes()),
            Value::Long(v) => self.write_bytes(&byteorder::I64::<O>::new(*v).to_bytes()),
            Value::Float(v) => self.write_bytes(&byteorder::F32::<O>::new(*v).to_bytes()),
            Value::Double(v) => self.write_bytes(&byteorder::F64::<O>::new(*v).to_bytes()),
            Value::ByteArray(v) => self.write_byte_array(v),
            Value::String(v) => self.write_string(v),
            Value::List(v) => self.write_list(v),
            Value::Compound(v) => self.write_compound(v),
            Value::IntArray(v) => self.write_int_array(v),
            Value::LongArray(v) => self.write_long_array(v),
        }
    }
}

/// Encodes a named root tag into a new buffer.
///
/// # Example
///
/// ```
/// use skyblock_nbt::{read, write, BigEndian, ByteArray, Compound, Tag};
///
/// let root = Tag::root("", Compound::new().with("data", ByteArray::from([1, 2, 3])));
/// let bytes = write::<BigEndian>(&root).unwrap();
/// assert_eq!(read::<BigEndian>(&bytes).unwrap(), root);
/// ```
pub fn write<O: ByteOrder>(tag: &Tag) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    write_to::<O>(tag, &mut buf)?;
    Ok(buf)
}

/// Encodes a named root tag into `writer` using the default [`WriteConfig`].
pub fn write_to<O: ByteOrder>(tag: &Tag, writer: impl Write) -> Result<()> {
    write_with::<O>(tag, writer, &WriteConfig::default())
}

/// Encodes a named root tag into `writer`.
///
/// Trees nested deeper than `config` allows fail with
/// [`Error::DepthLimitExceeded`]; bytes already written to `writer` are not
/// taken back.
pub fn write_with<O: ByteOrder>(tag: &Tag, writer: impl Write, config: &WriteConfig) -> Result<()> {
    tracing::trace!(root = tag.name(), kind = %tag.tag_id(), "encoding named NBT root");
    Encoder::<_, O>::new(writer, config).write_named(tag.name(), tag.value())
}

/// Encodes a root without a name, the counterpart of
/// [`read_unnamed`](crate::read_unnamed).
pub fn write_unnamed<O: ByteOrder>(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    write_unnamed_to::<O>(value, &mut buf)?;
    Ok(buf)
}

pub fn write_unnamed_to<O: ByteOrder>(value: &Value, writer: impl Write) -> Result<()> {
    tracing::trace!(kind = %value.tag_id(), "encoding unnamed NBT root");
    let tag_id = value.tag_id();
    if tag_id == TagID::End {
        cold_path();
        return Err(Error::InvalidTagType(TagID::End as u8));
    }
    let mut encoder = Encoder::<_, O>::new(writer, &WriteConfig::default());
    encoder.write_tag_id(tag_id)?;
    encoder.write_payload(value)
}

/// Big-endian (Java edition) shorthand for [`write`].
pub fn write_be(tag: &Tag) -> Result<Vec<u8>> {
    write::<zerocopy::BigEndian>(tag)
}

/// Little-endian (Bedrock edition) shorthand for [`write`].
pub fn write_le(tag: &Tag) -> Result<Vec<u8>> {
    write::<zerocopy::LittleEndian>(tag)
}
