//! Decoding of binary NBT into an owned [`Tag`] tree.
//!
//! Every length read from the input is checked against the bytes that remain
//! before anything is allocated, so a corrupt or hostile length fails with
//! [`Error::EndOfFile`] instead of reserving memory for data that isn't there.

use std::{io::Read, marker::PhantomData};

use zerocopy::{FromBytes, byteorder};

use crate::{
    ByteArray, ByteOrder, Compound, Error, IntArray, List, LongArray, ReadConfig, Result, Tag,
    TagID, Value, cold_path,
};

/// Smallest number of bytes a payload of this kind can occupy.
const fn min_payload_size(tag_id: TagID) -> usize {
    match tag_id.fixed_size() {
        Some(size) => size,
        None => match tag_id {
            TagID::String => 2,
            TagID::List => 5,
            TagID::Compound => 1,
            _ => 4,
        },
    }
}

struct Decoder<'a, O: ByteOrder> {
    input: &'a [u8],
    depth: usize,
    max_depth: usize,
    _marker: PhantomData<O>,
}

impl<'a, O: ByteOrder> Decoder<'a, O> {
    fn new(input: &'a [u8], config: &ReadConfig) -> Self {
        Self {
            input,
            depth: 0,
            max_depth: config.depth_limit(),
            _marker: PhantomData,
        }
    }

    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        match self.input.split_at_checked(len) {
            Some((head, tail)) => {
                self.input = tail;
                Ok(head)
            }
            None => {
                cold_path();
                Err(Error::EndOfFile)
            }
        }
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        match self.input.split_first_chunk::<N>() {
            Some((head, tail)) => {
                self.input = tail;
                Ok(*head)
            }
            None => {
                cold_path();
                Err(Error::EndOfFile)
            }
        }
    }

    /// Takes `count` elements of `size` bytes each, failing before the
    /// multiplication can overflow or the input can run out.
    #[inline]
    fn take_elements(&mut self, count: usize, size: usize) -> Result<&'a [u8]> {
        match count.checked_mul(size) {
            Some(len) => self.take(len),
            None => {
                cold_path();
                Err(Error::EndOfFile)
            }
        }
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    #[inline]
    fn read_tag_id(&mut self) -> Result<TagID> {
        TagID::from_u8(self.read_u8()?)
    }

    #[inline]
    fn read_i16(&mut self) -> Result<i16> {
        Ok(byteorder::I16::<O>::from_bytes(self.take_array()?).get())
    }

    #[inline]
    fn read_i32(&mut self) -> Result<i32> {
        Ok(byteorder::I32::<O>::from_bytes(self.take_array()?).get())
    }

    #[inline]
    fn read_i64(&mut self) -> Result<i64> {
        Ok(byteorder::I64::<O>::from_bytes(self.take_array()?).get())
    }

    #[inline]
    fn read_f32(&mut self) -> Result<f32> {
        Ok(byteorder::F32::<O>::from_bytes(self.take_array()?).get())
    }

    #[inline]
    fn read_f64(&mut self) -> Result<f64> {
        Ok(byteorder::F64::<O>::from_bytes(self.take_array()?).get())
    }

    /// Array and list lengths are signed on the wire.
    #[inline]
    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32()?;
        usize::try_from(len).map_err(|_| {
            cold_path();
            Error::NegativeLength(len)
        })
    }

    fn read_string(&mut self) -> Result<String> {
        let len = byteorder::U16::<O>::from_bytes(self.take_array()?).get() as usize;
        let bytes = self.take(len)?;
        Ok(simd_cesu8::mutf8::decode_lossy(bytes).into_owned())
    }

    fn read_byte_array(&mut self) -> Result<ByteArray> {
        let len = self.read_len()?;
        Ok(ByteArray::from_unsigned(self.take(len)?))
    }

    fn read_int_array(&mut self) -> Result<IntArray> {
        let len = self.read_len()?;
        let bytes = self.take_elements(len, 4)?;
        let values =
            <[byteorder::I32<O>]>::ref_from_bytes(bytes).map_err(|_| Error::EndOfFile)?;
        Ok(values.iter().map(|v| v.get()).collect())
    }

    fn read_long_array(&mut self) -> Result<LongArray> {
        let len = self.read_len()?;
        let bytes = self.take_elements(len, 8)?;
        let values =
            <[byteorder::I64<O>]>::ref_from_bytes(bytes).map_err(|_| Error::EndOfFile)?;
        Ok(values.iter().map(|v| v.get()).collect())
    }

    /// The root container enters at level zero; each container inside it
    /// adds one level.
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

    fn read_list(&mut self) -> Result<List> {
        let element = self.read_tag_id()?;
        let len = self.read_len()?;

        if element == TagID::End {
            if len != 0 {
                cold_path();
                return Err(Error::InvalidTagType(TagID::End as u8));
            }
            return Ok(List::new(TagID::End));
        }

        // Every element needs at least this many bytes; reject early so the
        // capacity below is bounded by the input size.
        if len.saturating_mul(min_payload_size(element)) > self.input.len() {
            cold_path();
            return Err(Error::EndOfFile);
        }

        self.enter()?;
        let mut list = List::with_capacity(element, len);
        for _ in 0..len {
            let value = self.read_payload(element)?;
            list.push_unchecked(value);
        }
        self.leave();
        Ok(list)
    }

    fn read_compound(&mut self) -> Result<Compound> {
        self.enter()?;
        let mut compound = Compound::new();
        loop {
            let tag_id = self.read_tag_id()?;
            if tag_id == TagID::End {
                break;
            }
            let name = self.read_string()?;
            let value = self.read_payload(tag_id)?;
            compound.insert(name, value);
        }
        self.leave();
        Ok(compound)
    }

    fn read_payload(&mut self, tag_id: TagID) -> Result<Value> {
        Ok(match tag_id {
            TagID::End => Value::End,
            TagID::Byte => Value::Byte(self.read_u8()? as i8),
            TagID::Short => Value::Short(self.read_i16()?),
            TagID::Int => Value::Int(self.read_i32()?),
            TagID::Long => Value::Long(self.read_i64()?),
            TagID::Float => Value::Float(self.read_f32()?),
            TagID::Double => Value::Double(self.read_f64()?),
            TagID::ByteArray => Value::ByteArray(self.read_byte_array()?),
            TagID::String => Value::String(self.read_string()?),
            TagID::List => Value::List(self.read_list()?),
            TagID::Compound => Value::Compound(self.read_compound()?),
            TagID::IntArray => Value::IntArray(self.read_int_array()?),
            TagID::LongArray => Value::LongArray(self.read_long_array()?),
        })
    }

    fn read_root_id(&mut self) -> Result<TagID> {
        let tag_id = self.read_tag_id()?;
        if tag_id == TagID::End {
            cold_path();
            return Err(Error::InvalidTagType(TagID::End as u8));
        }
        Ok(tag_id)
    }

    fn finish(&self, config: &ReadConfig) -> Result<()> {
        if !self.input.is_empty() && !config.trailing_data_allowed() {
            cold_path();
            return Err(Error::TrailingData(self.input.len()));
        }
        Ok(())
    }
}

fn logged<T>(result: Result<T>, len: usize) -> Result<T> {
    if let Err(error) = &result {
        tracing::debug!(input_len = len, %error, "failed to decode NBT");
    }
    result
}

/// Reads one named root tag using the default [`ReadConfig`].
///
/// # Example
///
/// ```
/// use skyblock_nbt::{read, BigEndian};
///
/// // TAG_Byte_Array named "data" holding [1, 2, 3]
/// let bytes = [7, 0, 4, b'd', b'a', b't', b'a', 0, 0, 0, 3, 1, 2, 3];
/// let tag = read::<BigEndian>(&bytes).unwrap();
/// let data = tag.value().as_byte_array().unwrap();
/// assert_eq!(data.size(), 3);
/// assert_eq!(data.get(1).unwrap(), 2);
/// ```
pub fn read<O: ByteOrder>(data: &[u8]) -> Result<Tag> {
    read_with::<O>(data, &ReadConfig::default())
}

/// Reads one named root tag.
///
/// The whole tree is decoded before anything is returned; any failure leaves
/// no partial result.
pub fn read_with<O: ByteOrder>(data: &[u8], config: &ReadConfig) -> Result<Tag> {
    tracing::trace!(input_len = data.len(), "decoding named NBT root");
    let result = (|| -> Result<Tag> {
        let mut decoder = Decoder::<O>::new(data, config);
        let tag_id = decoder.read_root_id()?;
        let name = decoder.read_string()?;
        let value = decoder.read_payload(tag_id)?;
        decoder.finish(config)?;
        Ok(Tag::new(name, value))
    })();
    logged(result, data.len())
}

/// Reads a root without a name: the type id is followed directly by the
/// payload, as in network NBT.
pub fn read_unnamed<O: ByteOrder>(data: &[u8]) -> Result<Value> {
    read_unnamed_with::<O>(data, &ReadConfig::default())
}

pub fn read_unnamed_with<O: ByteOrder>(data: &[u8], config: &ReadConfig) -> Result<Value> {
    tracing::trace!(input_len = data.len(), "decoding unnamed NBT root");
    let result = (|| -> Result<Value> {
        let mut decoder = Decoder::<O>::new(data, config);
        let tag_id = decoder.read_root_id()?;
        let value = decoder.read_payload(tag_id)?;
        decoder.finish(config)?;
        Ok(value)
    })();
    logged(result, data.len())
}

/// Reads the whole of `reader` and decodes it as one named root tag.
pub fn read_from<O: ByteOrder>(mut reader: impl Read) -> Result<Tag> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    read::<O>(&data)
}

/// Big-endian (Java edition) shorthand for [`read`].
pub fn read_be(data: &[u8]) -> Result<Tag> {
    read::<zerocopy::BigEndian>(data)
}

/// Little-endian (Bedrock edition) shorthand for [`read`].
pub fn read_le(data: &[u8]) -> Result<Tag> {
    read::<zerocopy::LittleEndian>(data)
}
