use std::marker::PhantomData;

use zerocopy::byteorder;

use crate::{Error, OwnCompound, OwnList, OwnValue, Result, TagID, util::{ByteOrder, cold_path}};

/// Maximum nesting of lists and compounds accepted by the reader.
pub const MAX_DEPTH: usize = 512;

struct Reader<'a, O: ByteOrder> {
    data: &'a [u8],
    pos: usize,
    _marker: PhantomData<O>,
}

macro_rules! read_number {
    ($name:ident, $type:ident, $native:ty, $size:expr) => {
        #[inline]
        fn $name(&mut self) -> Result<$native> {
            Ok(byteorder::$type::<O>::from_bytes(self.take::<$size>()?).get())
        }
    };
}

impl<'a, O: ByteOrder> Reader<'a, O> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    fn slice(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            cold_path();
            return Err(Error::EndOfFile);
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.slice(N)?);
        Ok(buf)
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    #[inline]
    fn read_tag_id(&mut self) -> Result<TagID> {
        let tag = self.read_u8()?;
        TagID::from_u8(tag).ok_or_else(|| {
            cold_path();
            Error::InvalidTagType(tag)
        })
    }

    read_number!(read_u16, U16, u16, 2);
    read_number!(read_i16, I16, i16, 2);
    read_number!(read_i32, I32, i32, 4);
    read_number!(read_i64, I64, i64, 8);
    read_number!(read_f32, F32, f32, 4);
    read_number!(read_f64, F64, f64, 8);

    /// Reads an array/list length and checks that at least `len * element_size`
    /// bytes remain, so corrupt lengths never drive huge allocations.
    fn read_len(&mut self, element_size: usize) -> Result<usize> {
        let len = self.read_i32()?;
        if len < 0 {
            cold_path();
            return Err(Error::ListTooLong(len as u32 as usize));
        }
        let len = len as usize;
        if len.saturating_mul(element_size) > self.remaining() {
            cold_path();
            return Err(Error::EndOfFile);
        }
        Ok(len)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.slice(len)?;
        Ok(simd_cesu8::mutf8::decode_lossy(bytes).into_owned())
    }

    fn read_payload(&mut self, tag_id: TagID, depth: usize) -> Result<OwnValue> {
        if depth > MAX_DEPTH {
            cold_path();
            return Err(Error::DepthLimitExceeded(depth));
        }
        Ok(match tag_id {
            TagID::End => OwnValue::End,
            TagID::Byte => OwnValue::Byte(self.read_u8()? as i8),
            TagID::Short => OwnValue::Short(self.read_i16()?),
            TagID::Int => OwnValue::Int(self.read_i32()?),
            TagID::Long => OwnValue::Long(self.read_i64()?),
            TagID::Float => OwnValue::Float(self.read_f32()?),
            TagID::Double => OwnValue::Double(self.read_f64()?),
            TagID::ByteArray => {
                let len = self.read_len(1)?;
                OwnValue::ByteArray(self.slice(len)?.iter().map(|b| *b as i8).collect())
            }
            TagID::String => OwnValue::String(self.read_string()?),
            TagID::List => {
                let element = self.read_tag_id()?;
                let len = self.read_len(list_element_min_size(element))?;
                if element == TagID::End && len > 0 {
                    cold_path();
                    return Err(Error::InvalidTagType(TagID::End as u8));
                }
                let mut items = Vec::with_capacity(len);
                for _ in 0..len {
                    items.push(self.read_payload(element, depth + 1)?);
                }
                OwnValue::List(OwnList::from_raw(element, items))
            }
            TagID::Compound => {
                let mut compound = OwnCompound::new();
                loop {
                    let tag_id = self.read_tag_id()?;
                    if tag_id == TagID::End {
                        break;
                    }
                    let name = self.read_string()?;
                    let value = self.read_payload(tag_id, depth + 1)?;
                    compound.insert(name, value);
                }
                OwnValue::Compound(compound)
            }
            TagID::IntArray => {
                let len = self.read_len(4)?;
                let mut values = Vec::with_capacity(len);
                for _ in 0..len {
                    values.push(self.read_i32()?);
                }
                OwnValue::IntArray(values)
            }
            TagID::LongArray => {
                let len = self.read_len(8)?;
                let mut values = Vec::with_capacity(len);
                for _ in 0..len {
                    values.push(self.read_i64()?);
                }
                OwnValue::LongArray(values)
            }
        })
    }
}

const fn list_element_min_size(tag_id: TagID) -> usize {
    match tag_id {
        TagID::End => 0,
        TagID::Byte => 1,
        TagID::Short | TagID::String => 2,
        TagID::Int | TagID::Float => 4,
        TagID::Long | TagID::Double => 8,
        TagID::ByteArray | TagID::IntArray | TagID::LongArray | TagID::List => 4,
        TagID::Compound => 1,
    }
}

/// Reads a named root tag and returns its name and value.
///
/// A lone `End` byte is accepted as an empty document.
pub fn read_named<O: ByteOrder>(data: &[u8]) -> Result<(String, OwnValue)> {
    let mut reader = Reader::<O>::new(data);
    let tag_id = reader.read_tag_id()?;
    let (name, value) = if tag_id == TagID::End {
        (String::new(), OwnValue::End)
    } else {
        let name = reader.read_string()?;
        (name, reader.read_payload(tag_id, 0)?)
    };
    if reader.remaining() != 0 {
        cold_path();
        return Err(Error::TrailingData(reader.remaining()));
    }
    Ok((name, value))
}

/// Reads a named root tag, discarding its name.
///
/// # Example
///
/// ```
/// use na_item::{BigEndian, OwnValue, read_value};
///
/// // Int named "" with value 7
/// let data = [0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07];
/// assert_eq!(read_value::<BigEndian>(&data).unwrap(), OwnValue::Int(7));
/// ```
#[inline]
pub fn read_value<O: ByteOrder>(data: &[u8]) -> Result<OwnValue> {
    read_named::<O>(data).map(|(_, value)| value)
}
