use std::io::Write;

use zerocopy::byteorder;

use crate::{Error, OwnValue, Result, TagID, util::{ByteOrder, cold_path}};

struct Writer<O: ByteOrder> {
    buf: Vec<u8>,
    _marker: std::marker::PhantomData<O>,
}

macro_rules! write_number {
    ($name:ident, $type:ident, $native:ty) => {
        #[inline]
        fn $name(&mut self, value: $native) {
            self.buf
                .extend_from_slice(&byteorder::$type::<O>::new(value).to_bytes());
        }
    };
}

impl<O: ByteOrder> Writer<O> {
    fn new() -> Self {
        Self {
            buf: Vec::with_capacity(64),
            _marker: std::marker::PhantomData,
        }
    }

    write_number!(write_u16, U16, u16);
    write_number!(write_i16, I16, i16);
    write_number!(write_i32, I32, i32);
    write_number!(write_i64, I64, i64);
    write_number!(write_f32, F32, f32);
    write_number!(write_f64, F64, f64);

    fn write_len(&mut self, len: usize) -> Result<()> {
        if len > i32::MAX as usize {
            cold_path();
            return Err(Error::ListTooLong(len));
        }
        self.write_i32(len as i32);
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<()> {
        let encoded = simd_cesu8::mutf8::encode(value);
        if encoded.len() > u16::MAX as usize {
            cold_path();
            return Err(Error::StringTooLong(encoded.len()));
        }
        self.write_u16(encoded.len() as u16);
        self.buf.extend_from_slice(&encoded);
        Ok(())
    }

    fn write_payload(&mut self, value: &OwnValue) -> Result<()> {
        match value {
            OwnValue::End => {}
            OwnValue::Byte(value) => self.buf.push(*value as u8),
            OwnValue::Short(value) => self.write_i16(*value),
            OwnValue::Int(value) => self.write_i32(*value),
            OwnValue::Long(value) => self.write_i64(*value),
            OwnValue::Float(value) => self.write_f32(*value),
            OwnValue::Double(value) => self.write_f64(*value),
            OwnValue::ByteArray(values) => {
                self.write_len(values.len())?;
                self.buf.extend(values.iter().map(|b| *b as u8));
            }
            OwnValue::String(value) => self.write_string(value)?,
            OwnValue::List(list) => {
                self.buf.push(list.element_tag_id() as u8);
                self.write_len(list.len())?;
                for item in list {
                    self.write_payload(item)?;
                }
            }
            OwnValue::Compound(compound) => {
                for (name, item) in compound.iter() {
                    self.buf.push(item.tag_id() as u8);
                    self.write_string(name)?;
                    self.write_payload(item)?;
                }
                self.buf.push(TagID::End as u8);
            }
            OwnValue::IntArray(values) => {
                self.write_len(values.len())?;
                for value in values {
                    self.write_i32(*value);
                }
            }
            OwnValue::LongArray(values) => {
                self.write_len(values.len())?;
                for value in values {
                    self.write_i64(*value);
                }
            }
        }
        Ok(())
    }
}

/// Writes `value` as a root tag called `name`.
pub fn write_named<O: ByteOrder>(name: &str, value: &OwnValue) -> Result<Vec<u8>> {
    let mut writer = Writer::<O>::new();
    writer.buf.push(value.tag_id() as u8);
    if value.tag_id() == TagID::End {
        return Ok(writer.buf);
    }
    writer.write_string(name)?;
    writer.write_payload(value)?;
    Ok(writer.buf)
}

/// Writes `value` as a root tag with an empty name.
///
/// # Example
///
/// ```
/// use na_item::{BigEndian, OwnValue, write_value};
///
/// let bytes = write_value::<BigEndian>(&OwnValue::Int(7)).unwrap();
/// assert_eq!(bytes, [0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07]);
/// ```
#[inline]
pub fn write_value<O: ByteOrder>(value: &OwnValue) -> Result<Vec<u8>> {
    write_named::<O>("", value)
}

pub fn write_to_writer<O: ByteOrder>(value: &OwnValue, mut writer: impl Write) -> Result<()> {
    let buf = write_value::<O>(value)?;
    writer.write_all(&buf).map_err(Error::IO)
}
