use std::io::Cursor;

use egret_common::math::ToUsize;

use super::*;
use crate::error::ResultExt;

impl<R: Read + Seek> TiffRaw<R> {
    /// Decode the value of one entry
    ///
    /// The cursor ends just past the entry's 4-byte slot, however far an
    /// indirect read seeked.
    pub fn decode_value(&mut self, entry: &EntryRef) -> Result<Value> {
        let data = self.value_bytes(entry)?;
        parse_elements(&data, entry.data_type, entry.count, self.raw.byte_order)
    }

    /// Fetch the raw value bytes, following the offset indirection when the
    /// total value size exceeds the 4-byte slot
    fn value_bytes(&mut self, entry: &EntryRef) -> Result<Vec<u8>> {
        let len = entry.data_len()?.usize()?;

        let data = match entry.value_offset {
            ValueOffset::Value(slot) => {
                // Reconstruct the slot bytes as stored in the stream.
                let bytes = match self.raw.byte_order {
                    ByteOrder::LittleEndian => slot.to_le_bytes(),
                    ByteOrder::BigEndian => slot.to_be_bytes(),
                };
                bytes.get(..len).e(Error::TruncatedRead)?.to_vec()
            }
            ValueOffset::Offset(offset) => {
                self.raw.seek_start(offset)?;
                self.raw.read_bytes(len)?
            }
        };

        self.raw.seek_start(entry.end_position()?)?;

        Ok(data)
    }
}

/// Decode `count` elements of `data_type` from the fetched value bytes
///
/// Numeric counts of one give a scalar; ASCII gives one string with the
/// trailing NUL padding stripped.
fn parse_elements(data: &[u8], data_type: Type, count: u32, byte_order: ByteOrder) -> Result<Value> {
    let mut cursor = Raw::with_byte_order(Cursor::new(data), byte_order);

    if data_type == Type::Ascii {
        let mut bytes = cursor.read_bytes(count.usize()?)?;
        while let Some(&0) = bytes.last() {
            bytes.pop();
        }
        return Ok(Value::Text(String::from_utf8_lossy(&bytes).into_owned()));
    }

    let mut elements = Vec::new();
    for _ in 0..count {
        elements.push(match data_type {
            Type::Byte | Type::Undefined => Value::UInt(cursor.read_u8()?.into()),
            Type::Short => Value::UInt(cursor.read_u16()?.into()),
            Type::Long => Value::UInt(cursor.read_u32()?),
            Type::SByte => Value::Int(cursor.read_i8()?.into()),
            Type::SShort => Value::Int(cursor.read_i16()?.into()),
            Type::SLong => Value::Int(cursor.read_i32()?),
            Type::Rational => Value::Float(cursor.read_urational()?),
            Type::SRational => Value::Float(cursor.read_srational()?),
            Type::Float => Value::Float(cursor.read_f32()?.into()),
            Type::Double => Value::Float(cursor.read_f64()?),
            Type::Ascii | Type::Unknown(_) => {
                return Err(Error::UnknownTagType(data_type.u16()))
            }
        });
    }

    if elements.len() == 1 {
        Ok(elements.remove(0))
    } else {
        Ok(Value::List(elements))
    }
}
