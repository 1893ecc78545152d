mod debug;
mod decode;
mod values;

use std::collections::BTreeMap;
use std::io::{Read, Seek};
use std::sync::Arc;

use egret_common::math::{SafeAdd, SafeMul};
use egret_common::tag::Tag;

use super::{ByteOrder, Raw, Type};
use crate::error::{Error, Result};
use crate::{Ifd, Options, Value};

/// Size of one directory entry record: u16 tag id, u16 type, u32 count,
/// 4-byte value/offset slot.
pub(crate) const ENTRY_SIZE: u32 = 12;

/// Reference to one 12-byte directory entry
#[derive(Debug, Clone, Copy)]
pub struct EntryRef {
    pub position: u32,
    pub data_type: Type,
    pub count: u32,
    pub value_offset: ValueOffset,
}

impl EntryRef {
    /// Total value size in bytes: count × element width
    pub fn data_len(&self) -> Result<u32> {
        Ok(self.count.safe_mul(self.data_type.size())?)
    }

    /// Position of the entry's 4-byte value/offset slot
    pub fn value_offset_position(&self) -> Result<u32> {
        Ok(self.position.safe_add(8)?)
    }

    /// Position just past the entry record; where the cursor must land
    /// after the entry is decoded, indirection or not.
    pub fn end_position(&self) -> Result<u32> {
        Ok(self.position.safe_add(ENTRY_SIZE)?)
    }
}

/// The 4-byte slot of an entry: an inline value when the total value size
/// fits in 4 bytes, otherwise the absolute offset where the value resides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOffset {
    Value(u32),
    Offset(u32),
}

impl ValueOffset {
    fn new(data_type: Type, count: u32, value: u32) -> Result<Self> {
        let size = data_type.size().safe_mul(count)?;
        Ok(if size <= 4 {
            Self::Value(value)
        } else {
            Self::Offset(value)
        })
    }
}

/// Decoding session over one byte source
///
/// Owns the cursor, the resolved first-IFD offset, and the offset-keyed
/// cache of decoded directories. Cursor position is shared mutable state:
/// one session, one cursor.
#[derive(Debug)]
pub struct TiffRaw<R> {
    pub raw: Raw<R>,
    pub options: Options,
    pub first_ifd_offset: u32,
    ifds: BTreeMap<u32, Arc<Ifd>>,
}

impl<R: Read + Seek> TiffRaw<R> {
    pub fn new(inner: R, options: Options) -> Self {
        Self {
            raw: Raw::new(inner),
            options,
            first_ifd_offset: 0,
            ifds: BTreeMap::new(),
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.raw.byte_order
    }

    /// Directories decoded so far, keyed by offset
    pub fn cached_ifds(&self) -> impl Iterator<Item = (u32, &Arc<Ifd>)> {
        self.ifds.iter().map(|(offset, ifd)| (*offset, ifd))
    }
}
