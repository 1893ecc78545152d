use std::io::{Read, Seek, SeekFrom};

use egret_common::math::ToU32;

use crate::error::Result;

/// Byte order of a TIFF stream
///
/// Decided once per source from the 2-byte `II`/`MM` prefix and immutable
/// for the lifetime of the decoding session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

/// Positioned, endianness-aware reader over a byte source
///
/// Knows nothing about TIFF structure beyond the byte order. Callers that
/// need to return to a prior position save [`Raw::position`] before any
/// nested seek and restore it afterwards.
#[derive(Debug)]
pub struct Raw<R> {
    pub byte_order: ByteOrder,
    inner: R,
}

macro_rules! impl_read {
    ($($name:ident, $t:ty;)*) => {
        $(
            pub fn $name(&mut self) -> Result<$t> {
                let bytes = self.read_exact()?;
                Ok(match self.byte_order {
                    ByteOrder::LittleEndian => <$t>::from_le_bytes(bytes),
                    ByteOrder::BigEndian => <$t>::from_be_bytes(bytes),
                })
            }
        )*
    };
}

impl<R: Read + Seek> Raw<R> {
    /// Byte order defaults to little-endian until the header says otherwise.
    pub fn new(inner: R) -> Self {
        Self::with_byte_order(inner, ByteOrder::LittleEndian)
    }

    pub fn with_byte_order(inner: R, byte_order: ByteOrder) -> Self {
        Self { byte_order, inner }
    }

    pub fn position(&mut self) -> Result<u32> {
        Ok(self.inner.stream_position()?.u32()?)
    }

    pub fn seek_start(&mut self, seek: u32) -> Result<()> {
        self.inner.seek(SeekFrom::Start(seek.into()))?;

        Ok(())
    }

    pub fn read_exact<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes: [u8; N] = [0; N];
        self.inner.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0; n];
        self.inner.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.read_exact()?;
        Ok(byte)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        let [byte] = self.read_exact()?;
        Ok(i8::from_le_bytes([byte]))
    }

    impl_read! {
        read_u16, u16;
        read_i16, i16;
        read_u32, u32;
        read_i32, i32;
        read_f32, f32;
        read_f64, f64;
    }

    /// Unsigned rational: two 4-byte components, returned as their quotient.
    /// A zero denominator yields NaN, the source data's "not applicable".
    pub fn read_urational(&mut self) -> Result<f64> {
        let numerator = self.read_u32()?;
        let denominator = self.read_u32()?;
        Ok(quotient(numerator.into(), denominator.into()))
    }

    pub fn read_srational(&mut self) -> Result<f64> {
        let numerator = self.read_i32()?;
        let denominator = self.read_i32()?;
        Ok(quotient(numerator.into(), denominator.into()))
    }
}

fn quotient(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0. {
        f64::NAN
    } else {
        numerator / denominator
    }
}
