#![allow(dead_code)]

use std::io::{Read, Seek, SeekFrom};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Assembles synthetic TIFF streams entry by entry.
pub struct TiffBuilder {
    big_endian: bool,
    pub data: Vec<u8>,
}

impl TiffBuilder {
    /// Little-endian header with the first IFD at `first_ifd`
    pub fn le(first_ifd: u32) -> Self {
        let mut builder = Self {
            big_endian: false,
            data: Vec::new(),
        };
        builder.bytes(b"II");
        builder.u16(42);
        builder.u32(first_ifd);
        builder
    }

    /// Big-endian header with the first IFD at `first_ifd`
    pub fn be(first_ifd: u32) -> Self {
        let mut builder = Self {
            big_endian: true,
            data: Vec::new(),
        };
        builder.bytes(b"MM");
        builder.u16(42);
        builder.u32(first_ifd);
        builder
    }

    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn u16(&mut self, value: u16) -> &mut Self {
        let bytes = if self.big_endian {
            value.to_be_bytes()
        } else {
            value.to_le_bytes()
        };
        self.bytes(&bytes)
    }

    pub fn u32(&mut self, value: u32) -> &mut Self {
        let bytes = if self.big_endian {
            value.to_be_bytes()
        } else {
            value.to_le_bytes()
        };
        self.bytes(&bytes)
    }

    /// One 12-byte directory entry; `slot` is the raw 4-byte value/offset
    /// field exactly as it should appear in the stream
    pub fn entry(&mut self, tag: u16, data_type: u16, count: u32, slot: [u8; 4]) -> &mut Self {
        self.u16(tag);
        self.u16(data_type);
        self.u32(count);
        self.bytes(&slot)
    }

    /// An entry whose slot holds an integer (inline value or offset)
    pub fn entry_u32(&mut self, tag: u16, data_type: u16, count: u32, slot: u32) -> &mut Self {
        let bytes = if self.big_endian {
            slot.to_be_bytes()
        } else {
            slot.to_le_bytes()
        };
        self.entry(tag, data_type, count, bytes)
    }

    /// Pad with zero bytes up to `offset`
    pub fn pad_to(&mut self, offset: usize) -> &mut Self {
        assert!(self.data.len() <= offset, "builder already past {offset}");
        self.data.resize(offset, 0);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.data.clone()
    }
}

/// Seekable reader that counts `read` calls, for cache instrumentation
pub struct CountingReader<R> {
    inner: R,
    reads: Arc<AtomicU64>,
}

impl<R> CountingReader<R> {
    pub fn new(inner: R) -> (Self, Arc<AtomicU64>) {
        let reads = Arc::new(AtomicU64::new(0));
        (
            Self {
                inner,
                reads: Arc::clone(&reads),
            },
            reads,
        )
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read(buf)
    }
}

impl<R: Seek> Seek for CountingReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}
