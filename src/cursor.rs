//! Bounds-checked reads over an immutable byte buffer.
//!
//! Every decoder touches bytes exclusively through [`ByteCursor`], never by
//! raw indexing, so the out-of-range failure mode lives in one place and
//! surfaces as a typed [`CursorError`] instead of a panic.  All multi-byte
//! reads are explicit about endianness; nothing is ever negotiated.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("read of {len} byte(s) at offset 0x{offset:x} exceeds buffer length {buffer_len}")]
    OutOfRange {
        offset:     usize,
        len:        usize,
        buffer_len: usize,
    },
}

/// Read-only view over a byte buffer with range-checked accessors.
///
/// Copyable; cloning a cursor never clones the underlying bytes.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Range check shared by every accessor.  `offset + len` overflowing
    /// counts as out of range, same as landing past the end.
    fn range(&self, offset: usize, len: usize) -> Result<&'a [u8], CursorError> {
        let oob = CursorError::OutOfRange { offset, len, buffer_len: self.data.len() };
        let end = offset.checked_add(len).ok_or(oob)?;
        if end > self.data.len() {
            return Err(oob);
        }
        Ok(&self.data[offset..end])
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, CursorError> {
        Ok(self.range(offset, 1)?[0])
    }

    pub fn read_u16_le(&self, offset: usize) -> Result<u16, CursorError> {
        Ok(LittleEndian::read_u16(self.range(offset, 2)?))
    }

    pub fn read_u16_be(&self, offset: usize) -> Result<u16, CursorError> {
        Ok(BigEndian::read_u16(self.range(offset, 2)?))
    }

    /// Three-byte little-endian length, as used by TZX data blocks.
    pub fn read_u24_le(&self, offset: usize) -> Result<u32, CursorError> {
        Ok(LittleEndian::read_u24(self.range(offset, 3)?))
    }

    pub fn read_u32_le(&self, offset: usize) -> Result<u32, CursorError> {
        Ok(LittleEndian::read_u32(self.range(offset, 4)?))
    }

    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8], CursorError> {
        self.range(offset, len)
    }

    /// Decode `len` bytes as UTF-8, replacing invalid sequences.  Legacy
    /// name fields are frequently padded with arbitrary bytes.
    pub fn utf8_lossy(&self, offset: usize, len: usize) -> Result<String, CursorError> {
        Ok(String::from_utf8_lossy(self.range(offset, len)?).into_owned())
    }
}
