//! Bounds-checked sequential reader over a fully buffered file

use std::mem::size_of;

use crate::error::FormatError;

/// Forward-only reader over a byte slice.
///
/// Every read checks the remaining length first and fails with
/// [`FormatError::Truncated`] instead of reading past the end. There is no
/// seeking: once a count is wrong, every later read is wrong too.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn is_eof(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail unless at least `needed` bytes are left, without consuming them
    pub fn ensure(&self, needed: usize) -> Result<(), FormatError> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(FormatError::Truncated {
                offset: self.pos,
                needed,
                remaining,
            });
        }
        Ok(())
    }

    /// Consume the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], FormatError> {
        self.ensure(len)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, FormatError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a fixed-layout record. Byte order is left to the caller.
    pub fn read_pod<T: bytemuck::Pod>(&mut self) -> Result<T, FormatError> {
        let bytes = self.read_bytes(size_of::<T>())?;
        Ok(bytemuck::pod_read_unaligned(bytes))
    }
}
