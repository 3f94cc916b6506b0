// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Sequential primitive encoder.
//!
//! Mirror of [`Reader`](super::Reader): each primitive is encoded in the
//! native little-endian representation, reversed when the cursor is
//! big-endian, and appended. Raw blocks are appended untouched since they
//! are already in wire order.

use byteorder::{ByteOrder as _, LittleEndian};

use super::cursor::ByteCursor;
use crate::core::{ByteOrder, CodecError, Result};

/// Default initial capacity for the writer buffer.
const DEFAULT_CAPACITY: usize = 64;

/// Sequential encoder into a [`ByteCursor`].
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use discodec::stream::Writer;
/// use discodec::ByteOrder;
///
/// let mut writer = Writer::new(ByteOrder::Big);
/// writer.write_u16(42)?;
/// writer.write_bytes(b"ok")?;
/// assert_eq!(writer.snapshot(), vec![0x00, 0x2A, b'o', b'k']);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    cursor: ByteCursor,
    /// Maximum number of bytes the writer may hold
    limit: Option<usize>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(ByteOrder::Big)
    }
}

impl Writer {
    /// Create an unbounded writer.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            cursor: ByteCursor::with_capacity(order, DEFAULT_CAPACITY),
            limit: None,
        }
    }

    /// Create a writer that refuses to grow past `limit` bytes.
    pub fn with_limit(order: ByteOrder, limit: usize) -> Self {
        Self {
            cursor: ByteCursor::with_capacity(order, DEFAULT_CAPACITY.min(limit)),
            limit: Some(limit),
        }
    }

    /// Get the byte order.
    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.cursor.order()
    }

    /// Get the configured limit.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor.position()
    }

    /// Check if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.position() == 0
    }

    /// Snapshot of everything written so far.
    pub fn snapshot(&self) -> Vec<u8> {
        self.cursor.to_bytes()
    }

    /// Borrow everything written so far.
    pub fn as_bytes(&self) -> &[u8] {
        self.cursor.as_bytes()
    }

    /// Consume the writer and return the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.cursor.into_bytes()
    }

    /// Reset the writer for a new encode, keeping the allocation.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Discard everything written after the first `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        self.cursor.truncate(len);
    }

    fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let requested = self.cursor.len() + bytes.len();
        if let Some(limit) = self.limit {
            if requested > limit {
                return Err(CodecError::buffer_full(limit, requested));
            }
        }
        self.cursor.append(bytes);
        self.cursor.advance(bytes.len());
        Ok(())
    }

    /// Append a primitive given in little-endian representation.
    fn append_ordered<const N: usize>(&mut self, mut bytes: [u8; N]) -> Result<()> {
        if self.cursor.order().is_big() {
            bytes.reverse();
        }
        self.append(&bytes)
    }

    /// Write an 8-bit unsigned integer.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.append(&[value])
    }

    /// Write an 8-bit signed integer.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.append(&[value as u8])
    }

    /// Write a 16-bit unsigned integer.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        let mut bytes = [0u8; 2];
        LittleEndian::write_u16(&mut bytes, value);
        self.append_ordered(bytes)
    }

    /// Write a 16-bit signed integer.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        let mut bytes = [0u8; 2];
        LittleEndian::write_i16(&mut bytes, value);
        self.append_ordered(bytes)
    }

    /// Write a 32-bit unsigned integer.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        let mut bytes = [0u8; 4];
        LittleEndian::write_u32(&mut bytes, value);
        self.append_ordered(bytes)
    }

    /// Write a 32-bit signed integer.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        let mut bytes = [0u8; 4];
        LittleEndian::write_i32(&mut bytes, value);
        self.append_ordered(bytes)
    }

    /// Write a 64-bit unsigned integer.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        let mut bytes = [0u8; 8];
        LittleEndian::write_u64(&mut bytes, value);
        self.append_ordered(bytes)
    }

    /// Write a 64-bit signed integer.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        let mut bytes = [0u8; 8];
        LittleEndian::write_i64(&mut bytes, value);
        self.append_ordered(bytes)
    }

    /// Write a 32-bit float.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        let mut bytes = [0u8; 4];
        LittleEndian::write_f32(&mut bytes, value);
        self.append_ordered(bytes)
    }

    /// Write a 64-bit double.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        let mut bytes = [0u8; 8];
        LittleEndian::write_f64(&mut bytes, value);
        self.append_ordered(bytes)
    }

    /// Write raw bytes as-is.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.append(data)
    }

    /// Write `count` zero bytes.
    pub fn write_padding(&mut self, count: usize) -> Result<()> {
        const ZEROS: [u8; 8] = [0; 8];
        let mut left = count;
        while left > 0 {
            let chunk = left.min(ZEROS.len());
            self.append(&ZEROS[..chunk])?;
            left -= chunk;
        }
        Ok(())
    }
}
