// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Sequential primitive decoder.
//!
//! Every read takes the byte window at the current position, reverses it
//! when the cursor is big-endian, interprets it in the native little-endian
//! representation and advances the position by the primitive's width.
//! Values are never validated here; that is the calling record's concern.

use byteorder::{ByteOrder as _, LittleEndian};

use super::cursor::ByteCursor;
use crate::core::{ByteOrder, CodecError, Result};

/// Sequential decoder over a [`ByteCursor`].
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use discodec::stream::Reader;
/// use discodec::ByteOrder;
///
/// let mut reader = Reader::new(vec![0x00, 0x2A, 0xFF], ByteOrder::Big);
/// assert_eq!(reader.read_u16()?, 42);
/// assert_eq!(reader.read_i8()?, -1);
/// assert!(reader.read_u8().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Reader {
    cursor: ByteCursor,
}

impl Reader {
    /// Create a reader over a copy of `bytes`.
    pub fn new(bytes: impl Into<Vec<u8>>, order: ByteOrder) -> Self {
        Self {
            cursor: ByteCursor::from_bytes(bytes, order),
        }
    }

    /// Create a reader over an existing cursor, continuing from its position.
    pub fn from_cursor(cursor: ByteCursor) -> Self {
        Self { cursor }
    }

    /// Get the byte order.
    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.cursor.order()
    }

    /// Get the current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Get the remaining bytes available to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Check if at end of buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.remaining() == 0
    }

    /// Release the underlying cursor.
    pub fn into_cursor(self) -> ByteCursor {
        self.cursor
    }

    fn check(&self, width: usize) -> Result<()> {
        if width > self.cursor.remaining() {
            return Err(CodecError::truncated(
                width,
                self.cursor.remaining(),
                self.cursor.position(),
            ));
        }
        Ok(())
    }

    /// Take the next `N` bytes in little-endian order.
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.check(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(self.cursor.read_window(self.cursor.position(), N)?);
        if self.cursor.order().is_big() {
            bytes.reverse();
        }
        self.cursor.advance(N);
        Ok(bytes)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    /// Read a signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a u16 value.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(&self.take::<2>()?))
    }

    /// Read an i16 value.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(&self.take::<2>()?))
    }

    /// Read a u32 value.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(&self.take::<4>()?))
    }

    /// Read an i32 value.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(&self.take::<4>()?))
    }

    /// Read a u64 value.
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(&self.take::<8>()?))
    }

    /// Read an i64 value.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(LittleEndian::read_i64(&self.take::<8>()?))
    }

    /// Read an f32 value.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(&self.take::<4>()?))
    }

    /// Read an f64 value.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(&self.take::<8>()?))
    }

    /// Read a raw block of `count` bytes. Blocks are never reordered.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.check(count)?;
        let bytes = self
            .cursor
            .read_window(self.cursor.position(), count)?
            .to_vec();
        self.cursor.advance(count);
        Ok(bytes)
    }

    /// Read a fixed-size raw block. Blocks are never reordered.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.check(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(self.cursor.read_window(self.cursor.position(), N)?);
        self.cursor.advance(N);
        Ok(bytes)
    }

    /// Skip bytes.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.check(count)?;
        self.cursor.advance(count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u8() {
        let mut reader = Reader::new(vec![0x42, 0xFF], ByteOrder::Big);
        assert_eq!(reader.read_u8().unwrap(), 0x42);
        assert_eq!(reader.read_u8().unwrap(), 0xFF);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_read_i8() {
        let mut reader = Reader::new(vec![0xFF, 0x7F], ByteOrder::Big);
        assert_eq!(reader.read_i8().unwrap(), -1);
        assert_eq!(reader.read_i8().unwrap(), 127);
    }

    #[test]
    fn test_read_u16_big_endian() {
        let mut reader = Reader::new(vec![0x12, 0x34], ByteOrder::Big);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
    }

    #[test]
    fn test_read_u16_little_endian() {
        let mut reader = Reader::new(vec![0x12, 0x34], ByteOrder::Little);
        assert_eq!(reader.read_u16().unwrap(), 0x3412);
    }

    #[test]
    fn test_read_i16_min_max() {
        let mut data = Vec::new();
        data.extend_from_slice(&i16::MIN.to_be_bytes());
        data.extend_from_slice(&i16::MAX.to_be_bytes());
        let mut reader = Reader::new(data, ByteOrder::Big);
        assert_eq!(reader.read_i16().unwrap(), i16::MIN);
        assert_eq!(reader.read_i16().unwrap(), i16::MAX);
    }

    #[test]
    fn test_read_u32_big_endian() {
        let mut reader = Reader::new(vec![0x12, 0x34, 0x56, 0x78], ByteOrder::Big);
        assert_eq!(reader.read_u32().unwrap(), 0x12345678);
    }

    #[test]
    fn test_read_i32_min_max() {
        let mut data = Vec::new();
        data.extend_from_slice(&i32::MIN.to_le_bytes());
        data.extend_from_slice(&i32::MAX.to_le_bytes());
        let mut reader = Reader::new(data, ByteOrder::Little);
        assert_eq!(reader.read_i32().unwrap(), i32::MIN);
        assert_eq!(reader.read_i32().unwrap(), i32::MAX);
    }

    #[test]
    fn test_read_u64_big_endian() {
        let data = vec![0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];
        let mut reader = Reader::new(data, ByteOrder::Big);
        assert_eq!(reader.read_u64().unwrap(), 0x123456789ABCDEF0);
    }

    #[test]
    fn test_read_i64_min_max() {
        let mut data = Vec::new();
        data.extend_from_slice(&i64::MIN.to_be_bytes());
        data.extend_from_slice(&i64::MAX.to_be_bytes());
        let mut reader = Reader::new(data, ByteOrder::Big);
        assert_eq!(reader.read_i64().unwrap(), i64::MIN);
        assert_eq!(reader.read_i64().unwrap(), i64::MAX);
    }

    #[test]
    fn test_read_f32() {
        let mut reader = Reader::new(1.5f32.to_be_bytes().to_vec(), ByteOrder::Big);
        assert_eq!(reader.read_f32().unwrap(), 1.5);
    }

    #[test]
    fn test_read_f64() {
        let mut reader = Reader::new((-2.25f64).to_le_bytes().to_vec(), ByteOrder::Little);
        assert_eq!(reader.read_f64().unwrap(), -2.25);
    }

    #[test]
    fn test_read_bytes_not_reordered() {
        let mut reader = Reader::new(vec![1, 2, 3, 4], ByteOrder::Big);
        assert_eq!(reader.read_bytes(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn test_read_array() {
        let mut reader = Reader::new(vec![b'A', b'B', b'C'], ByteOrder::Big);
        assert_eq!(reader.read_array::<2>().unwrap(), [b'A', b'B']);
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn test_truncated_reads() {
        let mut reader = Reader::new(vec![0x01, 0x02, 0x03], ByteOrder::Big);
        let err = reader.read_u32().unwrap_err();
        assert_eq!(err, CodecError::truncated(4, 3, 0));
        // A failed read leaves the position untouched.
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        assert!(matches!(
            reader.read_f64(),
            Err(CodecError::TruncatedInput { .. })
        ));
        assert!(reader.read_bytes(2).is_err());
        assert!(reader.skip(2).is_err());
    }

    #[test]
    fn test_empty_input() {
        let mut reader = Reader::new(Vec::new(), ByteOrder::Big);
        assert!(reader.is_at_end());
        assert!(matches!(
            reader.read_u8(),
            Err(CodecError::TruncatedInput { requested: 1, .. })
        ));
        assert!(reader.read_bytes(0).unwrap().is_empty());
    }

    #[test]
    fn test_position_strictly_increases() {
        let mut data = vec![0u8; 1 + 2 + 4 + 8];
        data[0] = 7;
        let mut reader = Reader::new(data, ByteOrder::Big);
        let mut last = reader.position();
        reader.read_u8().unwrap();
        assert!(reader.position() > last);
        last = reader.position();
        reader.read_i16().unwrap();
        assert!(reader.position() > last);
        last = reader.position();
        reader.read_f32().unwrap();
        assert!(reader.position() > last);
        reader.read_u64().unwrap();
        assert_eq!(reader.position(), 15);
    }

    #[test]
    fn test_from_cursor_continues() {
        let mut cursor = ByteCursor::from_bytes(vec![0xAA, 0x00, 0x01], ByteOrder::Big);
        cursor.advance(1);
        let mut reader = Reader::from_cursor(cursor);
        assert_eq!(reader.read_u16().unwrap(), 1);
    }
}
