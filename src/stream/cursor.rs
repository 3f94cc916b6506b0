// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte cursor shared by [`Reader`](super::Reader) and [`Writer`](super::Writer).
//!
//! The cursor owns the bytes, a position counter and the selected byte
//! order. It knows nothing about DIS. Reads take windows at arbitrary
//! offsets; writes only ever append at the true end of the buffer.

use crate::core::{ByteOrder, CodecError, Result};

/// Growable byte buffer with a position counter and byte order.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use discodec::stream::ByteCursor;
/// use discodec::ByteOrder;
///
/// let mut cursor = ByteCursor::new(ByteOrder::Big);
/// cursor.append(&[0x01, 0x02, 0x03]);
/// assert_eq!(cursor.read_window(1, 2)?, &[0x02, 0x03]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteCursor {
    /// The data buffer
    buffer: Vec<u8>,
    /// Bytes consumed by reads, or written by appends
    position: usize,
    /// Byte order of multi-byte primitives
    order: ByteOrder,
}

impl ByteCursor {
    /// Create an empty cursor.
    pub fn new(order: ByteOrder) -> Self {
        Self::with_capacity(order, 0)
    }

    /// Create an empty cursor with preallocated storage.
    pub fn with_capacity(order: ByteOrder, capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            position: 0,
            order,
        }
    }

    /// Create a cursor over existing bytes, positioned at the start.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, order: ByteOrder) -> Self {
        Self {
            buffer: bytes.into(),
            position: 0,
            order,
        }
    }

    /// Get the byte order.
    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Change the byte order for subsequent primitives.
    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Get the current position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the position forward.
    ///
    /// The position never moves backward.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.position += count;
    }

    /// Total number of bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bytes between the position and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Borrow the whole buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Return exactly `length` bytes starting at `start`.
    pub fn read_window(&self, start: usize, length: usize) -> Result<&[u8]> {
        match start.checked_add(length) {
            Some(end) if end <= self.buffer.len() => Ok(&self.buffer[start..end]),
            _ => Err(CodecError::out_of_range(start, length, self.buffer.len())),
        }
    }

    /// Append bytes at the end of the buffer.
    pub fn append(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Snapshot of the full buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    /// Consume the cursor and return its buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Drop everything past `len` bytes.
    ///
    /// Used to discard the partial output of a failed write.
    pub fn truncate(&mut self, len: usize) {
        self.buffer.truncate(len);
        self.position = self.position.min(len);
    }

    /// Clear the buffer for reuse, keeping its allocation.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.position = 0;
    }
}
