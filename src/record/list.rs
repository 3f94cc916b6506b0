// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Count-prefixed sequence of self-sized records.
//!
//! On the wire a list is a `u32` element count followed by exactly that many
//! elements, each of which knows its own encoded size. The count is never
//! stored: it is always the live length of the list at encode time.
//!
//! Some PDUs carry their counts elsewhere (grouped ahead of several lists, or
//! in a narrower field). Those use [`VariableRecordList::write_elements`] and
//! [`VariableRecordList::read_elements`] and encode the count themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{decode_record, Describer, Record};
use crate::core::{CodecError, Result};
use crate::stream::{Reader, Writer};

/// Width of the count prefix.
const COUNT_SIZE: usize = 4;

/// Ordered list of records encoded as `u32 count` + elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableRecordList<T> {
    items: Vec<T>,
}

impl<T> Default for VariableRecordList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for VariableRecordList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for VariableRecordList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a VariableRecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> VariableRecordList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements in wire order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Mutable access to the elements.
    pub fn as_mut_vec(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Consume the list.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Record + Default> VariableRecordList<T> {
    /// Live element count as it goes on the wire.
    pub fn count(&self) -> Result<u32> {
        u32::try_from(self.items.len()).map_err(|_| {
            CodecError::encode(
                "VariableRecordList",
                format!("{} elements do not fit a 32-bit count", self.items.len()),
            )
        })
    }

    /// Encoded size of the elements alone, without a count prefix.
    pub fn elements_size(&self) -> usize {
        self.items.iter().map(Record::marshalled_size).sum()
    }

    /// Write the elements alone, in list order.
    pub fn write_elements(&self, writer: &mut Writer) -> Result<()> {
        for item in &self.items {
            item.write(writer)?;
        }
        Ok(())
    }

    /// Replace the contents with exactly `count` freshly read elements.
    ///
    /// Every element occupies at least one byte, so a count larger than the
    /// remaining input fails before anything is allocated. The list is only
    /// replaced once every element has been read.
    pub fn read_elements(&mut self, reader: &mut Reader, count: usize) -> Result<()> {
        if count > reader.remaining() {
            return Err(CodecError::truncated(
                count,
                reader.remaining(),
                reader.position(),
            ));
        }
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(decode_record::<T>(reader)?);
        }
        self.items = items;
        Ok(())
    }
}

impl<T: Record + Default> Record for VariableRecordList<T> {
    fn marshalled_size(&self) -> usize {
        COUNT_SIZE + self.elements_size()
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(self.count()?)?;
        self.write_elements(writer)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        let count = reader.read_u32()? as usize;
        self.read_elements(reader, count)
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.list("records", &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ByteOrder;
    use crate::record::{encode_record, EntityId};

    fn ids(n: u16) -> VariableRecordList<EntityId> {
        (0..n).map(|i| EntityId::new(i, i + 1, i + 2)).collect()
    }

    #[test]
    fn test_empty_list_encodes_zero_count() {
        let list: VariableRecordList<EntityId> = VariableRecordList::new();
        let bytes = encode_record(&list, ByteOrder::Big).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_count_is_live_length() {
        let mut list = ids(2);
        list.push(EntityId::new(9, 9, 9));
        let bytes = encode_record(&list, ByteOrder::Big).unwrap();
        assert_eq!(&bytes[..4], &[0, 0, 0, 3]);
        assert_eq!(bytes.len(), list.marshalled_size());
        assert_eq!(list.marshalled_size(), 4 + 3 * EntityId::SIZE);
    }

    #[test]
    fn test_read_preserves_order() {
        let list = ids(4);
        let bytes = encode_record(&list, ByteOrder::Little).unwrap();
        let mut reader = Reader::new(bytes, ByteOrder::Little);
        let decoded: VariableRecordList<EntityId> = decode_record(&mut reader).unwrap();
        assert_eq!(decoded, list);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_huge_count_fails_before_allocating() {
        let mut reader = Reader::new(vec![0xFF, 0xFF, 0xFF, 0xFF, 0, 1], ByteOrder::Big);
        let err = decode_record::<VariableRecordList<EntityId>>(&mut reader).unwrap_err();
        assert_eq!(err, CodecError::truncated(u32::MAX as usize, 2, 4));
    }

    #[test]
    fn test_failed_read_keeps_previous_contents() {
        let mut list = ids(1);
        // Count says two, but only one element follows.
        let mut bytes = vec![0, 0, 0, 2];
        bytes.extend_from_slice(&[0, 7, 0, 7, 0, 7]);
        let mut reader = Reader::new(bytes, ByteOrder::Big);
        assert!(list.read(&mut reader).is_err());
        assert_eq!(list, ids(1));
    }
}
