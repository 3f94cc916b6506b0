// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Datum and record-set records carried by simulation management PDUs.
//!
//! Variable-sized payloads here are measured in bits on the wire and padded
//! with zeros to the next 64-bit boundary. Field names follow IEEE 1278.1.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Describer, Record};
use crate::core::{CodecError, Result};
use crate::stream::{Reader, Writer};

/// Bytes of zero padding needed after `len` bytes to reach a 64-bit boundary.
pub(crate) fn padding_to_64(len: usize) -> usize {
    (8 - len % 8) % 8
}

/// Bytes needed to hold `bits` bits.
fn bits_to_bytes(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// A 32-bit datum identified by a datum id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedDatum {
    pub datum_id: u32,
    pub datum_value: u32,
}

impl FixedDatum {
    /// Encoded size in bytes.
    pub const SIZE: usize = 8;

    pub fn new(datum_id: u32, datum_value: u32) -> Self {
        Self {
            datum_id,
            datum_value,
        }
    }
}

impl Record for FixedDatum {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(self.datum_id)?;
        writer.write_u32(self.datum_value)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.datum_id = reader.read_u32()?;
        self.datum_value = reader.read_u32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("datum_id", self.datum_id)?;
        out.field("datum_value", self.datum_value)
    }
}

/// A datum of arbitrary length.
///
/// The wire length field counts bits and is derived from `value` on encode,
/// so it is always a whole number of bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VariableDatum {
    pub datum_id: u32,
    /// Payload; its bit length is written as `8 * value.len()`
    pub value: Vec<u8>,
}

impl VariableDatum {
    /// Datum id and length fields.
    const FIXED_SIZE: usize = 8;

    pub fn new(datum_id: u32, value: impl Into<Vec<u8>>) -> Self {
        Self {
            datum_id,
            value: value.into(),
        }
    }

    /// Value length in bits as it goes on the wire.
    pub fn length_bits(&self) -> Result<u32> {
        self.value
            .len()
            .checked_mul(8)
            .and_then(|bits| u32::try_from(bits).ok())
            .ok_or_else(|| {
                CodecError::encode(
                    "VariableDatum",
                    format!("{} value bytes overflow the bit length", self.value.len()),
                )
            })
    }
}

impl Record for VariableDatum {
    fn marshalled_size(&self) -> usize {
        Self::FIXED_SIZE + self.value.len() + padding_to_64(self.value.len())
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(self.datum_id)?;
        writer.write_u32(self.length_bits()?)?;
        writer.write_bytes(&self.value)?;
        writer.write_padding(padding_to_64(self.value.len()))
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.datum_id = reader.read_u32()?;
        let bytes = bits_to_bytes(reader.read_u32()? as usize);
        self.value = reader.read_bytes(bytes)?;
        reader.skip(padding_to_64(bytes))
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("datum_id", self.datum_id)?;
        out.field("length_bits", self.value.len() * 8)?;
        out.field("value", hex::encode(&self.value))
    }
}

/// One record set of a record specification.
///
/// `record_length` is the size of a single record in bits. The record count
/// is derived from `records`, and every record must hold exactly
/// `ceil(record_length / 8)` bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RecordSpecificationElement {
    pub record_id: u32,
    pub record_set_serial_number: u32,
    /// Bits per record
    pub record_length: u16,
    /// Raw record bodies, each `ceil(record_length / 8)` bytes
    pub records: Vec<Vec<u8>>,
}

impl RecordSpecificationElement {
    /// Id, serial number, padding, length and count fields.
    const FIXED_SIZE: usize = 16;

    fn record_bytes(&self) -> usize {
        bits_to_bytes(self.record_length as usize)
    }

    fn values_size(&self) -> usize {
        self.records.len() * self.record_bytes()
    }

    fn record_count(&self) -> Result<u16> {
        u16::try_from(self.records.len()).map_err(|_| {
            CodecError::encode(
                "RecordSpecificationElement",
                format!("{} records do not fit a 16-bit count", self.records.len()),
            )
        })
    }
}

impl Record for RecordSpecificationElement {
    fn marshalled_size(&self) -> usize {
        let values = self.values_size();
        Self::FIXED_SIZE + values + padding_to_64(values)
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        let count = self.record_count()?;
        let expected = self.record_bytes();
        if let Some(bad) = self.records.iter().position(|r| r.len() != expected) {
            return Err(CodecError::encode(
                "RecordSpecificationElement",
                format!(
                    "record {bad} holds {} bytes, record length requires {expected}",
                    self.records[bad].len()
                ),
            ));
        }

        writer.write_u32(self.record_id)?;
        writer.write_u32(self.record_set_serial_number)?;
        writer.write_u32(0)?;
        writer.write_u16(self.record_length)?;
        writer.write_u16(count)?;
        for record in &self.records {
            writer.write_bytes(record)?;
        }
        writer.write_padding(padding_to_64(self.values_size()))
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.record_id = reader.read_u32()?;
        self.record_set_serial_number = reader.read_u32()?;
        reader.skip(4)?;
        self.record_length = reader.read_u16()?;
        let count = reader.read_u16()? as usize;
        let record_bytes = self.record_bytes();
        let values = count * record_bytes;
        if values > reader.remaining() {
            return Err(CodecError::truncated(
                values,
                reader.remaining(),
                reader.position(),
            ));
        }
        self.records = (0..count)
            .map(|_| reader.read_bytes(record_bytes))
            .collect::<Result<_>>()?;
        reader.skip(padding_to_64(values))
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("record_id", self.record_id)?;
        out.field("record_set_serial_number", self.record_set_serial_number)?;
        out.field("record_length", self.record_length)?;
        out.field("record_count", self.records.len())?;
        for (index, record) in self.records.iter().enumerate() {
            out.field(&format!("[{index}]"), hex::encode(record))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ByteOrder;
    use crate::record::{decode_record, encode_record};

    #[test]
    fn test_padding_to_64() {
        assert_eq!(padding_to_64(0), 0);
        assert_eq!(padding_to_64(1), 7);
        assert_eq!(padding_to_64(8), 0);
        assert_eq!(padding_to_64(13), 3);
    }

    #[test]
    fn test_variable_datum_padded() {
        let datum = VariableDatum::new(5000, b"hello".to_vec());
        let bytes = encode_record(&datum, ByteOrder::Big).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(datum.marshalled_size(), 16);
        assert_eq!(&bytes[4..8], &[0, 0, 0, 40]);
        assert_eq!(&bytes[8..13], b"hello");
        assert_eq!(&bytes[13..], &[0, 0, 0]);
    }

    #[test]
    fn test_variable_datum_partial_byte_length() {
        // 12 bits occupy two bytes, padded to eight.
        let mut bytes = vec![0, 0, 0, 1, 0, 0, 0, 12, 0xAB, 0xC0];
        bytes.extend_from_slice(&[0; 6]);
        let mut reader = Reader::new(bytes, ByteOrder::Big);
        let datum: VariableDatum = decode_record(&mut reader).unwrap();
        assert_eq!(datum.value, vec![0xAB, 0xC0]);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_record_specification_layout() {
        let element = RecordSpecificationElement {
            record_id: 240,
            record_set_serial_number: 1,
            record_length: 24,
            records: vec![vec![1, 2, 3], vec![4, 5, 6]],
        };
        let bytes = encode_record(&element, ByteOrder::Big).unwrap();
        assert_eq!(bytes.len(), 16 + 8);
        assert_eq!(bytes.len(), element.marshalled_size());
        assert_eq!(&bytes[12..16], &[0, 24, 0, 2]);
        assert_eq!(&bytes[16..22], &[1, 2, 3, 4, 5, 6]);

        let mut reader = Reader::new(bytes, ByteOrder::Big);
        let decoded: RecordSpecificationElement = decode_record(&mut reader).unwrap();
        assert_eq!(decoded, element);
    }

    #[test]
    fn test_record_specification_rejects_wrong_record_size() {
        let element = RecordSpecificationElement {
            record_length: 16,
            records: vec![vec![1, 2, 3]],
            ..Default::default()
        };
        let err = encode_record(&element, ByteOrder::Big).unwrap_err();
        assert!(matches!(err, CodecError::EncodeError { .. }));
    }
}
