// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The record contract shared by every PDU and sub-record.
//!
//! A record owns a fixed field layout. It knows its exact encoded size, how
//! to write itself through a [`Writer`], how to read itself back through a
//! [`Reader`], and how to render a diagnostic dump.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use discodec::record::{decode_record, encode_record, EntityId, Record};
//! use discodec::stream::Reader;
//! use discodec::ByteOrder;
//!
//! let id = EntityId::new(1, 2, 3);
//! let bytes = encode_record(&id, ByteOrder::Big)?;
//! assert_eq!(bytes.len(), id.marshalled_size());
//!
//! let mut reader = Reader::new(bytes, ByteOrder::Big);
//! let decoded: EntityId = decode_record(&mut reader)?;
//! assert_eq!(decoded, id);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod coordinates;
pub mod datum;
pub mod list;
pub mod parameter;

use std::fmt;

pub use common::{
    ClockTime, DeadReckoningParameters, EntityId, EntityMarking, EntityType, EulerAngles, EventId,
    Vector3Double, Vector3Float,
};
pub use coordinates::{heading_pitch_roll_to_euler, GeodeticPosition};
pub use datum::{FixedDatum, RecordSpecificationElement, VariableDatum};
pub use list::VariableRecordList;
pub use parameter::{
    ArticulationParameter, AttachedPart, ArticulatedPart, EntityAssociation, EntityTypeParameter,
    SeparationParameter, VariableParameter,
};

use crate::core::{ByteOrder, Result};
use crate::stream::{Reader, Writer};

// =============================================================================
// Record Trait
// =============================================================================

/// Uniform encode/decode/introspect surface of a wire record.
///
/// Implementations must keep [`Record::marshalled_size`] equal to the number
/// of bytes [`Record::write`] emits, and must read fields in the same order
/// they are written.
pub trait Record {
    /// Exact number of bytes [`Record::write`] emits. Pure, no I/O.
    fn marshalled_size(&self) -> usize;

    /// Encode every field in wire order.
    ///
    /// Failures from the writer are returned as-is. Bytes already appended
    /// before the failure are invalid and must be discarded by the caller.
    fn write(&self, writer: &mut Writer) -> Result<()>;

    /// Decode every field in wire order.
    ///
    /// On error the record is in an unspecified state and must be discarded.
    /// Use [`decode_record`] to never observe such a record.
    fn read(&mut self, reader: &mut Reader) -> Result<()>;

    /// Render a human-readable dump of the field values.
    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result;
}

/// Decode a fresh record, returning it only if every field was read.
pub fn decode_record<R: Record + Default>(reader: &mut Reader) -> Result<R> {
    let mut record = R::default();
    record.read(reader)?;
    Ok(record)
}

/// Encode a record into a new buffer.
///
/// On error the partial buffer is dropped.
pub fn encode_record<R: Record + ?Sized>(record: &R, order: ByteOrder) -> Result<Vec<u8>> {
    let mut writer = Writer::new(order);
    record.write(&mut writer)?;
    Ok(writer.into_bytes())
}

/// Marker appended when a record's own `describe` reports an error.
pub const DESCRIBE_FAILED: &str = "<describe failed>";

/// Render a record's dump into a string.
///
/// A `String` sink never fails, so an error here comes from the record
/// itself. The partial dump is kept and ends with [`DESCRIBE_FAILED`].
pub fn describe_to_string<R: Record + ?Sized>(record: &R) -> String {
    let mut text = String::new();
    if record.describe(&mut Describer::new(&mut text)).is_err() {
        text.push_str(DESCRIBE_FAILED);
        text.push('\n');
    }
    text
}

// =============================================================================
// Describer
// =============================================================================

/// Indented `name: value` sink used by [`Record::describe`].
pub struct Describer<'a> {
    out: &'a mut dyn fmt::Write,
    indent: usize,
}

impl<'a> Describer<'a> {
    /// Indentation width per nesting level.
    const INDENT: usize = 2;

    /// Create a describer writing at the top level.
    pub fn new(out: &'a mut dyn fmt::Write) -> Self {
        Self { out, indent: 0 }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.indent
    }

    fn pad(&mut self) -> fmt::Result {
        write!(self.out, "{:width$}", "", width = self.indent * Self::INDENT)
    }

    /// Emit a scalar field.
    pub fn field(&mut self, name: &str, value: impl fmt::Display) -> fmt::Result {
        self.pad()?;
        writeln!(self.out, "{name}: {value}")
    }

    /// Emit a nested record under a heading.
    pub fn record<R: Record + ?Sized>(&mut self, name: &str, record: &R) -> fmt::Result {
        self.pad()?;
        writeln!(self.out, "{name}:")?;
        record.describe(&mut self.nested())
    }

    /// Emit a sequence of records, each under an indexed heading.
    pub fn list<R: Record>(&mut self, name: &str, records: &[R]) -> fmt::Result {
        self.field(name, format_args!("{} item(s)", records.len()))?;
        let mut nested = self.nested();
        for (index, record) in records.iter().enumerate() {
            nested.record(&format!("[{index}]"), record)?;
        }
        Ok(())
    }

    fn nested(&mut self) -> Describer<'_> {
        Describer {
            out: &mut *self.out,
            indent: self.indent + 1,
        }
    }
}
