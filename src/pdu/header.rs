// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The 12-byte header that opens every PDU.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::timestamp::DisTimestamp;
use super::types::PduType;
use crate::core::{CodecError, Result};
use crate::record::{Describer, Record};
use crate::stream::{Reader, Writer};

/// Protocol families used by the implemented PDUs.
pub mod family {
    pub const OTHER: u8 = 0;
    pub const ENTITY_INFORMATION: u8 = 1;
    pub const ENTITY_INTERACTION: u8 = 4;
    pub const SIMULATION_MANAGEMENT: u8 = 5;
    pub const SIMULATION_MANAGEMENT_RELIABLE: u8 = 10;
}

/// Protocol versions this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// IEEE 1278.1a-1998 (DIS 6)
    Dis1998,
    /// IEEE 1278.1-2012 (DIS 7)
    Dis2012,
}

impl ProtocolVersion {
    /// Every implemented version.
    pub const ALL: [ProtocolVersion; 2] = [ProtocolVersion::Dis1998, ProtocolVersion::Dis2012];

    /// The version byte carried in the header.
    pub const fn as_u8(self) -> u8 {
        match self {
            ProtocolVersion::Dis1998 => 6,
            ProtocolVersion::Dis2012 => 7,
        }
    }
}

impl TryFrom<u8> for ProtocolVersion {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            6 => Ok(ProtocolVersion::Dis1998),
            7 => Ok(ProtocolVersion::Dis2012),
            other => Err(CodecError::unsupported_version(other)),
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolVersion::Dis1998 => write!(f, "DIS 6 (1998)"),
            ProtocolVersion::Dis2012 => write!(f, "DIS 7 (2012)"),
        }
    }
}

/// Common PDU header.
///
/// DIS 1998 names the last two bytes a 16-bit padding field; DIS 2012 uses
/// the first of them as PDU status. The byte layout is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PduHeader {
    pub protocol_version: u8,
    pub exercise_id: u8,
    pub pdu_type: u8,
    pub protocol_family: u8,
    pub timestamp: DisTimestamp,
    /// Size of the whole PDU in bytes, header included
    pub length: u16,
    pub pdu_status: u8,
    pub padding: u8,
}

impl PduHeader {
    /// Encoded header size.
    pub const SIZE: usize = 12;

    /// Byte offsets of fields a stream reader peeks at before decoding.
    pub const VERSION_OFFSET: usize = 0;
    pub const TYPE_OFFSET: usize = 2;
    pub const LENGTH_OFFSET: usize = 8;

    /// Header for a zero-valued PDU of the given kind.
    pub fn new(version: ProtocolVersion, pdu_type: PduType, protocol_family: u8) -> Self {
        Self {
            protocol_version: version.as_u8(),
            pdu_type: pdu_type.to_int(),
            protocol_family,
            ..Default::default()
        }
    }

    /// Typed view of the version byte.
    pub fn version(&self) -> Result<ProtocolVersion> {
        ProtocolVersion::try_from(self.protocol_version)
    }

    /// Typed view of the type byte.
    pub fn kind(&self) -> PduType {
        PduType::from_int(self.pdu_type)
    }
}

impl Record for PduHeader {
    fn marshalled_size(&self) -> usize {
        Self::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u8(self.protocol_version)?;
        writer.write_u8(self.exercise_id)?;
        writer.write_u8(self.pdu_type)?;
        writer.write_u8(self.protocol_family)?;
        writer.write_u32(self.timestamp.raw())?;
        writer.write_u16(self.length)?;
        writer.write_u8(self.pdu_status)?;
        writer.write_u8(self.padding)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.protocol_version = reader.read_u8()?;
        self.exercise_id = reader.read_u8()?;
        self.pdu_type = reader.read_u8()?;
        self.protocol_family = reader.read_u8()?;
        self.timestamp = DisTimestamp::from_raw(reader.read_u32()?);
        self.length = reader.read_u16()?;
        self.pdu_status = reader.read_u8()?;
        self.padding = reader.read_u8()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("protocol_version", self.protocol_version)?;
        out.field("exercise_id", self.exercise_id)?;
        out.field("pdu_type", format_args!("{} ({})", self.pdu_type, self.kind()))?;
        out.field("protocol_family", self.protocol_family)?;
        out.field("timestamp", self.timestamp)?;
        out.field("length", self.length)?;
        out.field("pdu_status", self.pdu_status)
    }
}
