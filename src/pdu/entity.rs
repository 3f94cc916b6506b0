// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Entity State and Entity State Update PDUs.
//!
//! Entity State keeps the same layout across versions except for its
//! trailing 16-byte parameter records, so it is generic over the parameter
//! type. The parameter count is a single byte placed ahead of the entity
//! type, not a `u32` prefix on the list.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::header::{family, PduHeader, ProtocolVersion};
use super::types::PduType;
use super::PduRecord;
use crate::core::{CodecError, Result};
use crate::record::{
    ArticulationParameter, DeadReckoningParameters, Describer, EntityId, EntityMarking,
    EntityType, EulerAngles, Record, VariableParameter, VariableRecordList, Vector3Double,
    Vector3Float,
};
use crate::stream::{Reader, Writer};

/// A 16-byte parameter record that Entity State can carry.
pub trait EntityParameter: Record + Default {
    /// The protocol version whose Entity State carries this record.
    const VERSION: ProtocolVersion;
}

impl EntityParameter for ArticulationParameter {
    const VERSION: ProtocolVersion = ProtocolVersion::Dis1998;
}

impl EntityParameter for VariableParameter {
    const VERSION: ProtocolVersion = ProtocolVersion::Dis2012;
}

/// Entity State as sent by DIS 1998 simulations.
pub type EntityStatePduV6 = EntityStatePdu<ArticulationParameter>;

/// Entity State as sent by DIS 2012 simulations.
pub type EntityStatePduV7 = EntityStatePdu<VariableParameter>;

fn parameter_count<P>(record: &str, parameters: &VariableRecordList<P>) -> Result<u8> {
    u8::try_from(parameters.len()).map_err(|_| {
        CodecError::encode(
            record,
            format!(
                "{} parameters do not fit the 8-bit parameter count",
                parameters.len()
            ),
        )
    })
}

// =============================================================================
// Entity State
// =============================================================================

/// Full state of a simulated entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityStatePdu<P> {
    pub header: PduHeader,
    pub entity_id: EntityId,
    pub force_id: u8,
    pub entity_type: EntityType,
    pub alternative_entity_type: EntityType,
    pub entity_linear_velocity: Vector3Float,
    pub entity_location: Vector3Double,
    pub entity_orientation: EulerAngles,
    pub entity_appearance: u32,
    pub dead_reckoning_parameters: DeadReckoningParameters,
    pub marking: EntityMarking,
    pub capabilities: u32,
    pub parameters: VariableRecordList<P>,
}

impl<P: EntityParameter> EntityStatePdu<P> {
    /// Size without parameter records.
    pub const FIXED_SIZE: usize = 144;

    /// Zero-valued PDU with the header identity filled in.
    pub fn new() -> Self {
        Self {
            header: PduHeader::new(P::VERSION, PduType::EntityState, family::ENTITY_INFORMATION),
            ..Default::default()
        }
    }
}

impl<P: EntityParameter> PduRecord for EntityStatePdu<P> {
    fn header(&self) -> &PduHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut PduHeader {
        &mut self.header
    }
}

impl<P: EntityParameter> Record for EntityStatePdu<P> {
    fn marshalled_size(&self) -> usize {
        Self::FIXED_SIZE + self.parameters.elements_size()
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        let count = parameter_count("EntityStatePdu", &self.parameters)?;
        self.header.write(writer)?;
        self.entity_id.write(writer)?;
        writer.write_u8(self.force_id)?;
        writer.write_u8(count)?;
        self.entity_type.write(writer)?;
        self.alternative_entity_type.write(writer)?;
        self.entity_linear_velocity.write(writer)?;
        self.entity_location.write(writer)?;
        self.entity_orientation.write(writer)?;
        writer.write_u32(self.entity_appearance)?;
        self.dead_reckoning_parameters.write(writer)?;
        self.marking.write(writer)?;
        writer.write_u32(self.capabilities)?;
        self.parameters.write_elements(writer)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        self.entity_id.read(reader)?;
        self.force_id = reader.read_u8()?;
        let count = reader.read_u8()? as usize;
        self.entity_type.read(reader)?;
        self.alternative_entity_type.read(reader)?;
        self.entity_linear_velocity.read(reader)?;
        self.entity_location.read(reader)?;
        self.entity_orientation.read(reader)?;
        self.entity_appearance = reader.read_u32()?;
        self.dead_reckoning_parameters.read(reader)?;
        self.marking.read(reader)?;
        self.capabilities = reader.read_u32()?;
        self.parameters.read_elements(reader, count)
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("entity_id", self.entity_id)?;
        out.field("force_id", self.force_id)?;
        out.field("entity_type", self.entity_type)?;
        out.field("alternative_entity_type", self.alternative_entity_type)?;
        out.record("entity_linear_velocity", &self.entity_linear_velocity)?;
        out.record("entity_location", &self.entity_location)?;
        out.record("entity_orientation", &self.entity_orientation)?;
        out.field("entity_appearance", format_args!("{:#010x}", self.entity_appearance))?;
        out.record("dead_reckoning_parameters", &self.dead_reckoning_parameters)?;
        out.record("marking", &self.marking)?;
        out.field("capabilities", format_args!("{:#010x}", self.capabilities))?;
        out.list("parameters", self.parameters.as_slice())
    }
}

// =============================================================================
// Entity State Update
// =============================================================================

/// Non-static subset of an entity's state (DIS 2012).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityStateUpdatePdu {
    pub header: PduHeader,
    pub entity_id: EntityId,
    pub padding: u8,
    pub entity_linear_velocity: Vector3Float,
    pub entity_location: Vector3Double,
    pub entity_orientation: EulerAngles,
    pub entity_appearance: u32,
    pub variable_parameters: VariableRecordList<VariableParameter>,
}

impl_pdu!(
    EntityStateUpdatePdu,
    PduType::EntityStateUpdate,
    family::ENTITY_INFORMATION
);

impl EntityStateUpdatePdu {
    /// Size without parameter records.
    pub const FIXED_SIZE: usize = 72;
}

impl Record for EntityStateUpdatePdu {
    fn marshalled_size(&self) -> usize {
        Self::FIXED_SIZE + self.variable_parameters.elements_size()
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        let count = parameter_count("EntityStateUpdatePdu", &self.variable_parameters)?;
        self.header.write(writer)?;
        self.entity_id.write(writer)?;
        writer.write_u8(self.padding)?;
        writer.write_u8(count)?;
        self.entity_linear_velocity.write(writer)?;
        self.entity_location.write(writer)?;
        self.entity_orientation.write(writer)?;
        writer.write_u32(self.entity_appearance)?;
        self.variable_parameters.write_elements(writer)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        self.entity_id.read(reader)?;
        self.padding = reader.read_u8()?;
        let count = reader.read_u8()? as usize;
        self.entity_linear_velocity.read(reader)?;
        self.entity_location.read(reader)?;
        self.entity_orientation.read(reader)?;
        self.entity_appearance = reader.read_u32()?;
        self.variable_parameters.read_elements(reader, count)
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("entity_id", self.entity_id)?;
        out.record("entity_linear_velocity", &self.entity_linear_velocity)?;
        out.record("entity_location", &self.entity_location)?;
        out.record("entity_orientation", &self.entity_orientation)?;
        out.field("entity_appearance", format_args!("{:#010x}", self.entity_appearance))?;
        out.list("variable_parameters", self.variable_parameters.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ByteOrder;
    use crate::record::{decode_record, encode_record, ArticulatedPart};

    #[test]
    fn test_fixed_sizes() {
        assert_eq!(EntityStatePduV6::new().marshalled_size(), 144);
        assert_eq!(EntityStatePduV7::new().marshalled_size(), 144);
        assert_eq!(
            EntityStateUpdatePdu::new(ProtocolVersion::Dis2012).marshalled_size(),
            72
        );
    }

    #[test]
    fn test_header_version_follows_parameter_type() {
        assert_eq!(EntityStatePduV6::new().header.protocol_version, 6);
        assert_eq!(EntityStatePduV7::new().header.protocol_version, 7);
        assert_eq!(EntityStatePduV7::new().header.pdu_type, 1);
    }

    #[test]
    fn test_count_byte_placement() {
        let mut pdu = EntityStatePduV7::new();
        pdu.force_id = 2;
        pdu.parameters.push(VariableParameter::ArticulatedPart(ArticulatedPart {
            parameter_type: 4107,
            parameter_value: 1.5,
            ..Default::default()
        }));
        pdu.stamp_length().unwrap();

        let bytes = encode_record(&pdu, ByteOrder::Big).unwrap();
        assert_eq!(bytes.len(), 160);
        assert_eq!(&bytes[18..20], &[2, 1]);
        assert_eq!(&bytes[8..10], &[0, 160]);

        let mut reader = Reader::new(bytes, ByteOrder::Big);
        let decoded: EntityStatePduV7 = decode_record(&mut reader).unwrap();
        assert_eq!(decoded, pdu);
    }

    #[test]
    fn test_too_many_parameters() {
        let mut pdu = EntityStatePduV6::new();
        for _ in 0..256 {
            pdu.parameters.push(ArticulationParameter::default());
        }
        let err = encode_record(&pdu, ByteOrder::Big).unwrap_err();
        assert!(matches!(err, CodecError::EncodeError { .. }));
    }
}
