// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Sixteen-byte entity parameter records.
//!
//! DIS 1998 carries uniform articulation parameters. DIS 2012 replaces them
//! with variable parameters whose layout is selected by the leading record
//! type byte. Both occupy exactly 16 bytes so the enclosing PDU size is
//! `16 * count` either way. Field names follow IEEE 1278.1.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::{EntityId, EntityType};
use super::{Describer, Record};
use crate::core::{CodecError, Result};
use crate::stream::{Reader, Writer};

/// Encoded size of every parameter record.
pub const PARAMETER_SIZE: usize = 16;

/// Low bits of an articulated part's parameter type holding the type metric.
pub const TYPE_METRIC_BITS: u32 = 5;

const TYPE_METRIC_MASK: u32 = (1 << TYPE_METRIC_BITS) - 1;

/// Pack an articulated part type class and type metric into a parameter type.
///
/// The metric keeps only its low five bits.
pub fn articulation_parameter_type(type_class: u32, type_metric: u32) -> u32 {
    (type_class << TYPE_METRIC_BITS) | (type_metric & TYPE_METRIC_MASK)
}

/// Type metric (position, azimuth, rate and so on) of a parameter type.
pub fn articulation_type_metric(parameter_type: u32) -> u32 {
    parameter_type & TYPE_METRIC_MASK
}

/// Type class (which part is articulated) of a parameter type.
pub fn articulation_type_class(parameter_type: u32) -> u32 {
    parameter_type >> TYPE_METRIC_BITS
}

// =============================================================================
// DIS 1998
// =============================================================================

/// Articulated or attached part of an entity (DIS 1998).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticulationParameter {
    /// 0 for articulated part, 1 for attached part
    pub parameter_type_designator: u8,
    /// Incremented whenever the parameter changes
    pub change_indicator: u8,
    /// Index of the parent part, 0 for the entity itself
    pub part_attached_to: u16,
    /// Type class and metric, see [`articulation_parameter_type`]
    pub parameter_type: u32,
    pub parameter_value: f64,
}

impl ArticulationParameter {
    pub fn type_class(&self) -> u32 {
        articulation_type_class(self.parameter_type)
    }

    pub fn type_metric(&self) -> u32 {
        articulation_type_metric(self.parameter_type)
    }

    pub fn set_parameter_type(&mut self, type_class: u32, type_metric: u32) {
        self.parameter_type = articulation_parameter_type(type_class, type_metric);
    }
}

impl Record for ArticulationParameter {
    fn marshalled_size(&self) -> usize {
        PARAMETER_SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u8(self.parameter_type_designator)?;
        writer.write_u8(self.change_indicator)?;
        writer.write_u16(self.part_attached_to)?;
        writer.write_u32(self.parameter_type)?;
        writer.write_f64(self.parameter_value)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.parameter_type_designator = reader.read_u8()?;
        self.change_indicator = reader.read_u8()?;
        self.part_attached_to = reader.read_u16()?;
        self.parameter_type = reader.read_u32()?;
        self.parameter_value = reader.read_f64()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("parameter_type_designator", self.parameter_type_designator)?;
        out.field("change_indicator", self.change_indicator)?;
        out.field("part_attached_to", self.part_attached_to)?;
        out.field("parameter_type", self.parameter_type)?;
        out.field("parameter_value", self.parameter_value)
    }
}

// =============================================================================
// DIS 2012
// =============================================================================

/// Articulated part variable parameter (record type 0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticulatedPart {
    pub change_indicator: u8,
    pub part_attached_to: u16,
    /// Type class and metric, see [`articulation_parameter_type`]
    pub parameter_type: u32,
    pub parameter_value: f32,
}

impl ArticulatedPart {
    pub fn type_class(&self) -> u32 {
        articulation_type_class(self.parameter_type)
    }

    pub fn type_metric(&self) -> u32 {
        articulation_type_metric(self.parameter_type)
    }

    pub fn set_parameter_type(&mut self, type_class: u32, type_metric: u32) {
        self.parameter_type = articulation_parameter_type(type_class, type_metric);
    }
}

/// Attached part variable parameter (record type 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttachedPart {
    /// 0 attached, 1 detached
    pub detached_indicator: u8,
    pub part_attached_to: u16,
    pub parameter_type: u32,
    pub attached_part_type: EntityType,
}

/// Separation variable parameter (record type 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeparationParameter {
    pub reason_for_separation: u8,
    pub pre_entity_indicator: u8,
    pub parent_entity_id: EntityId,
    /// Station name (high 16 bits) and number (low 16 bits)
    pub station_location: u32,
}

/// Entity type variable parameter (record type 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityTypeParameter {
    pub change_indicator: u8,
    pub entity_type: EntityType,
}

/// Entity association variable parameter (record type 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityAssociation {
    pub change_indicator: u8,
    pub association_status: u8,
    pub association_type: u8,
    pub entity_id: EntityId,
    pub own_station_location: u16,
    pub physical_connection_type: u8,
    pub group_member_type: u8,
    pub group_number: u16,
}

/// Variable parameter record (DIS 2012), tagged by its record type byte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableParameter {
    ArticulatedPart(ArticulatedPart),
    AttachedPart(AttachedPart),
    Separation(SeparationParameter),
    EntityType(EntityTypeParameter),
    EntityAssociation(EntityAssociation),
    /// Record type this codec does not interpret; the body is kept verbatim.
    ///
    /// Types 0 through 4 have typed variants and are rejected on encode.
    Other { record_type: u8, data: [u8; 15] },
}

impl Default for VariableParameter {
    fn default() -> Self {
        VariableParameter::ArticulatedPart(ArticulatedPart::default())
    }
}

impl VariableParameter {
    /// Record type codes with a typed layout.
    pub const ARTICULATED_PART: u8 = 0;
    pub const ATTACHED_PART: u8 = 1;
    pub const SEPARATION: u8 = 2;
    pub const ENTITY_TYPE: u8 = 3;
    pub const ENTITY_ASSOCIATION: u8 = 4;

    /// The leading record type byte.
    pub fn record_type(&self) -> u8 {
        match self {
            VariableParameter::ArticulatedPart(_) => Self::ARTICULATED_PART,
            VariableParameter::AttachedPart(_) => Self::ATTACHED_PART,
            VariableParameter::Separation(_) => Self::SEPARATION,
            VariableParameter::EntityType(_) => Self::ENTITY_TYPE,
            VariableParameter::EntityAssociation(_) => Self::ENTITY_ASSOCIATION,
            VariableParameter::Other { record_type, .. } => *record_type,
        }
    }
}

impl Record for VariableParameter {
    fn marshalled_size(&self) -> usize {
        PARAMETER_SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        if let VariableParameter::Other { record_type, .. } = self {
            if *record_type <= Self::ENTITY_ASSOCIATION {
                return Err(CodecError::encode(
                    "VariableParameter",
                    format!("record type {record_type} has a typed layout"),
                ));
            }
        }
        writer.write_u8(self.record_type())?;
        match self {
            VariableParameter::ArticulatedPart(p) => {
                writer.write_u8(p.change_indicator)?;
                writer.write_u16(p.part_attached_to)?;
                writer.write_u32(p.parameter_type)?;
                writer.write_f32(p.parameter_value)?;
                writer.write_padding(4)
            }
            VariableParameter::AttachedPart(p) => {
                writer.write_u8(p.detached_indicator)?;
                writer.write_u16(p.part_attached_to)?;
                writer.write_u32(p.parameter_type)?;
                p.attached_part_type.write(writer)
            }
            VariableParameter::Separation(p) => {
                writer.write_u8(p.reason_for_separation)?;
                writer.write_u8(p.pre_entity_indicator)?;
                writer.write_padding(1)?;
                p.parent_entity_id.write(writer)?;
                writer.write_padding(2)?;
                writer.write_u32(p.station_location)
            }
            VariableParameter::EntityType(p) => {
                writer.write_u8(p.change_indicator)?;
                p.entity_type.write(writer)?;
                writer.write_padding(6)
            }
            VariableParameter::EntityAssociation(p) => {
                writer.write_u8(p.change_indicator)?;
                writer.write_u8(p.association_status)?;
                writer.write_u8(p.association_type)?;
                p.entity_id.write(writer)?;
                writer.write_u16(p.own_station_location)?;
                writer.write_u8(p.physical_connection_type)?;
                writer.write_u8(p.group_member_type)?;
                writer.write_u16(p.group_number)
            }
            VariableParameter::Other { data, .. } => writer.write_bytes(data),
        }
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        let record_type = reader.read_u8()?;
        *self = match record_type {
            Self::ARTICULATED_PART => {
                let p = ArticulatedPart {
                    change_indicator: reader.read_u8()?,
                    part_attached_to: reader.read_u16()?,
                    parameter_type: reader.read_u32()?,
                    parameter_value: reader.read_f32()?,
                };
                reader.skip(4)?;
                VariableParameter::ArticulatedPart(p)
            }
            Self::ATTACHED_PART => {
                let mut p = AttachedPart {
                    detached_indicator: reader.read_u8()?,
                    part_attached_to: reader.read_u16()?,
                    parameter_type: reader.read_u32()?,
                    ..Default::default()
                };
                p.attached_part_type.read(reader)?;
                VariableParameter::AttachedPart(p)
            }
            Self::SEPARATION => {
                let mut p = SeparationParameter {
                    reason_for_separation: reader.read_u8()?,
                    pre_entity_indicator: reader.read_u8()?,
                    ..Default::default()
                };
                reader.skip(1)?;
                p.parent_entity_id.read(reader)?;
                reader.skip(2)?;
                p.station_location = reader.read_u32()?;
                VariableParameter::Separation(p)
            }
            Self::ENTITY_TYPE => {
                let mut p = EntityTypeParameter {
                    change_indicator: reader.read_u8()?,
                    ..Default::default()
                };
                p.entity_type.read(reader)?;
                reader.skip(6)?;
                VariableParameter::EntityType(p)
            }
            Self::ENTITY_ASSOCIATION => {
                let mut p = EntityAssociation {
                    change_indicator: reader.read_u8()?,
                    association_status: reader.read_u8()?,
                    association_type: reader.read_u8()?,
                    ..Default::default()
                };
                p.entity_id.read(reader)?;
                p.own_station_location = reader.read_u16()?;
                p.physical_connection_type = reader.read_u8()?;
                p.group_member_type = reader.read_u8()?;
                p.group_number = reader.read_u16()?;
                VariableParameter::EntityAssociation(p)
            }
            other => VariableParameter::Other {
                record_type: other,
                data: reader.read_array()?,
            },
        };
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.field("record_type", self.record_type())?;
        match self {
            VariableParameter::ArticulatedPart(p) => {
                out.field("change_indicator", p.change_indicator)?;
                out.field("part_attached_to", p.part_attached_to)?;
                out.field("parameter_type", p.parameter_type)?;
                out.field("parameter_value", p.parameter_value)
            }
            VariableParameter::AttachedPart(p) => {
                out.field("detached_indicator", p.detached_indicator)?;
                out.field("part_attached_to", p.part_attached_to)?;
                out.field("parameter_type", p.parameter_type)?;
                out.field("attached_part_type", p.attached_part_type)
            }
            VariableParameter::Separation(p) => {
                out.field("reason_for_separation", p.reason_for_separation)?;
                out.field("pre_entity_indicator", p.pre_entity_indicator)?;
                out.field("parent_entity_id", p.parent_entity_id)?;
                out.field("station_location", p.station_location)
            }
            VariableParameter::EntityType(p) => {
                out.field("change_indicator", p.change_indicator)?;
                out.field("entity_type", p.entity_type)
            }
            VariableParameter::EntityAssociation(p) => {
                out.field("change_indicator", p.change_indicator)?;
                out.field("association_status", p.association_status)?;
                out.field("association_type", p.association_type)?;
                out.field("entity_id", p.entity_id)?;
                out.field("own_station_location", p.own_station_location)?;
                out.field("physical_connection_type", p.physical_connection_type)?;
                out.field("group_member_type", p.group_member_type)?;
                out.field("group_number", p.group_number)
            }
            VariableParameter::Other { data, .. } => out.field("data", hex::encode(data)),
        }
    }
}
