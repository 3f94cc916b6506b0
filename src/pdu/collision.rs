// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Collision PDUs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::header::{family, PduHeader};
use super::types::PduType;
use crate::core::Result;
use crate::record::{Describer, EntityId, EventId, Record, Vector3Float};
use crate::stream::{Reader, Writer};

/// Issuing entity, colliding entity and event id.
const PARTIES_SIZE: usize = 2 * EntityId::SIZE + EventId::SIZE;

/// Reports a collision between two entities, or an entity and terrain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionPdu {
    pub header: PduHeader,
    pub issuing_entity_id: EntityId,
    pub colliding_entity_id: EntityId,
    pub event_id: EventId,
    /// 0 inelastic, 1 elastic
    pub collision_type: u8,
    pub padding: u8,
    pub velocity: Vector3Float,
    pub mass: f32,
    /// Point of impact in the issuing entity's coordinates
    pub location: Vector3Float,
}

impl_pdu!(CollisionPdu, PduType::Collision, family::ENTITY_INTERACTION);

impl Record for CollisionPdu {
    fn marshalled_size(&self) -> usize {
        PduHeader::SIZE + PARTIES_SIZE + 1 + 1 + Vector3Float::SIZE + 4 + Vector3Float::SIZE
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        self.header.write(writer)?;
        self.issuing_entity_id.write(writer)?;
        self.colliding_entity_id.write(writer)?;
        self.event_id.write(writer)?;
        writer.write_u8(self.collision_type)?;
        writer.write_u8(self.padding)?;
        self.velocity.write(writer)?;
        writer.write_f32(self.mass)?;
        self.location.write(writer)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        self.issuing_entity_id.read(reader)?;
        self.colliding_entity_id.read(reader)?;
        self.event_id.read(reader)?;
        self.collision_type = reader.read_u8()?;
        self.padding = reader.read_u8()?;
        self.velocity.read(reader)?;
        self.mass = reader.read_f32()?;
        self.location.read(reader)
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("issuing_entity_id", self.issuing_entity_id)?;
        out.field("colliding_entity_id", self.colliding_entity_id)?;
        out.record("event_id", &self.event_id)?;
        out.field("collision_type", self.collision_type)?;
        out.record("velocity", &self.velocity)?;
        out.field("mass", self.mass)?;
        out.record("location", &self.location)
    }
}

/// Elastic collision with the full impulse computation inputs (DIS 2012).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionElasticPdu {
    pub header: PduHeader,
    pub issuing_entity_id: EntityId,
    pub colliding_entity_id: EntityId,
    pub collision_event_id: EventId,
    pub padding: i16,
    pub contact_velocity: Vector3Float,
    pub mass: f32,
    pub location_of_impact: Vector3Float,
    pub collision_intermediate_result_xx: f32,
    pub collision_intermediate_result_xy: f32,
    pub collision_intermediate_result_xz: f32,
    pub collision_intermediate_result_yy: f32,
    pub collision_intermediate_result_yz: f32,
    pub collision_intermediate_result_zz: f32,
    pub unit_surface_normal: Vector3Float,
    pub coefficient_of_restitution: f32,
}

impl_pdu!(
    CollisionElasticPdu,
    PduType::CollisionElastic,
    family::ENTITY_INTERACTION
);

impl CollisionElasticPdu {
    fn intermediate_results(&self) -> [f32; 6] {
        [
            self.collision_intermediate_result_xx,
            self.collision_intermediate_result_xy,
            self.collision_intermediate_result_xz,
            self.collision_intermediate_result_yy,
            self.collision_intermediate_result_yz,
            self.collision_intermediate_result_zz,
        ]
    }
}

impl Record for CollisionElasticPdu {
    fn marshalled_size(&self) -> usize {
        PduHeader::SIZE
            + PARTIES_SIZE
            + 2
            + Vector3Float::SIZE
            + 4
            + Vector3Float::SIZE
            + 6 * 4
            + Vector3Float::SIZE
            + 4
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        self.header.write(writer)?;
        self.issuing_entity_id.write(writer)?;
        self.colliding_entity_id.write(writer)?;
        self.collision_event_id.write(writer)?;
        writer.write_i16(self.padding)?;
        self.contact_velocity.write(writer)?;
        writer.write_f32(self.mass)?;
        self.location_of_impact.write(writer)?;
        for value in self.intermediate_results() {
            writer.write_f32(value)?;
        }
        self.unit_surface_normal.write(writer)?;
        writer.write_f32(self.coefficient_of_restitution)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        self.issuing_entity_id.read(reader)?;
        self.colliding_entity_id.read(reader)?;
        self.collision_event_id.read(reader)?;
        self.padding = reader.read_i16()?;
        self.contact_velocity.read(reader)?;
        self.mass = reader.read_f32()?;
        self.location_of_impact.read(reader)?;
        self.collision_intermediate_result_xx = reader.read_f32()?;
        self.collision_intermediate_result_xy = reader.read_f32()?;
        self.collision_intermediate_result_xz = reader.read_f32()?;
        self.collision_intermediate_result_yy = reader.read_f32()?;
        self.collision_intermediate_result_yz = reader.read_f32()?;
        self.collision_intermediate_result_zz = reader.read_f32()?;
        self.unit_surface_normal.read(reader)?;
        self.coefficient_of_restitution = reader.read_f32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("issuing_entity_id", self.issuing_entity_id)?;
        out.field("colliding_entity_id", self.colliding_entity_id)?;
        out.record("collision_event_id", &self.collision_event_id)?;
        out.record("contact_velocity", &self.contact_velocity)?;
        out.field("mass", self.mass)?;
        out.record("location_of_impact", &self.location_of_impact)?;
        let [xx, xy, xz, yy, yz, zz] = self.intermediate_results();
        out.field(
            "intermediate_results",
            format_args!("xx={xx} xy={xy} xz={xz} yy={yy} yz={yz} zz={zz}"),
        )?;
        out.record("unit_surface_normal", &self.unit_surface_normal)?;
        out.field("coefficient_of_restitution", self.coefficient_of_restitution)
    }
}
