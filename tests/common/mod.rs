// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use discodec::pdu::{
    AcknowledgePdu, CollisionElasticPdu, CollisionPdu, CommentPdu, CreateEntityPdu,
    EntityStatePduV6, EntityStatePduV7, EntityStateUpdatePdu, Pdu, PduFactory, PduHeader,
    ProtocolVersion, RemoveEntityPdu, SetRecordReliablePdu, StartResumePdu, StopFreezePdu,
};
use discodec::record::{
    ArticulatedPart, ArticulationParameter, AttachedPart, ClockTime, DeadReckoningParameters,
    EntityAssociation, EntityId, EntityMarking, EntityType, EntityTypeParameter, EulerAngles,
    EventId, FixedDatum, RecordSpecificationElement, SeparationParameter, VariableDatum,
    VariableParameter, Vector3Double, Vector3Float,
};
use discodec::{CodecError, PduRecord};

// ============================================================================
// Random Sources
// ============================================================================

/// Deterministic generator so failures reproduce.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Finite float in a range that survives a round trip bit-for-bit.
pub fn float(rng: &mut StdRng) -> f32 {
    rng.gen_range(-1.0e6f32..1.0e6)
}

pub fn double(rng: &mut StdRng) -> f64 {
    rng.gen_range(-1.0e9f64..1.0e9)
}

// ============================================================================
// Record Builders
// ============================================================================

pub fn entity_id(rng: &mut StdRng) -> EntityId {
    EntityId::new(rng.gen(), rng.gen(), rng.gen())
}

pub fn event_id(rng: &mut StdRng) -> EventId {
    EventId::new(rng.gen(), rng.gen(), rng.gen())
}

pub fn entity_type(rng: &mut StdRng) -> EntityType {
    EntityType {
        kind: rng.gen(),
        domain: rng.gen(),
        country: rng.gen(),
        category: rng.gen(),
        subcategory: rng.gen(),
        specific: rng.gen(),
        extra: rng.gen(),
    }
}

pub fn vector3f(rng: &mut StdRng) -> Vector3Float {
    Vector3Float::new(float(rng), float(rng), float(rng))
}

pub fn vector3d(rng: &mut StdRng) -> Vector3Double {
    Vector3Double::new(double(rng), double(rng), double(rng))
}

pub fn euler(rng: &mut StdRng) -> EulerAngles {
    EulerAngles::new(float(rng), float(rng), float(rng))
}

pub fn clock_time(rng: &mut StdRng) -> ClockTime {
    ClockTime::new(rng.gen(), rng.gen())
}

pub fn dead_reckoning(rng: &mut StdRng) -> DeadReckoningParameters {
    DeadReckoningParameters {
        algorithm: rng.gen(),
        other_parameters: rng.gen(),
        linear_acceleration: vector3f(rng),
        angular_velocity: vector3f(rng),
    }
}

pub fn marking(rng: &mut StdRng) -> EntityMarking {
    EntityMarking {
        character_set: rng.gen(),
        characters: rng.gen(),
    }
}

pub fn fixed_datum(rng: &mut StdRng) -> FixedDatum {
    FixedDatum::new(rng.gen(), rng.gen())
}

pub fn variable_datum(rng: &mut StdRng) -> VariableDatum {
    let len = rng.gen_range(0..24);
    let value: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
    VariableDatum::new(rng.gen(), value)
}

pub fn record_set(rng: &mut StdRng) -> RecordSpecificationElement {
    // Whole and partial bytes per record.
    let record_length = [8u16, 12, 32, 40][rng.gen_range(0..4)];
    let bytes = (record_length as usize).div_ceil(8);
    let count = rng.gen_range(0..5);
    RecordSpecificationElement {
        record_id: rng.gen(),
        record_set_serial_number: rng.gen(),
        record_length,
        records: (0..count)
            .map(|_| (0..bytes).map(|_| rng.gen()).collect())
            .collect(),
    }
}

pub fn articulation(rng: &mut StdRng) -> ArticulationParameter {
    ArticulationParameter {
        parameter_type_designator: rng.gen_range(0..2),
        change_indicator: rng.gen(),
        part_attached_to: rng.gen(),
        parameter_type: rng.gen(),
        parameter_value: double(rng),
    }
}

pub fn variable_parameter(rng: &mut StdRng) -> VariableParameter {
    match rng.gen_range(0..6) {
        0 => VariableParameter::ArticulatedPart(ArticulatedPart {
            change_indicator: rng.gen(),
            part_attached_to: rng.gen(),
            parameter_type: rng.gen(),
            parameter_value: float(rng),
        }),
        1 => VariableParameter::AttachedPart(AttachedPart {
            detached_indicator: rng.gen(),
            part_attached_to: rng.gen(),
            parameter_type: rng.gen(),
            attached_part_type: entity_type(rng),
        }),
        2 => VariableParameter::Separation(SeparationParameter {
            reason_for_separation: rng.gen(),
            pre_entity_indicator: rng.gen(),
            parent_entity_id: entity_id(rng),
            station_location: rng.gen(),
        }),
        3 => VariableParameter::EntityType(EntityTypeParameter {
            change_indicator: rng.gen(),
            entity_type: entity_type(rng),
        }),
        4 => VariableParameter::EntityAssociation(EntityAssociation {
            change_indicator: rng.gen(),
            association_status: rng.gen(),
            association_type: rng.gen(),
            entity_id: entity_id(rng),
            own_station_location: rng.gen(),
            physical_connection_type: rng.gen(),
            group_member_type: rng.gen(),
            group_number: rng.gen(),
        }),
        _ => VariableParameter::Other {
            record_type: rng.gen_range(5..=u8::MAX),
            data: rng.gen(),
        },
    }
}

// ============================================================================
// PDU Builders
// ============================================================================

/// Fill the header fields that are not part of the PDU identity.
fn randomize_header(header: &mut PduHeader, rng: &mut StdRng) {
    header.exercise_id = rng.gen();
    header.timestamp = rng.gen::<u32>().into();
    header.pdu_status = rng.gen();
    header.padding = rng.gen();
}

/// A randomly populated PDU of every implemented (type, version) pair.
///
/// `elements` controls how many entries each variable list receives.
pub fn every_pdu(rng: &mut StdRng, elements: usize) -> Vec<Pdu> {
    let mut pdus = Vec::new();
    for version in ProtocolVersion::ALL {
        for pdu_type in PduFactory::supported_types(version) {
            let Ok(mut pdu) = PduFactory::create(pdu_type.to_int(), version) else {
                continue;
            };
            fill(&mut pdu, rng, elements);
            pdus.push(pdu);
        }
    }
    pdus
}

/// Populate every field of a factory-made PDU.
pub fn fill(pdu: &mut Pdu, rng: &mut StdRng, elements: usize) {
    randomize_header(pdu.header_mut(), rng);
    match pdu {
        Pdu::EntityStateV6(p) => fill_entity_state_v6(p, rng, elements),
        Pdu::EntityStateV7(p) => fill_entity_state_v7(p, rng, elements),
        Pdu::Collision(p) => fill_collision(p, rng),
        Pdu::CreateEntity(p) => fill_create(p, rng),
        Pdu::RemoveEntity(p) => fill_remove(p, rng),
        Pdu::StartResume(p) => fill_start(p, rng),
        Pdu::StopFreeze(p) => fill_stop(p, rng),
        Pdu::Acknowledge(p) => fill_ack(p, rng),
        Pdu::Comment(p) => fill_comment(p, rng, elements),
        Pdu::SetRecordReliable(p) => fill_set_record(p, rng, elements),
        Pdu::CollisionElastic(p) => fill_collision_elastic(p, rng),
        Pdu::EntityStateUpdate(p) => fill_entity_state_update(p, rng, elements),
    }
}

fn fill_entity_state_v6(p: &mut EntityStatePduV6, rng: &mut StdRng, elements: usize) {
    p.entity_id = entity_id(rng);
    p.force_id = rng.gen();
    p.entity_type = entity_type(rng);
    p.alternative_entity_type = entity_type(rng);
    p.entity_linear_velocity = vector3f(rng);
    p.entity_location = vector3d(rng);
    p.entity_orientation = euler(rng);
    p.entity_appearance = rng.gen();
    p.dead_reckoning_parameters = dead_reckoning(rng);
    p.marking = marking(rng);
    p.capabilities = rng.gen();
    p.parameters = (0..elements).map(|_| articulation(rng)).collect();
}

fn fill_entity_state_v7(p: &mut EntityStatePduV7, rng: &mut StdRng, elements: usize) {
    p.entity_id = entity_id(rng);
    p.force_id = rng.gen();
    p.entity_type = entity_type(rng);
    p.alternative_entity_type = entity_type(rng);
    p.entity_linear_velocity = vector3f(rng);
    p.entity_location = vector3d(rng);
    p.entity_orientation = euler(rng);
    p.entity_appearance = rng.gen();
    p.dead_reckoning_parameters = dead_reckoning(rng);
    p.marking = marking(rng);
    p.capabilities = rng.gen();
    p.parameters = (0..elements).map(|_| variable_parameter(rng)).collect();
}

fn fill_entity_state_update(p: &mut EntityStateUpdatePdu, rng: &mut StdRng, elements: usize) {
    p.entity_id = entity_id(rng);
    p.padding = rng.gen();
    p.entity_linear_velocity = vector3f(rng);
    p.entity_location = vector3d(rng);
    p.entity_orientation = euler(rng);
    p.entity_appearance = rng.gen();
    p.variable_parameters = (0..elements).map(|_| variable_parameter(rng)).collect();
}

fn fill_collision(p: &mut CollisionPdu, rng: &mut StdRng) {
    p.issuing_entity_id = entity_id(rng);
    p.colliding_entity_id = entity_id(rng);
    p.event_id = event_id(rng);
    p.collision_type = rng.gen();
    p.padding = rng.gen();
    p.velocity = vector3f(rng);
    p.mass = float(rng);
    p.location = vector3f(rng);
}

fn fill_collision_elastic(p: &mut CollisionElasticPdu, rng: &mut StdRng) {
    p.issuing_entity_id = entity_id(rng);
    p.colliding_entity_id = entity_id(rng);
    p.collision_event_id = event_id(rng);
    p.padding = rng.gen();
    p.contact_velocity = vector3f(rng);
    p.mass = float(rng);
    p.location_of_impact = vector3f(rng);
    p.collision_intermediate_result_xx = float(rng);
    p.collision_intermediate_result_xy = float(rng);
    p.collision_intermediate_result_xz = float(rng);
    p.collision_intermediate_result_yy = float(rng);
    p.collision_intermediate_result_yz = float(rng);
    p.collision_intermediate_result_zz = float(rng);
    p.unit_surface_normal = vector3f(rng);
    p.coefficient_of_restitution = float(rng);
}

fn fill_create(p: &mut CreateEntityPdu, rng: &mut StdRng) {
    p.originating_id = entity_id(rng);
    p.receiving_id = entity_id(rng);
    p.request_id = rng.gen();
}

fn fill_remove(p: &mut RemoveEntityPdu, rng: &mut StdRng) {
    p.originating_id = entity_id(rng);
    p.receiving_id = entity_id(rng);
    p.request_id = rng.gen();
}

fn fill_start(p: &mut StartResumePdu, rng: &mut StdRng) {
    p.originating_id = entity_id(rng);
    p.receiving_id = entity_id(rng);
    p.real_world_time = clock_time(rng);
    p.simulation_time = clock_time(rng);
    p.request_id = rng.gen();
}

fn fill_stop(p: &mut StopFreezePdu, rng: &mut StdRng) {
    p.originating_id = entity_id(rng);
    p.receiving_id = entity_id(rng);
    p.real_world_time = clock_time(rng);
    p.reason = rng.gen();
    p.frozen_behavior = rng.gen();
    p.padding = rng.gen();
    p.request_id = rng.gen();
}

fn fill_ack(p: &mut AcknowledgePdu, rng: &mut StdRng) {
    p.originating_id = entity_id(rng);
    p.receiving_id = entity_id(rng);
    p.acknowledge_flag = rng.gen();
    p.response_flag = rng.gen();
    p.request_id = rng.gen();
}

fn fill_comment(p: &mut CommentPdu, rng: &mut StdRng, elements: usize) {
    p.originating_id = entity_id(rng);
    p.receiving_id = entity_id(rng);
    p.fixed_datums = (0..elements).map(|_| fixed_datum(rng)).collect();
    p.variable_datums = (0..elements).map(|_| variable_datum(rng)).collect();
}

fn fill_set_record(p: &mut SetRecordReliablePdu, rng: &mut StdRng, elements: usize) {
    p.originating_id = entity_id(rng);
    p.receiving_id = entity_id(rng);
    p.request_id = rng.gen();
    p.required_reliability_service = rng.gen();
    p.record_sets = (0..elements).map(|_| record_set(rng)).collect();
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert that an error is a truncation.
pub fn assert_truncated(error: &CodecError, context: &str) {
    assert!(
        matches!(error, CodecError::TruncatedInput { .. }),
        "{context}: expected TruncatedInput, got {error:?}"
    );
}
