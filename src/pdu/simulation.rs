// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Simulation management PDUs and the reliable Set Record PDU.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::header::{family, PduHeader};
use super::types::PduType;
use crate::core::Result;
use crate::record::{
    ClockTime, Describer, EntityId, FixedDatum, Record, RecordSpecificationElement,
    VariableDatum, VariableRecordList,
};
use crate::stream::{Reader, Writer};

/// Originating and receiving entity ids that open every management PDU.
const ROUTING_SIZE: usize = 2 * EntityId::SIZE;

fn write_routing(writer: &mut Writer, originating: &EntityId, receiving: &EntityId) -> Result<()> {
    originating.write(writer)?;
    receiving.write(writer)
}

fn read_routing(
    reader: &mut Reader,
    originating: &mut EntityId,
    receiving: &mut EntityId,
) -> Result<()> {
    originating.read(reader)?;
    receiving.read(reader)
}

// =============================================================================
// Create / Remove Entity
// =============================================================================

/// Requests creation of a new entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateEntityPdu {
    pub header: PduHeader,
    pub originating_id: EntityId,
    pub receiving_id: EntityId,
    pub request_id: u32,
}

impl_pdu!(CreateEntityPdu, PduType::CreateEntity, family::SIMULATION_MANAGEMENT);

impl Record for CreateEntityPdu {
    fn marshalled_size(&self) -> usize {
        PduHeader::SIZE + ROUTING_SIZE + 4
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        self.header.write(writer)?;
        write_routing(writer, &self.originating_id, &self.receiving_id)?;
        writer.write_u32(self.request_id)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        read_routing(reader, &mut self.originating_id, &mut self.receiving_id)?;
        self.request_id = reader.read_u32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("originating_id", self.originating_id)?;
        out.field("receiving_id", self.receiving_id)?;
        out.field("request_id", self.request_id)
    }
}

/// Requests removal of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoveEntityPdu {
    pub header: PduHeader,
    pub originating_id: EntityId,
    pub receiving_id: EntityId,
    pub request_id: u32,
}

impl_pdu!(RemoveEntityPdu, PduType::RemoveEntity, family::SIMULATION_MANAGEMENT);

impl Record for RemoveEntityPdu {
    fn marshalled_size(&self) -> usize {
        PduHeader::SIZE + ROUTING_SIZE + 4
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        self.header.write(writer)?;
        write_routing(writer, &self.originating_id, &self.receiving_id)?;
        writer.write_u32(self.request_id)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        read_routing(reader, &mut self.originating_id, &mut self.receiving_id)?;
        self.request_id = reader.read_u32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("originating_id", self.originating_id)?;
        out.field("receiving_id", self.receiving_id)?;
        out.field("request_id", self.request_id)
    }
}

// =============================================================================
// Start/Resume and Stop/Freeze
// =============================================================================

/// Starts or resumes an exercise at the given times.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartResumePdu {
    pub header: PduHeader,
    pub originating_id: EntityId,
    pub receiving_id: EntityId,
    pub real_world_time: ClockTime,
    pub simulation_time: ClockTime,
    pub request_id: u32,
}

impl_pdu!(StartResumePdu, PduType::StartResume, family::SIMULATION_MANAGEMENT);

impl Record for StartResumePdu {
    fn marshalled_size(&self) -> usize {
        PduHeader::SIZE + ROUTING_SIZE + 2 * ClockTime::SIZE + 4
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        self.header.write(writer)?;
        write_routing(writer, &self.originating_id, &self.receiving_id)?;
        self.real_world_time.write(writer)?;
        self.simulation_time.write(writer)?;
        writer.write_u32(self.request_id)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        read_routing(reader, &mut self.originating_id, &mut self.receiving_id)?;
        self.real_world_time.read(reader)?;
        self.simulation_time.read(reader)?;
        self.request_id = reader.read_u32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("originating_id", self.originating_id)?;
        out.field("receiving_id", self.receiving_id)?;
        out.record("real_world_time", &self.real_world_time)?;
        out.record("simulation_time", &self.simulation_time)?;
        out.field("request_id", self.request_id)
    }
}

/// Stops or freezes an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StopFreezePdu {
    pub header: PduHeader,
    pub originating_id: EntityId,
    pub receiving_id: EntityId,
    pub real_world_time: ClockTime,
    pub reason: u8,
    pub frozen_behavior: u8,
    pub padding: i16,
    pub request_id: u32,
}

impl_pdu!(StopFreezePdu, PduType::StopFreeze, family::SIMULATION_MANAGEMENT);

impl Record for StopFreezePdu {
    fn marshalled_size(&self) -> usize {
        PduHeader::SIZE + ROUTING_SIZE + ClockTime::SIZE + 1 + 1 + 2 + 4
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        self.header.write(writer)?;
        write_routing(writer, &self.originating_id, &self.receiving_id)?;
        self.real_world_time.write(writer)?;
        writer.write_u8(self.reason)?;
        writer.write_u8(self.frozen_behavior)?;
        writer.write_i16(self.padding)?;
        writer.write_u32(self.request_id)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        read_routing(reader, &mut self.originating_id, &mut self.receiving_id)?;
        self.real_world_time.read(reader)?;
        self.reason = reader.read_u8()?;
        self.frozen_behavior = reader.read_u8()?;
        self.padding = reader.read_i16()?;
        self.request_id = reader.read_u32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("originating_id", self.originating_id)?;
        out.field("receiving_id", self.receiving_id)?;
        out.record("real_world_time", &self.real_world_time)?;
        out.field("reason", self.reason)?;
        out.field("frozen_behavior", self.frozen_behavior)?;
        out.field("request_id", self.request_id)
    }
}

// =============================================================================
// Acknowledge
// =============================================================================

/// Acknowledges receipt of a management request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcknowledgePdu {
    pub header: PduHeader,
    pub originating_id: EntityId,
    pub receiving_id: EntityId,
    /// Which request is acknowledged (create entity, remove entity, ...)
    pub acknowledge_flag: u16,
    /// Whether the request was able to comply
    pub response_flag: u16,
    pub request_id: u32,
}

impl_pdu!(AcknowledgePdu, PduType::Acknowledge, family::SIMULATION_MANAGEMENT);

impl Record for AcknowledgePdu {
    fn marshalled_size(&self) -> usize {
        PduHeader::SIZE + ROUTING_SIZE + 2 + 2 + 4
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        self.header.write(writer)?;
        write_routing(writer, &self.originating_id, &self.receiving_id)?;
        writer.write_u16(self.acknowledge_flag)?;
        writer.write_u16(self.response_flag)?;
        writer.write_u32(self.request_id)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        read_routing(reader, &mut self.originating_id, &mut self.receiving_id)?;
        self.acknowledge_flag = reader.read_u16()?;
        self.response_flag = reader.read_u16()?;
        self.request_id = reader.read_u32()?;
        Ok(())
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("originating_id", self.originating_id)?;
        out.field("receiving_id", self.receiving_id)?;
        out.field("acknowledge_flag", self.acknowledge_flag)?;
        out.field("response_flag", self.response_flag)?;
        out.field("request_id", self.request_id)
    }
}

// =============================================================================
// Comment
// =============================================================================

/// Free-form datums sent between simulations.
///
/// Both counts precede both datum lists on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommentPdu {
    pub header: PduHeader,
    pub originating_id: EntityId,
    pub receiving_id: EntityId,
    pub fixed_datums: VariableRecordList<FixedDatum>,
    pub variable_datums: VariableRecordList<VariableDatum>,
}

impl_pdu!(CommentPdu, PduType::Comment, family::SIMULATION_MANAGEMENT);

impl Record for CommentPdu {
    fn marshalled_size(&self) -> usize {
        PduHeader::SIZE
            + ROUTING_SIZE
            + 8
            + self.fixed_datums.elements_size()
            + self.variable_datums.elements_size()
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        self.header.write(writer)?;
        write_routing(writer, &self.originating_id, &self.receiving_id)?;
        writer.write_u32(self.fixed_datums.count()?)?;
        writer.write_u32(self.variable_datums.count()?)?;
        self.fixed_datums.write_elements(writer)?;
        self.variable_datums.write_elements(writer)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        read_routing(reader, &mut self.originating_id, &mut self.receiving_id)?;
        let fixed = reader.read_u32()? as usize;
        let variable = reader.read_u32()? as usize;
        self.fixed_datums.read_elements(reader, fixed)?;
        self.variable_datums.read_elements(reader, variable)
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("originating_id", self.originating_id)?;
        out.field("receiving_id", self.receiving_id)?;
        out.list("fixed_datums", self.fixed_datums.as_slice())?;
        out.list("variable_datums", self.variable_datums.as_slice())
    }
}

// =============================================================================
// Set Record-R
// =============================================================================

/// Sets record values reliably (DIS 2012 only).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetRecordReliablePdu {
    pub header: PduHeader,
    pub originating_id: EntityId,
    pub receiving_id: EntityId,
    pub request_id: u32,
    pub required_reliability_service: u8,
    pub record_sets: VariableRecordList<RecordSpecificationElement>,
}

impl_pdu!(
    SetRecordReliablePdu,
    PduType::SetRecordR,
    family::SIMULATION_MANAGEMENT_RELIABLE
);

impl Record for SetRecordReliablePdu {
    fn marshalled_size(&self) -> usize {
        PduHeader::SIZE + ROUTING_SIZE + 4 + 1 + 2 + 1 + self.record_sets.marshalled_size()
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        self.header.write(writer)?;
        write_routing(writer, &self.originating_id, &self.receiving_id)?;
        writer.write_u32(self.request_id)?;
        writer.write_u8(self.required_reliability_service)?;
        writer.write_padding(3)?;
        self.record_sets.write(writer)
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        self.header.read(reader)?;
        read_routing(reader, &mut self.originating_id, &mut self.receiving_id)?;
        self.request_id = reader.read_u32()?;
        self.required_reliability_service = reader.read_u8()?;
        reader.skip(3)?;
        self.record_sets.read(reader)
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        out.record("header", &self.header)?;
        out.field("originating_id", self.originating_id)?;
        out.field("receiving_id", self.receiving_id)?;
        out.field("request_id", self.request_id)?;
        out.field(
            "required_reliability_service",
            self.required_reliability_service,
        )?;
        out.list("record_sets", self.record_sets.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ByteOrder;
    use crate::pdu::{PduRecord, ProtocolVersion};
    use crate::record::{decode_record, encode_record};

    #[test]
    fn test_fixed_sizes() {
        let v = ProtocolVersion::Dis2012;
        assert_eq!(CreateEntityPdu::new(v).marshalled_size(), 28);
        assert_eq!(RemoveEntityPdu::new(v).marshalled_size(), 28);
        assert_eq!(StartResumePdu::new(v).marshalled_size(), 44);
        assert_eq!(StopFreezePdu::new(v).marshalled_size(), 40);
        assert_eq!(AcknowledgePdu::new(v).marshalled_size(), 32);
        assert_eq!(CommentPdu::new(v).marshalled_size(), 32);
        assert_eq!(SetRecordReliablePdu::new(v).marshalled_size(), 36);
    }

    #[test]
    fn test_comment_counts_precede_lists() {
        let mut pdu = CommentPdu::new(ProtocolVersion::Dis1998);
        pdu.fixed_datums.push(FixedDatum::new(1, 2));
        pdu.variable_datums.push(VariableDatum::new(3, b"abc".to_vec()));
        pdu.variable_datums.push(VariableDatum::new(4, Vec::new()));
        pdu.stamp_length().unwrap();

        let bytes = encode_record(&pdu, ByteOrder::Big).unwrap();
        assert_eq!(bytes.len(), 32 + 8 + 16 + 8);
        assert_eq!(&bytes[24..32], &[0, 0, 0, 1, 0, 0, 0, 2]);
        assert_eq!(&bytes[32..40], &[0, 0, 0, 1, 0, 0, 0, 2]);

        let mut reader = Reader::new(bytes, ByteOrder::Big);
        let decoded: CommentPdu = decode_record(&mut reader).unwrap();
        assert_eq!(decoded, pdu);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_stop_freeze_layout() {
        let mut pdu = StopFreezePdu::new(ProtocolVersion::Dis1998);
        pdu.reason = 2;
        pdu.frozen_behavior = 1;
        pdu.request_id = 9;
        let bytes = encode_record(&pdu, ByteOrder::Big).unwrap();
        assert_eq!(&bytes[32..40], &[2, 1, 0, 0, 0, 0, 0, 9]);
    }

    #[test]
    fn test_list_carrying_pdus_are_eq() {
        fn assert_eq_impl<T: Eq>() {}
        assert_eq_impl::<CommentPdu>();
        assert_eq_impl::<SetRecordReliablePdu>();

        let v = ProtocolVersion::Dis2012;
        let mut comment = CommentPdu::new(v);
        comment.variable_datums.push(VariableDatum {
            datum_id: 1,
            value: b"hi".to_vec(),
        });
        assert_eq!(comment.clone(), comment);
        assert_ne!(comment, CommentPdu::new(v));
    }
}
