// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dispatch from `(type code, protocol version)` to a zero-valued PDU.
//!
//! Each protocol version has its own static table. The same code can map to
//! a different shape per version, and some codes only exist in DIS 2012, so
//! lookups always go through the pair.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use discodec::pdu::{Pdu, PduFactory, ProtocolVersion};
//!
//! let pdu = PduFactory::create(15, ProtocolVersion::Dis2012)?;
//! assert!(matches!(pdu, Pdu::Acknowledge(_)));
//!
//! let err = PduFactory::create(66, ProtocolVersion::Dis1998).unwrap_err();
//! assert!(err.is_recoverable());
//! # Ok(())
//! # }
//! ```

use tracing::debug;

use super::collision::{CollisionElasticPdu, CollisionPdu};
use super::entity::{EntityStatePduV6, EntityStatePduV7, EntityStateUpdatePdu};
use super::header::ProtocolVersion;
use super::simulation::{
    AcknowledgePdu, CommentPdu, CreateEntityPdu, RemoveEntityPdu, SetRecordReliablePdu,
    StartResumePdu, StopFreezePdu,
};
use super::types::PduType;
use super::Pdu;
use crate::core::{CodecError, Result};

/// Builds a zero-valued PDU.
type Constructor = fn() -> Pdu;

const V6: ProtocolVersion = ProtocolVersion::Dis1998;
const V7: ProtocolVersion = ProtocolVersion::Dis2012;

static DIS1998_TABLE: &[(PduType, Constructor)] = &[
    (PduType::EntityState, || Pdu::EntityStateV6(EntityStatePduV6::new())),
    (PduType::Collision, || Pdu::Collision(CollisionPdu::new(V6))),
    (PduType::CreateEntity, || Pdu::CreateEntity(CreateEntityPdu::new(V6))),
    (PduType::RemoveEntity, || Pdu::RemoveEntity(RemoveEntityPdu::new(V6))),
    (PduType::StartResume, || Pdu::StartResume(StartResumePdu::new(V6))),
    (PduType::StopFreeze, || Pdu::StopFreeze(StopFreezePdu::new(V6))),
    (PduType::Acknowledge, || Pdu::Acknowledge(AcknowledgePdu::new(V6))),
    (PduType::Comment, || Pdu::Comment(CommentPdu::new(V6))),
];

static DIS2012_TABLE: &[(PduType, Constructor)] = &[
    (PduType::EntityState, || Pdu::EntityStateV7(EntityStatePduV7::new())),
    (PduType::Collision, || Pdu::Collision(CollisionPdu::new(V7))),
    (PduType::CreateEntity, || Pdu::CreateEntity(CreateEntityPdu::new(V7))),
    (PduType::RemoveEntity, || Pdu::RemoveEntity(RemoveEntityPdu::new(V7))),
    (PduType::StartResume, || Pdu::StartResume(StartResumePdu::new(V7))),
    (PduType::StopFreeze, || Pdu::StopFreeze(StopFreezePdu::new(V7))),
    (PduType::Acknowledge, || Pdu::Acknowledge(AcknowledgePdu::new(V7))),
    (PduType::Comment, || Pdu::Comment(CommentPdu::new(V7))),
    (PduType::SetRecordR, || {
        Pdu::SetRecordReliable(SetRecordReliablePdu::new(V7))
    }),
    (PduType::CollisionElastic, || {
        Pdu::CollisionElastic(CollisionElasticPdu::new(V7))
    }),
    (PduType::EntityStateUpdate, || {
        Pdu::EntityStateUpdate(EntityStateUpdatePdu::new(V7))
    }),
];

/// Creates PDUs ready to be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct PduFactory;

impl PduFactory {
    fn table(version: ProtocolVersion) -> &'static [(PduType, Constructor)] {
        match version {
            ProtocolVersion::Dis1998 => DIS1998_TABLE,
            ProtocolVersion::Dis2012 => DIS2012_TABLE,
        }
    }

    /// Create the zero-valued PDU mapped to `type_code` in `version`.
    ///
    /// The returned PDU has its header version, type and family set.
    pub fn create(type_code: u8, version: ProtocolVersion) -> Result<Pdu> {
        match Self::table(version)
            .iter()
            .find(|(pdu_type, _)| *pdu_type == type_code)
        {
            Some((_, construct)) => Ok(construct()),
            None => {
                debug!(
                    context = "PduFactory",
                    pdu_type = type_code,
                    version = version.as_u8(),
                    "no PDU mapped for type"
                );
                Err(CodecError::unsupported_pdu_type(type_code, version.as_u8()))
            }
        }
    }

    /// Like [`PduFactory::create`], taking the raw header version byte.
    pub fn create_raw(type_code: u8, version_tag: u8) -> Result<Pdu> {
        Self::create(type_code, ProtocolVersion::try_from(version_tag)?)
    }

    /// Whether `type_code` is mapped in `version`.
    pub fn is_supported(type_code: u8, version: ProtocolVersion) -> bool {
        Self::table(version)
            .iter()
            .any(|(pdu_type, _)| *pdu_type == type_code)
    }

    /// Every type mapped in `version`, in ascending code order.
    pub fn supported_types(version: ProtocolVersion) -> Vec<PduType> {
        Self::table(version)
            .iter()
            .map(|(pdu_type, _)| *pdu_type)
            .collect()
    }
}
