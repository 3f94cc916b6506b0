// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Protocol data units.
//!
//! Every PDU embeds a [`PduHeader`] by value and implements [`Record`] plus
//! [`PduRecord`]. The [`Pdu`] enum unites the implemented PDUs so that a
//! decoded stream can be handled without knowing its types in advance.
//!
//! ## Architecture
//!
//! - **Header** ([`header`]) - the 12-byte header, versions and families
//! - **Type table** ([`types`]) - every DIS 2012 type code and its name
//! - **Timestamps** ([`timestamp`]) - DIS time and alternate clocks
//! - **PDUs** ([`entity`], [`collision`], [`simulation`]) - wire layouts
//! - **Factory** ([`factory`]) - `(type, version)` to zero-valued [`Pdu`]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CodecError, Result};
use crate::record::{Describer, Record};
use crate::stream::{Reader, Writer};

/// Adds `new(version)` and the [`PduRecord`] header accessors to a PDU
/// struct with a `header` field.
macro_rules! impl_pdu {
    ($pdu:ident, $kind:expr, $family:expr) => {
        impl $pdu {
            /// Zero-valued PDU with the header identity filled in.
            pub fn new(version: $crate::pdu::ProtocolVersion) -> Self {
                Self {
                    header: $crate::pdu::PduHeader::new(version, $kind, $family),
                    ..Default::default()
                }
            }
        }

        impl $crate::pdu::PduRecord for $pdu {
            fn header(&self) -> &$crate::pdu::PduHeader {
                &self.header
            }

            fn header_mut(&mut self) -> &mut $crate::pdu::PduHeader {
                &mut self.header
            }
        }
    };
}

pub mod collision;
pub mod entity;
pub mod factory;
pub mod header;
pub mod simulation;
pub mod timestamp;
pub mod types;

pub use collision::{CollisionElasticPdu, CollisionPdu};
pub use entity::{
    EntityParameter, EntityStatePdu, EntityStatePduV6, EntityStatePduV7, EntityStateUpdatePdu,
};
pub use factory::PduFactory;
pub use header::{family, PduHeader, ProtocolVersion};
pub use simulation::{
    AcknowledgePdu, CommentPdu, CreateEntityPdu, RemoveEntityPdu, SetRecordReliablePdu,
    StartResumePdu, StopFreezePdu,
};
pub use timestamp::{DisTimestamp, TimestampMode};
pub use types::PduType;

// =============================================================================
// PduRecord Trait
// =============================================================================

/// A record that starts with a [`PduHeader`].
pub trait PduRecord: Record {
    /// The embedded header.
    fn header(&self) -> &PduHeader;

    /// Mutable access to the embedded header.
    fn header_mut(&mut self) -> &mut PduHeader;

    /// Store the current encoded size in the header length field.
    ///
    /// Fails when the PDU is larger than a 16-bit length can describe.
    fn stamp_length(&mut self) -> Result<u16> {
        let size = self.marshalled_size();
        let length = u16::try_from(size).map_err(|_| {
            CodecError::encode(
                format!("PDU type {}", self.header().pdu_type),
                format!("{size} bytes exceed the 16-bit length field"),
            )
        })?;
        self.header_mut().length = length;
        Ok(length)
    }

    /// Stamp the length, then write.
    fn write_with_length(&mut self, writer: &mut Writer) -> Result<()> {
        self.stamp_length()?;
        self.write(writer)
    }
}

// =============================================================================
// Pdu Enum
// =============================================================================

/// Any PDU this crate can encode and decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pdu {
    EntityStateV6(EntityStatePduV6),
    EntityStateV7(EntityStatePduV7),
    Collision(CollisionPdu),
    CreateEntity(CreateEntityPdu),
    RemoveEntity(RemoveEntityPdu),
    StartResume(StartResumePdu),
    StopFreeze(StopFreezePdu),
    Acknowledge(AcknowledgePdu),
    Comment(CommentPdu),
    SetRecordReliable(SetRecordReliablePdu),
    CollisionElastic(CollisionElasticPdu),
    EntityStateUpdate(EntityStateUpdatePdu),
}

/// Evaluates `$body` with `$inner` bound to the PDU inside any variant.
macro_rules! with_inner {
    ($pdu:expr, $inner:ident => $body:expr) => {
        match $pdu {
            Pdu::EntityStateV6($inner) => $body,
            Pdu::EntityStateV7($inner) => $body,
            Pdu::Collision($inner) => $body,
            Pdu::CreateEntity($inner) => $body,
            Pdu::RemoveEntity($inner) => $body,
            Pdu::StartResume($inner) => $body,
            Pdu::StopFreeze($inner) => $body,
            Pdu::Acknowledge($inner) => $body,
            Pdu::Comment($inner) => $body,
            Pdu::SetRecordReliable($inner) => $body,
            Pdu::CollisionElastic($inner) => $body,
            Pdu::EntityStateUpdate($inner) => $body,
        }
    };
}

impl Pdu {
    /// The header type code as a [`PduType`].
    pub fn kind(&self) -> PduType {
        self.header().kind()
    }

    /// Human-readable PDU name.
    pub fn name(&self) -> &'static str {
        match self {
            Pdu::EntityStateV6(_) | Pdu::EntityStateV7(_) => "Entity State",
            Pdu::Collision(_) => "Collision",
            Pdu::CreateEntity(_) => "Create Entity",
            Pdu::RemoveEntity(_) => "Remove Entity",
            Pdu::StartResume(_) => "Start/Resume",
            Pdu::StopFreeze(_) => "Stop/Freeze",
            Pdu::Acknowledge(_) => "Acknowledge",
            Pdu::Comment(_) => "Comment",
            Pdu::SetRecordReliable(_) => "Set Record-R",
            Pdu::CollisionElastic(_) => "Collision-Elastic",
            Pdu::EntityStateUpdate(_) => "Entity State Update",
        }
    }
}

impl Record for Pdu {
    fn marshalled_size(&self) -> usize {
        with_inner!(self, pdu => pdu.marshalled_size())
    }

    fn write(&self, writer: &mut Writer) -> Result<()> {
        with_inner!(self, pdu => pdu.write(writer))
    }

    fn read(&mut self, reader: &mut Reader) -> Result<()> {
        with_inner!(self, pdu => pdu.read(reader))
    }

    fn describe(&self, out: &mut Describer<'_>) -> fmt::Result {
        with_inner!(self, pdu => pdu.describe(out))
    }
}

impl PduRecord for Pdu {
    fn header(&self) -> &PduHeader {
        with_inner!(self, pdu => pdu.header())
    }

    fn header_mut(&mut self) -> &mut PduHeader {
        with_inner!(self, pdu => pdu.header_mut())
    }
}
