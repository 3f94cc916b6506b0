// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! PDU type codes and their names.
//!
//! The table covers every code assigned by DIS 2012. Codes outside it are
//! kept as raw numbers so that unknown traffic can still be reported.

use std::fmt;

/// Declares the PDU type enum, its integer conversions and its names.
macro_rules! pdu_type_table {
    ( $( $(#[$attr:meta])* ( $variant:ident => $value:literal, $name:literal ) )* ) => {
        /// A DIS PDU type code.
        #[derive(Clone, Copy, Debug)]
        pub enum PduType {
            $( $(#[$attr])* $variant ),*,

            /// A code without an assigned name.
            Int(u8),
        }

        impl PduType {
            /// Every named code, in ascending order.
            pub const ALL: &'static [PduType] = &[ $( PduType::$variant ),* ];

            /// Returns a value from its raw code.
            pub fn from_int(value: u8) -> Self {
                match value {
                    $( $value => PduType::$variant ),*,
                    _ => PduType::Int(value),
                }
            }

            /// Returns the raw code.
            pub fn to_int(self) -> u8 {
                match self {
                    $( PduType::$variant => $value ),*,
                    PduType::Int(value) => value,
                }
            }

            /// Returns the human-readable name, if the code has one.
            pub fn name(self) -> Option<&'static str> {
                match PduType::from_int(self.to_int()) {
                    $( PduType::$variant => Some($name) ),*,
                    PduType::Int(_) => None,
                }
            }
        }
    };
}

pdu_type_table! {
    (Other => 0, "Other")
    (EntityState => 1, "Entity State")
    (Fire => 2, "Fire")
    (Detonation => 3, "Detonation")
    (Collision => 4, "Collision")
    (ServiceRequest => 5, "Service Request")
    (ResupplyOffer => 6, "Resupply Offer")
    (ResupplyReceived => 7, "Resupply Received")
    (ResupplyCancel => 8, "Resupply Cancel")
    (RepairComplete => 9, "Repair Complete")
    (RepairResponse => 10, "Repair Response")
    (CreateEntity => 11, "Create Entity")
    (RemoveEntity => 12, "Remove Entity")
    (StartResume => 13, "Start/Resume")
    (StopFreeze => 14, "Stop/Freeze")
    (Acknowledge => 15, "Acknowledge")
    (ActionRequest => 16, "Action Request")
    (ActionResponse => 17, "Action Response")
    (DataQuery => 18, "Data Query")
    (SetData => 19, "Set Data")
    (Data => 20, "Data")
    (EventReport => 21, "Event Report")
    (Comment => 22, "Comment")
    (ElectromagneticEmission => 23, "Electromagnetic Emission")
    (Designator => 24, "Designator")
    (Transmitter => 25, "Transmitter")
    (Signal => 26, "Signal")
    (Receiver => 27, "Receiver")
    (Iff => 28, "IFF")
    (UnderwaterAcoustic => 29, "Underwater Acoustic")
    (SupplementalEmission => 30, "Supplemental Emission/Entity State")
    (IntercomSignal => 31, "Intercom Signal")
    (IntercomControl => 32, "Intercom Control")
    (AggregateState => 33, "Aggregate State")
    (IsGroupOf => 34, "IsGroupOf")
    (TransferOwnership => 35, "Transfer Ownership")
    (IsPartOf => 36, "IsPartOf")
    (MinefieldState => 37, "Minefield State")
    (MinefieldQuery => 38, "Minefield Query")
    (MinefieldData => 39, "Minefield Data")
    (MinefieldResponseNack => 40, "Minefield Response NACK")
    (EnvironmentalProcess => 41, "Environmental Process")
    (GriddedData => 42, "Gridded Data")
    (PointObjectState => 43, "Point Object State")
    (LinearObjectState => 44, "Linear Object State")
    (ArealObjectState => 45, "Areal Object State")
    (Tspi => 46, "TSPI")
    (Appearance => 47, "Appearance")
    (ArticulatedParts => 48, "Articulated Parts")
    (LeFire => 49, "LE Fire")
    (LeDetonation => 50, "LE Detonation")
    (CreateEntityR => 51, "Create Entity-R")
    (RemoveEntityR => 52, "Remove Entity-R")
    (StartResumeR => 53, "Start/Resume-R")
    (StopFreezeR => 54, "Stop/Freeze-R")
    (AcknowledgeR => 55, "Acknowledge-R")
    (ActionRequestR => 56, "Action Request-R")
    (ActionResponseR => 57, "Action Response-R")
    (DataQueryR => 58, "Data Query-R")
    (SetDataR => 59, "Set Data-R")
    (DataR => 60, "Data-R")
    (EventReportR => 61, "Event Report-R")
    (CommentR => 62, "Comment-R")
    (RecordR => 63, "Record-R")
    (SetRecordR => 64, "Set Record-R")
    (RecordQueryR => 65, "Record Query-R")
    (CollisionElastic => 66, "Collision-Elastic")
    (EntityStateUpdate => 67, "Entity State Update")
    (DirectedEnergyFire => 68, "Directed Energy Fire")
    (EntityDamageStatus => 69, "Entity Damage Status")
    (InformationOperationsAction => 70, "Information Operations Action")
    (InformationOperationsReport => 71, "Information Operations Report")
    (Attribute => 72, "Attribute")
}

impl From<u8> for PduType {
    fn from(value: u8) -> Self {
        PduType::from_int(value)
    }
}

impl From<PduType> for u8 {
    fn from(value: PduType) -> Self {
        value.to_int()
    }
}

impl PartialEq for PduType {
    fn eq(&self, other: &Self) -> bool {
        self.to_int() == other.to_int()
    }
}

impl PartialEq<u8> for PduType {
    fn eq(&self, other: &u8) -> bool {
        self.to_int() == *other
    }
}

impl Eq for PduType {}

impl std::hash::Hash for PduType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_int().hash(state)
    }
}

impl fmt::Display for PduType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown ({})", self.to_int()),
        }
    }
}
