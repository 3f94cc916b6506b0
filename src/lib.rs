// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # discodec
//!
//! Binary marshalling core for the Distributed Interactive Simulation
//! protocol (DIS, IEEE 1278.1).
//!
//! This library provides the layers needed to move DIS PDUs on and off the
//! wire, organized bottom-up:
//! - **Byte streams** in [`stream`](crate::stream) - cursor, reader and writer
//! - **Records** in [`record`](crate::record) - the encode/decode contract
//!   and the shared sub-records
//! - **PDUs** in [`pdu`](crate::pdu) - header, PDU layouts and the factory
//! - **Codec** in [`codec`](crate::codec) - configured entry points and
//!   stream splitting
//!
//! ## Architecture
//!
//! - `core/` - errors, configuration, byte order
//! - `stream/` - endian-aware primitive encode and decode
//! - `record/` - `Record` trait, variable record lists, sub-records
//! - `pdu/` - `PduHeader`, `Pdu`, `PduFactory`, timestamps
//!
//! ## Example: Decoding a capture
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use discodec::{PduCodec, CodecOptions};
//!
//! let bytes = std::fs::read("capture.dis")?;
//! let codec = PduCodec::new(CodecOptions::default());
//! for result in codec.decode_all(&bytes) {
//!     match result {
//!         Ok(pdu) => println!("{}", pdu.name()),
//!         Err(e) if e.is_recoverable() => continue,
//!         Err(e) => return Err(e.into()),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{ByteOrder, CodecError, CodecOptions, Result};

// Byte streams
pub mod stream;

// Record contract and sub-records
pub mod record;

// Protocol data units
pub mod pdu;

// Configured entry points
pub mod codec;

pub use codec::{Frames, PduCodec};
pub use pdu::{Pdu, PduFactory, PduHeader, PduRecord, PduType, ProtocolVersion};
pub use record::{Record, VariableRecordList};
