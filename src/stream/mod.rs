// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte stream primitives.
//!
//! - [`ByteCursor`] - owned bytes, position and byte order
//! - [`Reader`] - sequential decode of fixed-width primitives
//! - [`Writer`] - sequential encode of fixed-width primitives

pub mod cursor;
pub mod reader;
pub mod writer;

pub use cursor::ByteCursor;
pub use reader::Reader;
pub use writer::Writer;
