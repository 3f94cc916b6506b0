// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout discodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error taxonomy for marshalling
//! - [`CodecOptions`] - Explicit encode/decode configuration
//! - [`ByteOrder`] - Byte order selector for multi-byte primitives

pub mod config;
pub mod error;

use serde::{Deserialize, Serialize};

pub use config::CodecOptions;
pub use error::{CodecError, Result};

/// Byte order of multi-byte primitives.
///
/// DIS mandates big-endian on the wire. Little-endian is supported for
/// host-native captures and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first
    Little,
    /// Most significant byte first (DIS network order)
    #[default]
    Big,
}

/// Error returned when parsing a `ByteOrder` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseByteOrderError {
    _private: (),
}

impl std::fmt::Display for ParseByteOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid byte order, expected 'big' or 'little'")
    }
}

impl std::error::Error for ParseByteOrderError {}

impl std::str::FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "big" | "be" | "network" => Ok(ByteOrder::Big),
            "little" | "le" => Ok(ByteOrder::Little),
            _ => Err(ParseByteOrderError { _private: () }),
        }
    }
}

impl ByteOrder {
    /// Check if this is big-endian order.
    pub fn is_big(&self) -> bool {
        matches!(self, ByteOrder::Big)
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        }
    }
}
