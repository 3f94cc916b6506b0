// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec configuration.
//!
//! Options are an explicit value handed to [`PduCodec`](crate::codec::PduCodec);
//! there is no process-wide state. They can be built in code or loaded from
//! a TOML document:
//!
//! ```toml
//! byte_order = "big"
//! timestamp_mode = "absolute"
//! stamp_timestamp = true
//! max_pdu_size = 8192
//! trace_errors = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{CodecError, Result};
use super::ByteOrder;
use crate::pdu::timestamp::TimestampMode;

/// Largest PDU a DIS datagram carries by convention.
pub const DEFAULT_MAX_PDU_SIZE: usize = 8192;

/// Options controlling encode and decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    /// Byte order for every multi-byte primitive.
    pub byte_order: ByteOrder,
    /// Timestamp convention used when stamping outgoing PDUs.
    pub timestamp_mode: TimestampMode,
    /// Overwrite the header timestamp with the current time on encode.
    pub stamp_timestamp: bool,
    /// Upper bound on an encoded PDU, `None` for unbounded.
    pub max_pdu_size: Option<usize>,
    /// Log failures through `tracing` before returning them.
    pub trace_errors: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Big,
            timestamp_mode: TimestampMode::Absolute,
            stamp_timestamp: false,
            max_pdu_size: Some(DEFAULT_MAX_PDU_SIZE),
            trace_errors: false,
        }
    }
}

impl CodecOptions {
    /// Parse options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CodecError::invalid_config(e.to_string()))
    }

    /// Load options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CodecError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the byte order.
    #[must_use]
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Stamp outgoing timestamps using the given convention.
    #[must_use]
    pub fn with_timestamps(mut self, mode: TimestampMode) -> Self {
        self.timestamp_mode = mode;
        self.stamp_timestamp = true;
        self
    }

    /// Set the maximum encoded PDU size.
    #[must_use]
    pub fn with_max_pdu_size(mut self, max: Option<usize>) -> Self {
        self.max_pdu_size = max;
        self
    }

    /// Enable or disable error tracing.
    #[must_use]
    pub fn with_trace_errors(mut self, trace: bool) -> Self {
        self.trace_errors = trace;
        self
    }
}
