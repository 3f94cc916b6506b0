// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for discodec.
//!
//! Every fallible operation in the crate returns [`Result`]. Nothing is
//! caught and logged internally: decode failures abort the record being
//! read, encode failures abort the write, and the caller decides what to do.

/// Errors that can occur while marshalling or unmarshalling DIS data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A read would run past the end of the available bytes.
    #[error(
        "Truncated input: requested {requested} bytes at position {cursor_pos}, but only {available} bytes available"
    )]
    TruncatedInput {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when error occurred
        cursor_pos: usize,
    },

    /// A byte window fell outside the buffer bounds.
    #[error("Window of {length} bytes at offset {start} is out of range (buffer length: {buffer_len})")]
    OutOfRange {
        /// Start of the requested window
        start: usize,
        /// Length of the requested window
        length: usize,
        /// Buffer length
        buffer_len: usize,
    },

    /// No record variant is mapped for this (type, version) pair.
    #[error("Unsupported PDU type {pdu_type} for protocol version {version}")]
    UnsupportedPduType {
        /// PDU type code from the header
        pdu_type: u8,
        /// Protocol version tag from the header
        version: u8,
    },

    /// The protocol version tag is not one this crate implements.
    #[error("Unsupported protocol version {version}")]
    UnsupportedProtocolVersion {
        /// Protocol version tag
        version: u8,
    },

    /// A PDU header declares a length that cannot frame a PDU.
    #[error("Invalid PDU length {declared} at offset {offset} ({remaining} bytes remaining)")]
    InvalidLength {
        /// Length declared in the header
        declared: usize,
        /// Offset of the PDU in the stream
        offset: usize,
        /// Bytes remaining from that offset
        remaining: usize,
    },

    /// A bounded writer has no room left.
    #[error("Buffer full: writing {requested} bytes would exceed the limit of {limit} bytes")]
    BufferFull {
        /// Configured writer limit
        limit: usize,
        /// Total size the write would have reached
        requested: usize,
    },

    /// In-memory data cannot be expressed on the wire.
    #[error("Cannot encode {record}: {message}")]
    EncodeError {
        /// Record being encoded
        record: String,
        /// Error message
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl CodecError {
    /// Create a truncated input error.
    pub fn truncated(requested: usize, available: usize, cursor_pos: usize) -> Self {
        CodecError::TruncatedInput {
            requested,
            available,
            cursor_pos,
        }
    }

    /// Create an out of range error.
    pub fn out_of_range(start: usize, length: usize, buffer_len: usize) -> Self {
        CodecError::OutOfRange {
            start,
            length,
            buffer_len,
        }
    }

    /// Create an unsupported PDU type error.
    pub fn unsupported_pdu_type(pdu_type: u8, version: u8) -> Self {
        CodecError::UnsupportedPduType { pdu_type, version }
    }

    /// Create an unsupported protocol version error.
    pub fn unsupported_version(version: u8) -> Self {
        CodecError::UnsupportedProtocolVersion { version }
    }

    /// Create an invalid length error.
    pub fn invalid_length(declared: usize, offset: usize, remaining: usize) -> Self {
        CodecError::InvalidLength {
            declared,
            offset,
            remaining,
        }
    }

    /// Create a buffer full error.
    pub fn buffer_full(limit: usize, requested: usize) -> Self {
        CodecError::BufferFull { limit, requested }
    }

    /// Create an encode error.
    pub fn encode(record: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::EncodeError {
            record: record.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        CodecError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether a stream reader can skip the offending PDU and carry on.
    ///
    /// Captures routinely contain PDU types a given build does not map, so
    /// an unsupported type or version only costs the one PDU.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CodecError::UnsupportedPduType { .. } | CodecError::UnsupportedProtocolVersion { .. }
        )
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::TruncatedInput {
                requested,
                available,
                cursor_pos,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("cursor", cursor_pos.to_string()),
            ],
            CodecError::OutOfRange {
                start,
                length,
                buffer_len,
            } => vec![
                ("start", start.to_string()),
                ("length", length.to_string()),
                ("buffer_len", buffer_len.to_string()),
            ],
            CodecError::UnsupportedPduType { pdu_type, version } => vec![
                ("pdu_type", pdu_type.to_string()),
                ("version", version.to_string()),
            ],
            CodecError::UnsupportedProtocolVersion { version } => {
                vec![("version", version.to_string())]
            }
            CodecError::InvalidLength {
                declared,
                offset,
                remaining,
            } => vec![
                ("declared", declared.to_string()),
                ("offset", offset.to_string()),
                ("remaining", remaining.to_string()),
            ],
            CodecError::BufferFull { limit, requested } => vec![
                ("limit", limit.to_string()),
                ("requested", requested.to_string()),
            ],
            CodecError::EncodeError { record, message } => {
                vec![("record", record.clone()), ("message", message.clone())]
            }
            CodecError::InvalidConfig { message } => vec![("message", message.clone())],
            CodecError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

/// Result type for discodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
