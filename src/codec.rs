// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Configured encode and decode entry points.
//!
//! [`PduCodec`] owns nothing but its [`CodecOptions`]; every call creates its
//! own reader or writer, so one codec can be shared freely across threads.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use discodec::pdu::{AcknowledgePdu, Pdu, ProtocolVersion};
//! use discodec::{CodecOptions, PduCodec};
//!
//! let codec = PduCodec::new(CodecOptions::default());
//! let mut ack = AcknowledgePdu::new(ProtocolVersion::Dis2012);
//! ack.request_id = 42;
//!
//! let bytes = codec.encode(&mut Pdu::Acknowledge(ack))?;
//! assert_eq!(bytes.len(), 32);
//!
//! match codec.decode(&bytes)? {
//!     Pdu::Acknowledge(decoded) => assert_eq!(decoded.request_id, 42),
//!     other => panic!("unexpected {}", other.name()),
//! }
//! # Ok(())
//! # }
//! ```

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use tracing::{debug, warn};

use crate::core::{ByteOrder, CodecError, CodecOptions, Result};
use crate::pdu::{DisTimestamp, Pdu, PduFactory, PduHeader, PduRecord};
use crate::record::Record;
use crate::stream::{Reader, Writer};

/// Encoder and decoder for whole PDUs.
#[derive(Debug, Clone, Default)]
pub struct PduCodec {
    options: CodecOptions,
}

impl PduCodec {
    /// Create a codec with the given options.
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// The options this codec was built with.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encode a PDU.
    ///
    /// The header length is always overwritten with the encoded size. The
    /// timestamp is overwritten only when `stamp_timestamp` is enabled.
    pub fn encode(&self, pdu: &mut Pdu) -> Result<Vec<u8>> {
        let result = self.encode_record(pdu);
        self.traced(result, "encode")
    }

    /// Encode any PDU record, not just the variants of [`Pdu`].
    pub fn encode_record<P: PduRecord + ?Sized>(&self, pdu: &mut P) -> Result<Vec<u8>> {
        if self.options.stamp_timestamp {
            pdu.header_mut().timestamp = DisTimestamp::now(self.options.timestamp_mode);
        }
        let mut writer = match self.options.max_pdu_size {
            Some(limit) => Writer::with_limit(self.options.byte_order, limit),
            None => Writer::new(self.options.byte_order),
        };
        pdu.write_with_length(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Decode one PDU from the start of `bytes`.
    ///
    /// The version and type are peeked from the header to select the PDU,
    /// which then reads the whole buffer from the start. Bytes past the end
    /// of the PDU are ignored.
    pub fn decode(&self, bytes: &[u8]) -> Result<Pdu> {
        let result = self.decode_inner(bytes);
        self.traced(result, "decode")
    }

    fn decode_inner(&self, bytes: &[u8]) -> Result<Pdu> {
        if bytes.len() < PduHeader::SIZE {
            return Err(CodecError::truncated(PduHeader::SIZE, bytes.len(), 0));
        }
        let version = bytes[PduHeader::VERSION_OFFSET];
        let pdu_type = bytes[PduHeader::TYPE_OFFSET];
        let mut pdu = PduFactory::create_raw(pdu_type, version)?;
        let mut reader = Reader::new(bytes, self.options.byte_order);
        pdu.read(&mut reader)?;
        Ok(pdu)
    }

    /// Split a buffer of back-to-back PDUs using each header's length.
    pub fn frames<'a>(&self, bytes: &'a [u8]) -> Frames<'a> {
        Frames {
            bytes,
            offset: 0,
            order: self.options.byte_order,
            done: false,
        }
    }

    /// Decode every PDU in a buffer of back-to-back PDUs.
    ///
    /// Each PDU yields its own result, so unsupported types can be skipped
    /// without losing the rest of the buffer. A framing error is the last
    /// entry.
    pub fn decode_all(&self, bytes: &[u8]) -> Vec<Result<Pdu>> {
        self.frames(bytes)
            .map(|frame| match frame {
                Ok(frame) => self.decode(frame),
                Err(e) => self.traced(Err(e), "frame"),
            })
            .collect()
    }

    fn traced<T>(&self, result: Result<T>, operation: &'static str) -> Result<T> {
        if self.options.trace_errors {
            if let Err(e) = &result {
                warn!(
                    context = "PduCodec",
                    operation,
                    error = %e,
                    fields = ?e.log_fields(),
                    "PDU codec failure"
                );
            }
        }
        result
    }
}

/// Iterator over the raw PDUs of a concatenated buffer.
///
/// Stops at the end of the buffer or at a header whose length is zero. A
/// length shorter than a header yields `InvalidLength`, a length running past
/// the end of the buffer yields `TruncatedInput`; either ends the iteration.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    bytes: &'a [u8],
    offset: usize,
    order: ByteOrder,
    done: bool,
}

impl<'a> Frames<'a> {
    /// Offset of the next frame in the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn fail(&mut self, error: CodecError) -> Option<Result<&'a [u8]>> {
        self.done = true;
        Some(Err(error))
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = Result<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.bytes.len() {
            return None;
        }
        let rest = &self.bytes[self.offset..];
        let field = PduHeader::LENGTH_OFFSET..PduHeader::LENGTH_OFFSET + 2;
        let Some(raw) = rest.get(field) else {
            return self.fail(CodecError::truncated(
                PduHeader::LENGTH_OFFSET + 2,
                rest.len(),
                self.offset,
            ));
        };
        let declared = usize::from(match self.order {
            ByteOrder::Big => BigEndian::read_u16(raw),
            ByteOrder::Little => LittleEndian::read_u16(raw),
        });

        if declared == 0 {
            debug!(context = "Frames", offset = self.offset, "zero length ends stream");
            self.done = true;
            return None;
        }
        if declared < PduHeader::SIZE {
            return self.fail(CodecError::invalid_length(declared, self.offset, rest.len()));
        }
        if declared > rest.len() {
            return self.fail(CodecError::truncated(declared, rest.len(), self.offset));
        }

        debug!(context = "Frames", offset = self.offset, length = declared, "frame");
        self.offset += declared;
        Some(Ok(&rest[..declared]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdu::{AcknowledgePdu, CreateEntityPdu, ProtocolVersion, TimestampMode};

    fn ack(request_id: u32) -> Pdu {
        let mut pdu = AcknowledgePdu::new(ProtocolVersion::Dis2012);
        pdu.request_id = request_id;
        Pdu::Acknowledge(pdu)
    }

    #[test]
    fn test_encode_stamps_length() {
        let codec = PduCodec::default();
        let mut pdu = ack(1);
        let bytes = codec.encode(&mut pdu).unwrap();
        assert_eq!(pdu.header().length as usize, bytes.len());
        assert_eq!(pdu.header().timestamp.raw(), 0);
    }

    #[test]
    fn test_encode_stamps_timestamp_when_enabled() {
        let codec = PduCodec::new(CodecOptions::default().with_timestamps(TimestampMode::Absolute));
        let mut pdu = ack(1);
        codec.encode(&mut pdu).unwrap();
        assert!(pdu.header().timestamp.is_absolute());
    }

    #[test]
    fn test_encode_respects_size_limit() {
        let codec = PduCodec::new(CodecOptions::default().with_max_pdu_size(Some(16)));
        let err = codec.encode(&mut ack(1)).unwrap_err();
        assert!(matches!(err, CodecError::BufferFull { limit: 16, .. }));
    }

    #[test]
    fn test_decode_short_input() {
        let codec = PduCodec::default();
        let err = codec.decode(&[7, 1, 15]).unwrap_err();
        assert_eq!(err, CodecError::truncated(12, 3, 0));
    }

    #[test]
    fn test_decode_little_endian_capture() {
        let codec = PduCodec::new(CodecOptions::default().with_byte_order(ByteOrder::Little));
        let bytes = codec.encode(&mut ack(0x0102_0304)).unwrap();
        assert_eq!(&bytes[28..32], &[4, 3, 2, 1]);
        assert_eq!(codec.decode(&bytes).unwrap(), {
            let mut expected = ack(0x0102_0304);
            expected.header_mut().length = 32;
            expected
        });
    }

    #[test]
    fn test_frames_split_and_stop_at_zero_length() {
        let codec = PduCodec::default();
        let mut stream = codec.encode(&mut ack(1)).unwrap();
        let mut create = Pdu::CreateEntity(CreateEntityPdu::new(ProtocolVersion::Dis1998));
        stream.extend(codec.encode(&mut create).unwrap());
        stream.extend([0u8; 12]);

        let frames: Vec<_> = codec.frames(&stream).collect::<Result<_>>().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].len(), 32);
        assert_eq!(frames[1].len(), 28);
    }

    #[test]
    fn test_frames_bad_length_yields_one_error() {
        let codec = PduCodec::default();
        let mut stream = codec.encode(&mut ack(1)).unwrap();
        let mut bad = codec.encode(&mut ack(2)).unwrap();
        bad[9] = 5;
        stream.extend(bad);

        let mut frames = codec.frames(&stream);
        assert!(frames.next().unwrap().is_ok());
        assert_eq!(
            frames.next().unwrap().unwrap_err(),
            CodecError::invalid_length(5, 32, 32)
        );
        assert!(frames.next().is_none());
    }

    #[test]
    fn test_frames_overlong_length_is_truncation() {
        let codec = PduCodec::default();
        let mut stream = codec.encode(&mut ack(1)).unwrap();
        let mut bad = codec.encode(&mut ack(2)).unwrap();
        bad[9] = 200;
        stream.extend(bad);

        let mut frames = codec.frames(&stream);
        assert!(frames.next().unwrap().is_ok());
        assert_eq!(
            frames.next().unwrap().unwrap_err(),
            CodecError::truncated(200, 32, 32)
        );
        assert!(frames.next().is_none());
    }

    #[test]
    fn test_decode_all_continues_past_unsupported() {
        let codec = PduCodec::default();
        let mut stream = codec.encode(&mut ack(1)).unwrap();
        let mut unknown = codec.encode(&mut ack(2)).unwrap();
        unknown[2] = 28;
        stream.extend(unknown);
        stream.extend(codec.encode(&mut ack(3)).unwrap());

        let results = codec.decode_all(&stream);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].as_ref().unwrap_err().is_recoverable());
        assert!(results[2].is_ok());
    }
}
