// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Frames command - show how a capture splits into PDUs without decoding.

use std::path::PathBuf;

use clap::Args;

use crate::common::{hex_dump, read_capture, CodecArgs, Result};
use discodec::{PduHeader, PduType};

/// Split a capture on header lengths.
#[derive(Args, Clone, Debug)]
pub struct FramesCmd {
    /// Capture of back-to-back PDUs
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Dump the bytes of each frame
    #[arg(long)]
    hex: bool,

    #[command(flatten)]
    codec: CodecArgs,
}

impl FramesCmd {
    pub fn run(self) -> Result<()> {
        let codec = self.codec.codec()?;
        let bytes = read_capture(&self.input)?;

        println!("{:>8}  {:>6}  {:>3}  TYPE", "OFFSET", "LENGTH", "VER");

        let mut frames = codec.frames(&bytes);
        let mut count = 0usize;
        loop {
            let offset = frames.offset();
            let Some(frame) = frames.next() else {
                break;
            };
            let frame = frame?;
            let kind = PduType::from_int(frame[PduHeader::TYPE_OFFSET]);
            println!(
                "{offset:>8}  {:>6}  {:>3}  {kind}",
                frame.len(),
                frame[PduHeader::VERSION_OFFSET]
            );
            if self.hex {
                println!("{}", hex_dump(frame, "    "));
            }
            count += 1;
        }

        println!("{count} frame(s), {} bytes", frames.offset());
        Ok(())
    }
}
