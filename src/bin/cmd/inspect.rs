// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - decode a capture and print each PDU.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_capture, CodecArgs, Result};
use discodec::record::describe_to_string;
use discodec::{Pdu, PduRecord};

/// Decode every PDU in a capture.
#[derive(Args, Clone, Debug)]
pub struct InspectCmd {
    /// Capture of back-to-back PDUs
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Print decoded PDUs as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    codec: CodecArgs,
}

/// Per-capture tally.
#[derive(Debug, Default)]
struct Summary {
    decoded: usize,
    skipped: usize,
    failed: usize,
}

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        let codec = self.codec.codec()?;
        let bytes = read_capture(&self.input)?;

        let mut summary = Summary::default();
        let mut decoded = Vec::new();

        for (index, result) in codec.decode_all(&bytes).into_iter().enumerate() {
            match result {
                Ok(pdu) => {
                    summary.decoded += 1;
                    if self.json {
                        decoded.push(pdu);
                    } else {
                        print_pdu(index, &pdu);
                    }
                }
                Err(e) if e.is_recoverable() => {
                    summary.skipped += 1;
                    eprintln!("#{index}: skipped: {e}");
                }
                Err(e) => {
                    summary.failed += 1;
                    eprintln!("#{index}: failed: {e}");
                }
            }
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        } else {
            println!(
                "{} decoded, {} skipped, {} failed",
                summary.decoded, summary.skipped, summary.failed
            );
        }

        if summary.failed > 0 {
            anyhow::bail!(
                "{} PDU(s) in {} could not be decoded",
                summary.failed,
                self.input.display()
            );
        }
        Ok(())
    }
}

fn print_pdu(index: usize, pdu: &Pdu) {
    let header = pdu.header();
    println!(
        "#{index}: {} (type {}, version {}, {} bytes)",
        pdu.name(),
        header.pdu_type,
        header.protocol_version,
        header.length
    );
    for line in describe_to_string(pdu).lines() {
        println!("  {line}");
    }
}
