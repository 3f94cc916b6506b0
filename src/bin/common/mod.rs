// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Args;

use discodec::{ByteOrder, CodecOptions, PduCodec};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Codec options shared by the commands that read captures.
#[derive(Args, Clone, Debug, Default)]
pub struct CodecArgs {
    /// TOML file with codec options
    #[arg(short, long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Treat the capture as little-endian
    #[arg(long)]
    pub little_endian: bool,
}

impl CodecArgs {
    /// Build the codec, with flags taking precedence over the config file.
    pub fn codec(&self) -> Result<PduCodec> {
        let mut options = match &self.config {
            Some(path) => CodecOptions::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => CodecOptions::default(),
        };
        if self.little_endian {
            options = options.with_byte_order(ByteOrder::Little);
        }
        Ok(PduCodec::new(options.with_trace_errors(true)))
    }
}

/// Read a capture file into memory.
pub fn read_capture(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("reading {}", path.display()))
}

/// Format a hex dump, 16 bytes per line, each line prefixed with its offset.
pub fn hex_dump(bytes: &[u8], indent: &str) -> String {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(line, chunk)| {
            let pairs: Vec<String> = chunk.chunks(2).map(hex::encode).collect();
            format!("{indent}{:04x}: {}", line * 16, pairs.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
